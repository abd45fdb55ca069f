mod capture;
mod events;
mod flight;
mod headless;
mod staging;

pub use capture::{FrameCapture, FrameCapturePlugin};
pub use events::ViewportResized;
pub use flight::FlightPlugin;
pub use headless::HeadlessPlugin;
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};
