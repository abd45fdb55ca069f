pub mod capture;
pub mod render;
pub mod simulation;
pub mod tick;

pub use capture::CaptureConfig;
pub use render::RenderConfig;
pub use simulation::FlyerConfig;
pub use tick::TickSettings;
