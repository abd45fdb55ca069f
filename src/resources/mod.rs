pub mod config;
mod frame;

pub use config::{CaptureConfig, FlyerConfig, RenderConfig, TickSettings};
pub use frame::{LatestFrame, LatestHorizon};
