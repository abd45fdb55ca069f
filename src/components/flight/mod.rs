mod config;
mod start;
mod state;

pub use config::FlightModelConfig;
pub use start::{FixedStartConfig, RandomStartConfig, StartConfig};
pub use state::{ControlInput, FlightState, PlayerAircraft};
