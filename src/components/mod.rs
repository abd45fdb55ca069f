pub mod flight;
pub mod horizon;

pub use flight::{
    ControlInput, FixedStartConfig, FlightModelConfig, FlightState, PlayerAircraft,
    RandomStartConfig, StartConfig,
};
pub use horizon::{HorizonConfig, HorizonFrame, Line2D, Viewport};
