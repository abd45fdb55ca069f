mod model;

pub use model::{advance, flight_model_system};
