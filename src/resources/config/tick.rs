use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Controls how far the flight model advances on each app update.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSettings {
    /// Fixed step in seconds. `None` follows the frame time.
    pub fixed_dt: Option<f64>,
}

impl TickSettings {
    pub fn fixed(dt: f64) -> Self {
        Self { fixed_dt: Some(dt) }
    }

    pub fn step(&self, time: &Time) -> f64 {
        self.fixed_dt.unwrap_or_else(|| time.delta_secs_f64())
    }
}
