use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{BASE_FORWARD_SPEED, MAX_CLIMB_RATE, MAX_PITCH_DEG, SPEED_RESPONSE_RATE};

/// Constants of the simple speed/climb model.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightModelConfig {
    /// Target speed at zero throttle; throttle is added on top.
    pub base_speed: f64,
    /// Rate constant (1/s) of the approach towards the target speed.
    pub speed_response: f64,
    /// Climb rate at full pitch deflection.
    pub climb_rate: f64,
    /// Pitch that maps to the full climb rate (degrees).
    pub max_pitch: f64,
}

impl Default for FlightModelConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_FORWARD_SPEED,
            speed_response: SPEED_RESPONSE_RATE,
            climb_rate: MAX_CLIMB_RATE,
            max_pitch: MAX_PITCH_DEG,
        }
    }
}
