use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{MAX_PITCH_DEG, MAX_ROLL_DEG, MAX_THROTTLE, START_ALTITUDE, START_FORWARD_SPEED};

/// Scalar flight state accumulated over a session.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Height above the ground plane, never negative.
    pub altitude: f64,
    /// Forward speed along the runway axis.
    pub forward_speed: f64,
    /// Total distance flown, drives the grid scroll.
    pub distance: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            altitude: START_ALTITUDE,
            forward_speed: START_FORWARD_SPEED,
            distance: 0.0,
        }
    }
}

impl FlightState {
    pub fn new(altitude: f64, forward_speed: f64, distance: f64) -> Self {
        Self {
            altitude: altitude.max(0.0),
            forward_speed: forward_speed.max(0.0),
            distance: distance.max(0.0),
        }
    }
}

/// Normalized control values for one tick.
///
/// Pitch and roll are in degrees. Raw device signals are normalized into this
/// range before they reach the flight core.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Throttle in [0, 100].
    pub throttle: f64,
    /// Pitch in [-30, 30] degrees, positive climbs.
    pub pitch: f64,
    /// Roll in [-30, 30] degrees, positive banks right.
    pub roll: f64,
}

impl Default for ControlInput {
    fn default() -> Self {
        Self {
            throttle: 50.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl ControlInput {
    /// Builds an input, clamping every channel into its range.
    pub fn new(throttle: f64, pitch: f64, roll: f64) -> Self {
        Self {
            throttle: throttle.clamp(0.0, MAX_THROTTLE),
            pitch: pitch.clamp(-MAX_PITCH_DEG, MAX_PITCH_DEG),
            roll: roll.clamp(-MAX_ROLL_DEG, MAX_ROLL_DEG),
        }
    }

    pub fn with_throttle(self, throttle: f64) -> Self {
        Self::new(throttle, self.pitch, self.roll)
    }

    pub fn with_pitch(self, pitch: f64) -> Self {
        Self::new(self.throttle, pitch, self.roll)
    }

    pub fn with_roll(self, roll: f64) -> Self {
        Self::new(self.throttle, self.pitch, roll)
    }
}

/// Marks the aircraft the camera and renderer follow.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerAircraft;
