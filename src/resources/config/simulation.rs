use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{CaptureConfig, RenderConfig, TickSettings};
use crate::components::{ControlInput, FlightModelConfig, HorizonConfig, StartConfig};
use crate::utils::{SimError, MAX_PITCH_DEG, MAX_ROLL_DEG, MAX_THROTTLE};

/// Top-level configuration of a flight session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlyerConfig {
    #[serde(default)]
    pub flight: FlightModelConfig,
    #[serde(default)]
    pub horizon: HorizonConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub start: StartConfig,
    #[serde(default)]
    pub tick: TickSettings,
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Input held for the whole run when no input collaborator is attached.
    #[serde(default)]
    pub input: ControlInput,
}

impl FlyerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let horizon = &self.horizon;
        if !(horizon.horizon_ratio > 0.0 && horizon.horizon_ratio < 1.0) {
            return Err(invalid("horizon_ratio", horizon.horizon_ratio));
        }
        if horizon.perspective_scale <= 0.0 {
            return Err(invalid("perspective_scale", horizon.perspective_scale));
        }
        if horizon.grid_spacing <= 0.0 {
            return Err(invalid("grid_spacing", horizon.grid_spacing));
        }
        if horizon.num_grid_lines == 0 {
            return Err(invalid("num_grid_lines", horizon.num_grid_lines));
        }
        if self.render.screen_width == 0 || self.render.screen_height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "screen size must be non-zero, got {}x{}",
                self.render.screen_width, self.render.screen_height
            )));
        }

        let flight = &self.flight;
        if flight.speed_response < 0.0 {
            return Err(invalid("speed_response", flight.speed_response));
        }
        if flight.climb_rate < 0.0 {
            return Err(invalid("climb_rate", flight.climb_rate));
        }
        if flight.max_pitch <= 0.0 {
            return Err(invalid("max_pitch", flight.max_pitch));
        }
        let input = &self.input;
        if !(0.0..=MAX_THROTTLE).contains(&input.throttle) {
            return Err(invalid("input.throttle", input.throttle));
        }
        if !(-MAX_PITCH_DEG..=MAX_PITCH_DEG).contains(&input.pitch) {
            return Err(invalid("input.pitch", input.pitch));
        }
        if !(-MAX_ROLL_DEG..=MAX_ROLL_DEG).contains(&input.roll) {
            return Err(invalid("input.roll", input.roll));
        }
        if let Some(dt) = self.tick.fixed_dt {
            if dt < 0.0 {
                return Err(invalid("fixed_dt", dt));
            }
        }
        Ok(())
    }
}

fn invalid<T: std::fmt::Display>(name: &str, value: T) -> SimError {
    SimError::InvalidConfig(format!("invalid value for '{}': {}", name, value))
}
