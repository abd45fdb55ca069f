use bevy::log::{debug, info};

use crate::components::{
    ControlInput, FlightModelConfig, FlightState, HorizonConfig, HorizonFrame, Viewport,
};
use crate::resources::FlyerConfig;
use crate::systems::{advance, project};

/// Explicit per-session context for hosts that drive the tick loop
/// themselves instead of through the ECS plugin.
#[derive(Debug, Clone)]
pub struct FlightSession {
    state: FlightState,
    flight: FlightModelConfig,
    horizon: HorizonConfig,
    viewport: Viewport,
    ticks: u64,
}

impl FlightSession {
    pub fn new(config: &FlyerConfig) -> Self {
        let state = config.start.initial_state();
        info!("Starting flight session at {:?}", state);
        Self {
            state,
            flight: config.flight,
            horizon: config.horizon,
            viewport: config.render.viewport(),
            ticks: 0,
        }
    }

    /// Advances the flight model by `dt` seconds and projects the result.
    pub fn tick(&mut self, dt: f64, input: &ControlInput) -> HorizonFrame {
        advance(&mut self.state, &self.flight, dt, input);
        self.ticks += 1;
        debug!("tick {}: {:?}", self.ticks, self.state);
        project(&self.state, input.roll, self.viewport, &self.horizon)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for FlightSession {
    fn default() -> Self {
        Self::new(&FlyerConfig::default())
    }
}
