use bevy::prelude::*;
use horizon_flyer::{
    components::{ControlInput, FlightState, PlayerAircraft, StartConfig},
    plugins::{FlightPlugin, FrameCapturePlugin},
    resources::{CaptureConfig, FlyerConfig, LatestHorizon, TickSettings},
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: FlyerConfig,
    capture: Option<CaptureConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let mut config = FlyerConfig::default();
        config.tick = TickSettings::fixed(1.0 / 60.0);
        Self {
            config,
            capture: None,
        }
    }
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlyerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.config.tick = TickSettings::fixed(dt);
        self
    }

    pub fn with_input(mut self, input: ControlInput) -> Self {
        self.config.input = input;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.config.start = start;
        self
    }

    pub fn with_capture(mut self, capture: CaptureConfig) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Startup runs together with the first step, so no frame is consumed here.
    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin::with_config(self.config.clone()));

        if let Some(capture) = self.capture {
            app.add_plugins(FrameCapturePlugin::new(self.config.render.clone(), capture));
        }

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

#[allow(dead_code)]
impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn set_input(&mut self, input: ControlInput) {
        self.app.world_mut().insert_resource(input);
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn player_state(&mut self) -> Option<FlightState> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&FlightState, With<PlayerAircraft>>();
        query.get_single(world).ok().copied()
    }

    pub fn latest_horizon(&self) -> &LatestHorizon {
        self.resource::<LatestHorizon>()
    }
}
