use bevy::prelude::*;

use crate::components::{FlightModelConfig, PlayerAircraft, StartConfig};
use crate::plugins::{FlightSet, StartupSequencePlugin, StartupStage, ViewportResized};
use crate::resources::{FlyerConfig, LatestHorizon};
use crate::systems::{flight_model_system, horizon_projection_system, viewport_resize_system};

/// Runs the flight model and horizon projection once per app update.
pub struct FlightPlugin {
    config: FlyerConfig,
}

impl FlightPlugin {
    pub fn with_config(config: FlyerConfig) -> Self {
        FlightPlugin { config }
    }

    fn setup_aircraft(mut commands: Commands, flight: FlightModelConfig, start: StartConfig) {
        let state = start.initial_state();
        info!("Spawning player aircraft at {:?}", state);
        commands.spawn((
            state,
            flight,
            PlayerAircraft,
            Name::new("Player Aircraft"),
        ));
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::with_config(FlyerConfig::default())
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let flight = self.config.flight;
        let start = self.config.start.clone();

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(self.config.horizon)
            .insert_resource(self.config.render.viewport())
            .insert_resource(self.config.input)
            .insert_resource(self.config.tick)
            .init_resource::<LatestHorizon>()
            .add_event::<ViewportResized>()
            .add_systems(
                Startup,
                (move |commands: Commands| Self::setup_aircraft(commands, flight, start.clone()))
                    .in_set(StartupStage::BuildAircraft),
            )
            .add_systems(
                Update,
                (
                    viewport_resize_system.in_set(FlightSet::Input),
                    flight_model_system.in_set(FlightSet::Physics),
                    horizon_projection_system.in_set(FlightSet::Project),
                ),
            );
    }
}
