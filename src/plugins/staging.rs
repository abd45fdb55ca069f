use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildAircraft,
    BuildRenderer,
}

/// Per-frame ordering: inputs, then physics, then projection and capture.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Physics,
    Project,
    Capture,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildAircraft, StartupStage::BuildRenderer).chain(),
        )
        .configure_sets(
            Update,
            (
                FlightSet::Input,
                FlightSet::Physics,
                FlightSet::Project,
                FlightSet::Capture,
            )
                .chain(),
        );
    }
}
