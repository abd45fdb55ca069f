use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::time::Duration;

use crate::plugins::FrameCapturePlugin;
use crate::resources::FlyerConfig;

const FRAME_RATE: f64 = 60.0;

/// Windowless runtime: a fixed-rate schedule runner, logging and
/// offscreen frame capture.
pub struct HeadlessPlugin {
    config: FlyerConfig,
}

impl HeadlessPlugin {
    pub fn new(config: FlyerConfig) -> Self {
        HeadlessPlugin { config }
    }
}

impl Plugin for HeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / FRAME_RATE,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(FrameCapturePlugin::new(
            self.config.render.clone(),
            self.config.capture.clone(),
        ));
    }
}
