use bevy::prelude::*;

use crate::plugins::{FlightSet, StartupSequencePlugin, StartupStage};
use crate::rendering::FrameRenderer;
use crate::resources::{CaptureConfig, LatestFrame, RenderConfig};
use crate::systems::capture_frame_system;

#[derive(Resource)]
pub struct FrameCapture {
    pub renderer: FrameRenderer,
    pub config: CaptureConfig,
    pub frames_seen: u32,
}

/// Renders projected frames offscreen with tiny-skia.
pub struct FrameCapturePlugin {
    render: RenderConfig,
    capture: CaptureConfig,
}

impl FrameCapturePlugin {
    pub fn new(render: RenderConfig, capture: CaptureConfig) -> Self {
        Self { render, capture }
    }

    fn setup_capture(mut commands: Commands, render: RenderConfig, capture: CaptureConfig) {
        info!(
            "Setting up frame capture {}x{} every {} frame(s)",
            render.screen_width, render.screen_height, capture.capture_every
        );
        commands.insert_resource(FrameCapture {
            renderer: FrameRenderer::new(render),
            config: capture,
            frames_seen: 0,
        });
    }
}

impl Plugin for FrameCapturePlugin {
    fn build(&self, app: &mut App) {
        let render = self.render.clone();
        let capture = self.capture.clone();

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.init_resource::<LatestFrame>()
            .add_systems(
                Startup,
                (move |commands: Commands| {
                    Self::setup_capture(commands, render.clone(), capture.clone())
                })
                .in_set(StartupStage::BuildRenderer),
            )
            .add_systems(
                Update,
                capture_frame_system
                    .run_if(resource_exists::<FrameCapture>)
                    .in_set(FlightSet::Capture),
            );
    }
}
