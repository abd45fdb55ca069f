use bevy::prelude::*;

use crate::{
    plugins::FrameCapture,
    rendering::FrameRenderer,
    resources::{LatestFrame, LatestHorizon},
};

/// Renders the latest horizon into [`LatestFrame`] on capture frames.
///
/// When a frame limit is configured the final frame is written to the
/// output path and the app is asked to exit.
pub fn capture_frame_system(
    mut capture: ResMut<FrameCapture>,
    latest: Res<LatestHorizon>,
    mut frame: ResMut<LatestFrame>,
    mut exit: EventWriter<AppExit>,
) {
    capture.frames_seen += 1;
    let frames_seen = capture.frames_seen;
    let limit_reached = capture
        .config
        .frame_limit
        .is_some_and(|limit| frames_seen >= limit);

    let every = capture.config.capture_every;
    let due = every > 0 && frames_seen % every == 0;

    if !(due || limit_reached) {
        return;
    }

    if let Some(horizon) = &latest.frame {
        match capture.renderer.render(horizon) {
            Ok(pixmap) => {
                frame.pixmap = Some(pixmap);
                frame.tick = latest.tick;
            }
            Err(e) => error!("Failed to render frame {}: {}", frames_seen, e),
        }
    }

    if limit_reached {
        if let (Some(path), Some(pixmap)) = (&capture.config.output, &frame.pixmap) {
            match FrameRenderer::save_png(pixmap, path) {
                Ok(()) => info!("Saved frame {} to {}", frame.tick, path.display()),
                Err(e) => error!("{}", e),
            }
        }
        info!("Frame limit {} reached, exiting", frames_seen);
        exit.send(AppExit::Success);
    }
}
