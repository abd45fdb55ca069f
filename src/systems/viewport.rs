use bevy::prelude::*;

use crate::{components::Viewport, plugins::ViewportResized};

/// Applies the latest resize event to the [`Viewport`] resource.
pub fn viewport_resize_system(
    mut events: EventReader<ViewportResized>,
    mut viewport: ResMut<Viewport>,
) {
    if let Some(event) = events.read().last() {
        if event.width <= 0.0 || event.height <= 0.0 {
            warn!(
                "Ignoring degenerate viewport {}x{}",
                event.width, event.height
            );
            return;
        }
        *viewport = Viewport::new(event.width, event.height);
        info!("Viewport resized to {}x{}", event.width, event.height);
    }
}
