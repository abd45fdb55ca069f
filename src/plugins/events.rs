use bevy::prelude::*;

/// Sent by the host when the drawable area changes size.
#[derive(Event, Debug, Clone, Copy)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
}
