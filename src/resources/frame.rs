use bevy::prelude::*;
use tiny_skia::Pixmap;

use crate::components::HorizonFrame;

/// Geometry produced by the most recent projection.
#[derive(Resource, Debug, Default, Clone)]
pub struct LatestHorizon {
    pub frame: Option<HorizonFrame>,
    /// Number of projections since startup.
    pub tick: u64,
}

impl LatestHorizon {
    pub fn update(&mut self, frame: HorizonFrame) {
        self.frame = Some(frame);
        self.tick += 1;
    }
}

/// Last rendered frame.
#[derive(Resource, Default)]
pub struct LatestFrame {
    pub pixmap: Option<Pixmap>,
    /// Horizon tick the pixmap was rendered from.
    pub tick: u64,
}

impl LatestFrame {
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.pixmap.as_ref().map(|p| (p.width(), p.height()))
    }
}
