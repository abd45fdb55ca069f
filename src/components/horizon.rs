use bevy::prelude::*;
use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::utils::{
    rotation_about, GRID_SPACING, HORIZON_RATIO, MARKER_HEIGHT_RATIO, NUM_GRID_LINES,
    PERSPECTIVE_SCALE, RUNWAY_WIDTH_RATIO,
};

/// Parameters of the perspective ground grid.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Horizon row as a fraction of the viewport height.
    pub horizon_ratio: f32,
    /// Depth at which a line sits halfway between the bottom edge and the horizon.
    pub perspective_scale: f32,
    /// World distance between consecutive grid lines.
    pub grid_spacing: f32,
    /// Lines drawn per frame.
    pub num_grid_lines: usize,
    /// Runway width at the bottom edge as a fraction of the viewport width.
    pub runway_width_ratio: f32,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            horizon_ratio: HORIZON_RATIO,
            perspective_scale: PERSPECTIVE_SCALE,
            grid_spacing: GRID_SPACING,
            num_grid_lines: NUM_GRID_LINES,
            runway_width_ratio: RUNWAY_WIDTH_RATIO,
        }
    }
}

/// Drawable area in screen units.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn horizon_y(&self, config: &HorizonConfig) -> f32 {
        self.height * config.horizon_ratio
    }

    /// Screen-centre point of the horizon, the pivot of the bank rotation.
    pub fn horizon_pivot(&self, config: &HorizonConfig) -> Vec2 {
        Vec2::new(self.width / 2.0, self.horizon_y(config))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line2D {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn horizontal(y: f32, width: f32) -> Self {
        Self::new(Vec2::new(0.0, y), Vec2::new(width, y))
    }

    pub fn transformed(&self, transform: &Affine2) -> Self {
        Self::new(
            transform.transform_point2(self.start),
            transform.transform_point2(self.end),
        )
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Draw geometry for one frame.
///
/// `grid_lines` and `runway_edges` are in the level horizon frame. The bank is
/// carried separately in `roll_angle_rad` and applied about `pivot`; use the
/// `screen_*` accessors for the rotated geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonFrame {
    pub viewport: Viewport,
    pub horizon_y: f32,
    pub pivot: Vec2,
    pub grid_lines: Vec<Line2D>,
    pub runway_edges: [Line2D; 2],
    /// Rotation applied to the ground about `pivot` (negated roll).
    pub roll_angle_rad: f32,
}

impl HorizonFrame {
    pub fn rotation(&self) -> Affine2 {
        rotation_about(self.pivot, self.roll_angle_rad)
    }

    pub fn screen_grid_lines(&self) -> impl Iterator<Item = Line2D> + '_ {
        let rotation = self.rotation();
        self.grid_lines
            .iter()
            .map(move |line| line.transformed(&rotation))
    }

    pub fn screen_runway_edges(&self) -> [Line2D; 2] {
        let rotation = self.rotation();
        self.runway_edges.map(|edge| edge.transformed(&rotation))
    }

    /// Screen position of the aircraft marker.
    pub fn marker_position(&self) -> Vec2 {
        Vec2::new(
            self.viewport.width / 2.0,
            self.viewport.height * MARKER_HEIGHT_RATIO,
        )
    }

    /// The marker banks opposite to the ground.
    pub fn marker_angle_rad(&self) -> f32 {
        -self.roll_angle_rad
    }
}
