use bevy::prelude::*;
use glam::Vec2;

use crate::{
    components::{
        ControlInput, FlightState, HorizonConfig, HorizonFrame, Line2D, PlayerAircraft, Viewport,
    },
    resources::LatestHorizon,
    utils::deg_to_rad,
};

/// Lazy, unbounded sequence of ground grid lines, nearest first.
///
/// Cloning restarts the sequence from the nearest line.
#[derive(Debug, Clone)]
pub struct GridLines {
    scroll_offset: f32,
    spacing: f32,
    perspective_scale: f32,
    horizon_y: f32,
    viewport: Viewport,
    index: u64,
}

impl GridLines {
    pub fn new(distance: f64, viewport: Viewport, config: &HorizonConfig) -> Self {
        Self {
            scroll_offset: scroll_offset(distance, config.grid_spacing),
            spacing: config.grid_spacing,
            perspective_scale: config.perspective_scale,
            horizon_y: viewport.horizon_y(config),
            viewport,
            index: 0,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// World depth of the line at `index`.
    pub fn depth(&self, index: u64) -> f32 {
        index as f32 * self.spacing + self.scroll_offset
    }
}

impl Iterator for GridLines {
    type Item = Line2D;

    fn next(&mut self) -> Option<Line2D> {
        let world_z = self.depth(self.index);
        self.index = self.index.saturating_add(1);
        let y = depth_to_screen_y(
            world_z,
            self.horizon_y,
            self.viewport.height,
            self.perspective_scale,
        );
        Some(Line2D::horizontal(y, self.viewport.width))
    }
}

/// Fractional position of the aircraft within the current grid cell.
pub fn scroll_offset(distance: f64, grid_spacing: f32) -> f32 {
    distance.rem_euclid(grid_spacing as f64) as f32
}

/// Inverse-depth perspective: depth zero maps to the bottom edge and
/// large depths approach the horizon row.
pub fn depth_to_screen_y(world_z: f32, horizon_y: f32, height: f32, perspective_scale: f32) -> f32 {
    horizon_y + (height - horizon_y) * (perspective_scale / (world_z + perspective_scale))
}

/// Projects the flight state into draw geometry for one frame.
///
/// `roll` is the bank in degrees; the ground rotates the opposite way about
/// the horizon centre.
pub fn project(
    state: &FlightState,
    roll: f64,
    viewport: Viewport,
    config: &HorizonConfig,
) -> HorizonFrame {
    let horizon_y = viewport.horizon_y(config);
    let pivot = viewport.horizon_pivot(config);

    let grid_lines = GridLines::new(state.distance, viewport, config)
        .take(config.num_grid_lines)
        .collect();

    let half_runway = viewport.width * config.runway_width_ratio / 2.0;
    let runway_edges = [
        Line2D::new(pivot, Vec2::new(pivot.x - half_runway, viewport.height)),
        Line2D::new(pivot, Vec2::new(pivot.x + half_runway, viewport.height)),
    ];

    HorizonFrame {
        viewport,
        horizon_y,
        pivot,
        grid_lines,
        runway_edges,
        roll_angle_rad: deg_to_rad(-roll) as f32,
    }
}

/// System projecting the player aircraft into [`LatestHorizon`].
pub fn horizon_projection_system(
    query: Query<&FlightState, With<PlayerAircraft>>,
    input: Res<ControlInput>,
    viewport: Res<Viewport>,
    config: Res<HorizonConfig>,
    mut latest: ResMut<LatestHorizon>,
) {
    match query.get_single() {
        Ok(state) => {
            let frame = project(state, input.roll, *viewport, &config);
            latest.update(frame);
        }
        Err(e) => {
            warn!("No single player aircraft to project: {}", e);
        }
    }
}
