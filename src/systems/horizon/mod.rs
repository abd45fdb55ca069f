mod projection;

pub use projection::{
    depth_to_screen_y, horizon_projection_system, project, scroll_offset, GridLines,
};
