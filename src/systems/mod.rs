mod capture;
mod flight;
mod horizon;
mod viewport;

pub use capture::capture_frame_system;
pub use flight::{advance, flight_model_system};
pub use horizon::{
    depth_to_screen_y, horizon_projection_system, project, scroll_offset, GridLines,
};
pub use viewport::viewport_resize_system;
