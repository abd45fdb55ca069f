// Flight model defaults
pub const BASE_FORWARD_SPEED: f64 = 50.0; // speed at zero throttle
pub const SPEED_RESPONSE_RATE: f64 = 0.5; // 1/s
pub const MAX_CLIMB_RATE: f64 = 20.0; // units/s at full pitch
pub const MAX_PITCH_DEG: f64 = 30.0;
pub const MAX_ROLL_DEG: f64 = 30.0;
pub const MAX_THROTTLE: f64 = 100.0;

// Start state
pub const START_ALTITUDE: f64 = 100.0;
pub const START_FORWARD_SPEED: f64 = 50.0;

// Horizon projection defaults
pub const HORIZON_RATIO: f32 = 0.35;
pub const PERSPECTIVE_SCALE: f32 = 200.0;
pub const GRID_SPACING: f32 = 50.0;
pub const NUM_GRID_LINES: usize = 30;
pub const RUNWAY_WIDTH_RATIO: f32 = 0.8;
pub const MARKER_HEIGHT_RATIO: f32 = 0.7;
