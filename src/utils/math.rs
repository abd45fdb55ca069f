use glam::{Affine2, Vec2};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Rotation by `angle` radians about `pivot`, in screen coordinates (y down).
pub fn rotation_about(pivot: Vec2, angle: f32) -> Affine2 {
    Affine2::from_translation(pivot) * Affine2::from_angle(angle) * Affine2::from_translation(-pivot)
}
