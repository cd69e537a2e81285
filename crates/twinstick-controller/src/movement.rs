//! Movement math: stick input to displacement, and wall-slide deflection.

use glam::Vec3;

use twinstick_core::types::{plane_project, safe_normal_2d, BlockingHit};

/// Direction from the two move axes, clamped so diagonals are no faster
/// than a single axis.
pub fn move_direction(forward: f32, right: f32) -> Vec3 {
    Vec3::new(forward, right, 0.0).clamp_length_max(1.0)
}

/// Displacement for one frame.
pub fn displacement(direction: Vec3, move_speed: f32, delta_seconds: f32) -> Vec3 {
    direction * move_speed * delta_seconds
}

/// Fire direction from the two fire axes. Not clamped: only its heading and
/// whether it is zero matter.
pub fn fire_direction(forward: f32, right: f32) -> Vec3 {
    Vec3::new(forward, right, 0.0)
}

/// Slide vector after a blocked move: the displacement projected onto the
/// blocking plane (flattened to 2D), scaled by the unconsumed time fraction.
pub fn deflection(displacement: Vec3, hit: &BlockingHit) -> Vec3 {
    let normal = safe_normal_2d(hit.normal);
    plane_project(displacement, normal) * (1.0 - hit.time)
}

/// Frame time usable for integration: negative or non-finite becomes zero.
pub fn sanitize_delta(delta_seconds: f32) -> f32 {
    if delta_seconds.is_finite() && delta_seconds > 0.0 {
        delta_seconds
    } else {
        0.0
    }
}
