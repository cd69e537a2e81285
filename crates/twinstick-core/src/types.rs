//! Fundamental geometric and simulation types.
//!
//! Frame convention: X = forward, Y = right, Z = up.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier of an actor spawned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Identifier of a pending one-shot timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Result of a swept move that was stopped by blocking geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockingHit {
    /// Surface normal at the contact point.
    pub normal: Vec3,
    /// Fraction of the requested motion completed before contact, in [0, 1].
    pub time: f32,
    /// The body already overlapped the blocker when the move started.
    pub start_penetrating: bool,
}

impl BlockingHit {
    pub fn new(normal: Vec3, time: f32) -> Self {
        Self {
            normal,
            time,
            start_penetrating: false,
        }
    }

    /// A hit that actually stopped the motion. Start-penetrating hits carry
    /// no usable normal and are ignored for deflection.
    pub fn is_valid_blocking_hit(&self) -> bool {
        !self.start_penetrating
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Rotation that turns the forward axis (+X) onto `direction`.
///
/// Yaw comes from the XY heading, pitch from the Z component; roll is always
/// zero. Only the exact zero vector yields the identity rotation; tiny
/// directions keep their heading.
pub fn rotation_from_direction(direction: Vec3) -> Quat {
    if direction == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let yaw = direction.y.atan2(direction.x);
    let pitch = direction.z.atan2(direction.truncate().length());
    // Positive pitch raises the nose toward +Z.
    Quat::from_rotation_z(yaw) * Quat::from_rotation_y(-pitch)
}

/// Heading of a rotation around Z, in radians.
pub fn yaw_of(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::X;
    forward.y.atan2(forward.x)
}

/// Drop the Z component and normalize; zero if the remainder is degenerate.
pub fn safe_normal_2d(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0).normalize_or_zero()
}

/// Project `v` onto the plane with unit normal `plane_normal`.
pub fn plane_project(v: Vec3, plane_normal: Vec3) -> Vec3 {
    v - plane_normal * v.dot(plane_normal)
}
