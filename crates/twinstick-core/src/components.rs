//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems and in the ship controller, not here.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// World-space placement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_location(location: Vec3) -> Self {
        Self {
            location,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_location(Vec3::ZERO)
    }
}

/// Linear velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Marks the player's ship. The ship collides as a sphere of `radius`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    pub radius: f32,
}

/// Static blocking geometry: an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub min: Vec3,
    pub max: Vec3,
}

impl Wall {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Whether a point lies inside the box grown by `margin` on every side.
    pub fn contains_expanded(&self, point: Vec3, margin: f32) -> bool {
        let min = self.min - Vec3::splat(margin);
        let max = self.max + Vec3::splat(margin);
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Remaining lifetime (seconds).
    pub ttl_secs: f32,
    pub radius: f32,
    /// Set once the projectile's path met a wall.
    pub wall_contact: bool,
}
