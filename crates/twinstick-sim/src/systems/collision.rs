//! Swept collision for the ship.
//!
//! The ship is a sphere and every wall an axis-aligned box. Sweeping a
//! sphere against a box is a ray cast against the box grown by the sphere
//! radius (rounded edges are treated as square).

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use twinstick_core::components::{Ship, Transform, Wall};
use twinstick_core::constants::SWEEP_SKIN;
use twinstick_core::types::BlockingHit;

/// Sweep a sphere from `start` by `delta` against one wall.
///
/// Returns the first contact as a fraction of `delta` with the face normal,
/// or a start-penetrating hit if the sphere already overlaps the wall.
pub fn sweep_sphere_aabb(start: Vec3, delta: Vec3, radius: f32, wall: &Wall) -> Option<BlockingHit> {
    let min = wall.min - Vec3::splat(radius);
    let max = wall.max + Vec3::splat(radius);

    if start.cmpgt(min).all() && start.cmplt(max).all() {
        return Some(BlockingHit {
            normal: Vec3::ZERO,
            time: 0.0,
            start_penetrating: true,
        });
    }

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec3::ZERO;

    for axis in 0..3 {
        let s = start[axis];
        let d = delta[axis];
        if d.abs() <= f32::EPSILON {
            // Parallel to this slab: must already be within it.
            if s < min[axis] || s > max[axis] {
                return None;
            }
            continue;
        }
        let mut t0 = (min[axis] - s) / d;
        let mut t1 = (max[axis] - s) / d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            normal = Vec3::ZERO;
            normal[axis] = -d.signum();
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if !(0.0..=1.0).contains(&t_enter) {
        return None;
    }
    Some(BlockingHit::new(normal, t_enter))
}

/// Move the ship by `delta`, stopping at the first wall it would enter.
///
/// The rotation is applied regardless of whether the move is blocked. Walls
/// the ship starts inside do not block; if nothing else blocks, the
/// start-penetrating hit is reported so the caller can skip deflection.
pub fn sweep_ship(world: &mut World, ship: Entity, delta: Vec3, rotation: Quat) -> Option<BlockingHit> {
    let (start, radius) = {
        let transform = world.get::<&Transform>(ship).ok()?;
        let shape = world.get::<&Ship>(ship).ok()?;
        (transform.location, shape.radius)
    };

    let mut blocking: Option<BlockingHit> = None;
    let mut penetrating: Option<BlockingHit> = None;
    for (_entity, wall) in world.query::<&Wall>().iter() {
        match sweep_sphere_aabb(start, delta, radius, wall) {
            Some(hit) if hit.start_penetrating => penetrating = Some(hit),
            Some(hit) => {
                if blocking.map_or(true, |b| hit.time < b.time) {
                    blocking = Some(hit);
                }
            }
            None => {}
        }
    }

    let travelled = match blocking {
        Some(hit) => {
            let length = delta.length();
            let skin = if length > 0.0 { SWEEP_SKIN / length } else { 0.0 };
            (hit.time - skin).max(0.0)
        }
        None => 1.0,
    };

    if let Ok(mut transform) = world.get::<&mut Transform>(ship) {
        transform.location = start + delta * travelled;
        transform.rotation = rotation;
    }

    blocking.or(penetrating)
}
