//! Cleanup system: removes projectiles that expired, hit a wall or left the arena.

use hecs::{Entity, World};
use tracing::debug;

use twinstick_core::components::{Projectile, Transform};

/// Despawn finished projectiles.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, half_extent: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (transform, projectile)) in world.query_mut::<(&Transform, &Projectile)>() {
        let location = transform.location;
        let expired = projectile.ttl_secs <= 0.0;
        let out_of_bounds = location.x.abs() > half_extent || location.y.abs() > half_extent;
        let hit_wall = projectile.wall_contact;
        if expired || out_of_bounds || hit_wall {
            debug!(?entity, kind = ?projectile.kind, expired, hit_wall, "projectile despawned");
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
