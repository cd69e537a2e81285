//! Entity spawn factories for setting up the arena.
//!
//! Creates boundary walls, seeded pillars and the player's ship.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use twinstick_core::components::*;
use twinstick_core::config::ArenaConfig;
use twinstick_core::constants::*;

/// Attempts per pillar before giving up on finding a clear spot.
const PILLAR_PLACEMENT_ATTEMPTS: u32 = 32;

/// Set up the arena: boundary walls, pillars, and the ship at the origin.
/// Returns the ship entity.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, config: &ArenaConfig) -> hecs::Entity {
    spawn_boundary_walls(world, config.half_extent);
    spawn_pillars(world, rng, config);
    spawn_ship(world, config.ship_radius)
}

/// Spawn the player's ship at the origin, facing +X.
pub fn spawn_ship(world: &mut World, radius: f32) -> hecs::Entity {
    world.spawn((Ship { radius }, Transform::default()))
}

/// Four walls whose inner faces sit at ±half_extent.
pub fn spawn_boundary_walls(world: &mut World, half_extent: f32) {
    let t = WALL_THICKNESS * 0.5;
    let span = half_extent + WALL_THICKNESS;
    let walls = [
        (Vec3::new(half_extent + t, 0.0, 0.0), Vec3::new(t, span, WALL_HALF_HEIGHT)),
        (Vec3::new(-half_extent - t, 0.0, 0.0), Vec3::new(t, span, WALL_HALF_HEIGHT)),
        (Vec3::new(0.0, half_extent + t, 0.0), Vec3::new(span, t, WALL_HALF_HEIGHT)),
        (Vec3::new(0.0, -half_extent - t, 0.0), Vec3::new(span, t, WALL_HALF_HEIGHT)),
    ];
    for (center, half_extents) in walls {
        world.spawn((Wall::from_center(center, half_extents),));
    }
}

/// Scatter square pillars, keeping clear of the spawn point.
pub fn spawn_pillars(world: &mut World, rng: &mut ChaCha8Rng, config: &ArenaConfig) {
    let clear = SPAWN_CLEAR_RADIUS + config.ship_radius;
    for _ in 0..config.pillar_count {
        let half_size = rng.gen_range(PILLAR_HALF_SIZE_MIN..PILLAR_HALF_SIZE_MAX);
        let limit = config.half_extent - half_size;
        if limit <= 0.0 {
            continue;
        }

        let placed = (0..PILLAR_PLACEMENT_ATTEMPTS).find_map(|_| {
            let center = Vec3::new(
                rng.gen_range(-limit..limit),
                rng.gen_range(-limit..limit),
                0.0,
            );
            // Distance from the origin to the nearest point of the pillar.
            let nearest = (center.abs() - Vec3::splat(half_size)).max(Vec3::ZERO);
            (nearest.truncate().length() > clear).then_some(center)
        });

        match placed {
            Some(center) => {
                world.spawn((Wall::from_center(
                    center,
                    Vec3::new(half_size, half_size, WALL_HALF_HEIGHT),
                ),));
            }
            None => debug!(half_size, "no clear spot for pillar; skipped"),
        }
    }
}
