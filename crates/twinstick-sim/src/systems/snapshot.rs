//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use twinstick_controller::ShipController;
use twinstick_core::components::{Projectile, Transform, Velocity};
use twinstick_core::enums::SessionPhase;
use twinstick_core::events::AudioEvent;
use twinstick_core::state::*;
use twinstick_core::types::{yaw_of, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    ship: Option<Entity>,
    controller: &ShipController,
    audio_events: Vec<AudioEvent>,
    shots_fired: u32,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world, ship, controller),
        projectiles: build_projectiles(world),
        audio_events,
        shots_fired,
    }
}

fn build_ship(world: &World, ship: Option<Entity>, controller: &ShipController) -> ShipView {
    let transform = ship
        .and_then(|e| world.get::<&Transform>(e).ok().map(|t| *t))
        .unwrap_or_default();
    ShipView {
        location: transform.location,
        yaw: yaw_of(transform.rotation),
        fire_mode: controller.fire_mode().get(),
        fire_gate: controller.fire_gate(),
    }
}

/// Projectiles ordered by id so snapshots are stable across runs.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform, &Velocity)>()
        .iter()
        .map(|(entity, (projectile, transform, velocity))| ProjectileView {
            id: entity.to_bits().get(),
            kind: projectile.kind,
            location: transform.location,
            velocity: velocity.0,
            ttl_secs: projectile.ttl_secs,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}
