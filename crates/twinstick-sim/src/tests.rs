//! Tests for the arena engine, timers, collision and the controller wiring.

use glam::{Quat, Vec3};
use hecs::World;

use twinstick_core::commands::PlayerCommand;
use twinstick_core::components::{Projectile, Ship, Transform, Velocity, Wall};
use twinstick_core::config::GameConfig;
use twinstick_core::enums::*;
use twinstick_core::events::AudioEvent;
use twinstick_core::types::TimerHandle;

use crate::engine::SimulationEngine;
use crate::input::InputState;
use crate::systems;
use crate::systems::collision::{sweep_ship, sweep_sphere_aabb};
use crate::timers::{TimerCallback, TimerManager};

/// Default config without pillars, so only the boundary walls block.
fn open_arena() -> GameConfig {
    let mut config = GameConfig::default();
    config.arena.pillar_count = 0;
    config
}

fn started(config: GameConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartSession);
    engine
}

fn axis(binding: AxisBinding, value: f32) -> PlayerCommand {
    PlayerCommand::SetAxis { binding, value }
}

fn walls(engine: &SimulationEngine) -> Vec<Wall> {
    let mut q = engine.world().query::<&Wall>();
    q.iter().map(|(_, w)| *w).collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let script = |engine: &mut SimulationEngine, tick: u32| match tick {
        0 => engine.queue_commands([
            axis(AxisBinding::MoveForward, 1.0),
            axis(AxisBinding::MoveRight, 0.4),
            axis(AxisBinding::FireRight, 1.0),
        ]),
        50 => engine.queue_command(PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        }),
        120 => engine.queue_command(axis(AxisBinding::MoveRight, -1.0)),
        _ => {}
    };

    let mut engine_a = started(GameConfig::default());
    let mut engine_b = started(GameConfig::default());

    for tick in 0..300 {
        script(&mut engine_a, tick);
        script(&mut engine_b, tick);
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged at tick {tick}");
    }
}

#[test]
fn test_different_seeds_different_layout() {
    let mut config_a = GameConfig::default();
    config_a.arena.seed = 111;
    let mut config_b = GameConfig::default();
    config_b.arena.seed = 222;

    let mut engine_a = started(config_a);
    let mut engine_b = started(config_b);
    engine_a.tick();
    engine_b.tick();

    assert_ne!(walls(&engine_a), walls(&engine_b));
}

#[test]
fn test_pillars_keep_spawn_clear() {
    for seed in 0..20 {
        let mut config = GameConfig::default();
        config.arena.seed = seed;
        config.arena.pillar_count = 12;
        let mut engine = started(config);
        engine.tick();
        let radius = engine.config().arena.ship_radius;
        for wall in walls(&engine) {
            assert!(
                !wall.contains_expanded(Vec3::ZERO, radius),
                "seed {seed}: wall {wall:?} overlaps the spawn point"
            );
        }
    }
}

// ---- Session lifecycle ----

#[test]
fn test_idle_engine_does_not_tick() {
    let mut engine = SimulationEngine::new(GameConfig::default());
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.phase(), SessionPhase::Idle);
    assert_eq!(engine.time().tick, 0);
    assert!(engine.ship().is_none());
}

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut engine = started(GameConfig::default());
    for _ in 0..60 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 60);
    assert!(
        (engine.time().elapsed_secs - 1.0).abs() < 1e-9,
        "60 ticks should equal 1.0 seconds, got {}",
        engine.time().elapsed_secs
    );
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::MoveForward, 1.0));
    for _ in 0..10 {
        engine.tick();
    }
    let before = engine.tick().ship.location;

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.phase(), SessionPhase::Paused);
    assert_eq!(engine.time().tick, 11, "Time should not advance while paused");
    assert_eq!(engine.tick().ship.location, before);

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    assert_eq!(engine.time().tick, 12);
    assert_eq!(engine.phase(), SessionPhase::Active);
}

// ---- Movement ----

#[test]
fn test_forward_movement_speed() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::MoveForward, 1.0));
    let mut snapshot = engine.tick();
    for _ in 1..60 {
        snapshot = engine.tick();
    }
    let location = snapshot.ship.location;
    assert!((location.x - 1000.0).abs() < 0.1, "x = {}", location.x);
    assert!(location.y.abs() < 1e-4);
    assert!(snapshot.ship.yaw.abs() < 1e-5, "ship faces its motion");
}

#[test]
fn test_diagonal_speed_matches_straight() {
    let mut straight = started(open_arena());
    straight.queue_command(axis(AxisBinding::MoveForward, 1.0));
    let mut diagonal = started(open_arena());
    diagonal.queue_commands([
        axis(AxisBinding::MoveForward, 1.0),
        axis(AxisBinding::MoveRight, 1.0),
    ]);

    let (mut a, mut b) = (Vec3::ZERO, Vec3::ZERO);
    for _ in 0..30 {
        a = straight.tick().ship.location;
        b = diagonal.tick().ship.location;
    }
    assert!((a.length() - b.length()).abs() < 0.01, "{a:?} vs {b:?}");
    assert!((b.x - b.y).abs() < 1e-3);
}

#[test]
fn test_ship_slides_along_wall_and_stays_inside() {
    let mut engine = started(open_arena());
    engine.queue_commands([
        axis(AxisBinding::MoveForward, 1.0),
        axis(AxisBinding::MoveRight, 0.5),
    ]);
    let limit = engine.config().arena.half_extent - engine.config().arena.ship_radius;

    let mut location = Vec3::ZERO;
    for _ in 0..240 {
        location = engine.tick().ship.location;
        assert!(location.x <= limit, "ship entered the wall: {location:?}");
        assert!(location.y <= limit, "ship entered the wall: {location:?}");
    }

    assert!(location.x > limit - 1.0, "ship should be flush with the wall");
    // Without sliding, y would stop near 975 when x reaches the wall.
    assert!(location.y > 1500.0, "ship should slide along the wall, y = {}", location.y);
}

#[test]
fn test_ship_stops_in_corner() {
    let mut engine = started(open_arena());
    engine.queue_commands([
        axis(AxisBinding::MoveForward, -1.0),
        axis(AxisBinding::MoveRight, -1.0),
    ]);
    let limit = engine.config().arena.half_extent - engine.config().arena.ship_radius;
    let mut location = Vec3::ZERO;
    for _ in 0..600 {
        location = engine.tick().ship.location;
    }
    assert!(location.x >= -limit && location.x < -limit + 1.0, "{location:?}");
    assert!(location.y >= -limit && location.y < -limit + 1.0, "{location:?}");
}

// ---- Firing ----

#[test]
fn test_held_fire_cadence() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));

    let mut shot_ticks = Vec::new();
    let mut last = 0;
    for _ in 0..60 {
        let snapshot = engine.tick();
        if snapshot.shots_fired > last {
            shot_ticks.push(snapshot.time.tick);
            last = snapshot.shots_fired;
        }
    }
    assert_eq!(shot_ticks, vec![1, 7, 13, 19, 25, 31, 37, 43, 49, 55]);
}

#[test]
fn test_cooldown_blocks_until_fire_rate_elapsed() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));
    let snapshot = engine.tick();
    assert_eq!(snapshot.shots_fired, 1);
    assert_eq!(snapshot.ship.fire_gate, FireGate::Cooling);
    let handle = engine.controller().fire_timer().unwrap();
    assert!(engine.timers().is_pending(handle));

    engine.queue_command(axis(AxisBinding::FireForward, 0.0));
    engine.tick();
    engine.tick();

    // 0.05 s after the shot: fire again, nothing happens.
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));
    let snapshot = engine.tick();
    assert_eq!(snapshot.time.tick, 4);
    assert_eq!(snapshot.shots_fired, 1);
    engine.queue_command(axis(AxisBinding::FireForward, 0.0));

    for _ in 5..=6 {
        let snapshot = engine.tick();
        assert_eq!(snapshot.ship.fire_gate, FireGate::Cooling);
    }

    // Tick 7 is exactly 0.1 s after the shot.
    let snapshot = engine.tick();
    assert_eq!(snapshot.time.tick, 7);
    assert_eq!(snapshot.ship.fire_gate, FireGate::Ready);
    assert!(engine.controller().can_fire());
    assert!(engine.controller().fire_timer().is_none());
    assert!(engine.timers().is_empty());
}

#[test]
fn test_mode_one_spawns_slow_projectile() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));
    let snapshot = engine.tick();

    assert_eq!(snapshot.ship.fire_mode, 1);
    assert_eq!(snapshot.projectiles.len(), 1);
    let projectile = &snapshot.projectiles[0];
    assert_eq!(projectile.kind, ProjectileKind::Slow);
    let speed = engine.config().projectiles.slow.speed;
    assert!((projectile.velocity - Vec3::new(speed, 0.0, 0.0)).length() < 1e-2);
}

#[test]
fn test_projectile_leaves_from_gun_offset() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::FireRight, 1.0));
    let snapshot = engine.tick();
    let projectile = &snapshot.projectiles[0];
    let dt = engine.dt() as f32;
    // Spawned 90 units to the right of the ship, then flew one tick.
    let expected = Vec3::new(0.0, 90.0, 0.0) + projectile.velocity * dt;
    assert!((projectile.location - expected).length() < 1e-2, "{projectile:?}");
    assert!(projectile.velocity.x.abs() < 1e-2);
}

#[test]
fn test_switch_on_release_changes_archetype() {
    let mut engine = started(open_arena());
    engine.queue_command(PlayerCommand::PressAction {
        action: InputAction::SwitchProjectile,
    });
    assert_eq!(engine.tick().ship.fire_mode, 1, "press alone does not switch");

    engine.queue_commands([
        PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        },
        PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        },
        axis(AxisBinding::FireForward, 1.0),
    ]);
    let snapshot = engine.tick();
    assert_eq!(snapshot.ship.fire_mode, 3);
    assert_eq!(snapshot.projectiles[0].kind, ProjectileKind::Fast);
}

#[test]
fn test_actions_ignored_while_paused() {
    let mut engine = started(open_arena());
    engine.tick();
    engine.queue_commands([
        PlayerCommand::Pause,
        PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        },
        PlayerCommand::Resume,
    ]);
    assert_eq!(engine.tick().ship.fire_mode, 1);
}

#[test]
fn test_fire_sound_event_drained_per_snapshot() {
    let mut config = open_arena();
    config.ship.fire_sound = Some("Zap".to_string());
    let mut engine = started(config);
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));

    let snapshot = engine.tick();
    assert_eq!(
        snapshot.audio_events,
        vec![AudioEvent::PlayAtLocation {
            sound: "Zap".to_string(),
            location: snapshot.ship.location,
        }]
    );
    assert!(engine.tick().audio_events.is_empty());
}

#[test]
fn test_no_sound_without_asset() {
    let mut engine = started(open_arena());
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));
    for _ in 0..20 {
        assert!(engine.tick().audio_events.is_empty());
    }
}

// ---- Projectile lifecycle ----

#[test]
fn test_projectile_expires_after_lifetime() {
    let mut config = open_arena();
    config.arena.half_extent = 100_000.0;
    config.projectiles.slow.lifetime_secs = 0.5;
    let mut engine = started(config);
    engine.queue_command(axis(AxisBinding::FireForward, 1.0));
    engine.tick();
    engine.queue_command(axis(AxisBinding::FireForward, 0.0));

    let mut snapshot = engine.tick();
    while snapshot.time.tick < 20 {
        snapshot = engine.tick();
    }
    assert_eq!(snapshot.projectiles.len(), 1);

    while snapshot.time.tick < 40 {
        snapshot = engine.tick();
    }
    assert!(snapshot.projectiles.is_empty());
}

#[test]
fn test_projectile_despawns_on_wall() {
    let mut engine = started(open_arena());
    engine.queue_commands([
        PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        },
        PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        },
        axis(AxisBinding::FireForward, 1.0),
    ]);
    engine.tick();
    engine.queue_command(axis(AxisBinding::FireForward, 0.0));

    let mut snapshot = engine.tick();
    while snapshot.time.tick < 30 {
        snapshot = engine.tick();
    }
    // Fast projectiles cover the 2000 units to the wall in about 20 ticks,
    // well inside their lifetime.
    assert!(snapshot.projectiles.is_empty());
}

#[test]
fn test_fast_projectile_cannot_tunnel_at_low_tick_rate() {
    // At 20 Hz a fast projectile covers 300 units per tick, more than the
    // 136-unit expanded width of the smallest pillar.
    let mut world = World::new();
    world.spawn((Wall::from_center(
        Vec3::new(200.0, 0.0, 0.0),
        Vec3::new(60.0, 60.0, 200.0),
    ),));
    let projectile = world.spawn((
        Projectile {
            kind: ProjectileKind::Fast,
            ttl_secs: 3.0,
            radius: 8.0,
            wall_contact: false,
        },
        Transform::from_location(Vec3::new(90.0, 0.0, 0.0)),
        Velocity(Vec3::new(6000.0, 0.0, 0.0)),
    ));

    systems::movement::run(&mut world, 1.0 / 20.0);
    let location = world.get::<&Transform>(projectile).unwrap().location;
    assert!((location.x - 132.0).abs() < 1e-2, "stops at the pillar face, x = {}", location.x);
    assert!(world.get::<&Projectile>(projectile).unwrap().wall_contact);

    let mut buffer = Vec::new();
    systems::cleanup::run(&mut world, 2000.0, &mut buffer);
    assert!(!world.contains(projectile));
}

#[test]
fn test_projectile_in_open_space_flies_full_step() {
    let mut world = World::new();
    let projectile = world.spawn((
        Projectile {
            kind: ProjectileKind::Slow,
            ttl_secs: 1.0,
            radius: 8.0,
            wall_contact: false,
        },
        Transform::default(),
        Velocity(Vec3::new(0.0, 1500.0, 0.0)),
    ));

    systems::movement::run(&mut world, 0.5);
    let location = world.get::<&Transform>(projectile).unwrap().location;
    assert!((location.y - 750.0).abs() < 1e-3);

    let mut buffer = Vec::new();
    systems::cleanup::run(&mut world, 2000.0, &mut buffer);
    assert!(world.contains(projectile));
}

// ---- Timers ----

#[test]
fn test_timer_replace_discards_pending() {
    let mut timers = TimerManager::new();
    let first = timers.set_timer(None, 0.0, 1.0, TimerCallback::FireCooldownExpired);
    let second = timers.set_timer(Some(first), 0.5, 1.0, TimerCallback::FireCooldownExpired);

    assert_ne!(first, second);
    assert!(!timers.is_pending(first));
    assert!(timers.is_pending(second));
    assert_eq!(timers.len(), 1);
    assert!(timers.expire(1.2).is_empty());
    assert_eq!(
        timers.expire(1.5),
        vec![(second, TimerCallback::FireCooldownExpired)]
    );
    assert!(timers.is_empty());
}

#[test]
fn test_timer_expire_order() {
    let mut timers = TimerManager::new();
    let late = timers.set_timer(None, 0.0, 0.3, TimerCallback::FireCooldownExpired);
    let early = timers.set_timer(None, 0.0, 0.1, TimerCallback::FireCooldownExpired);

    let fired: Vec<TimerHandle> = timers.expire(1.0).into_iter().map(|(h, _)| h).collect();
    assert_eq!(fired, vec![early, late]);
    assert!(!timers.is_pending(late));
}

#[test]
fn test_timer_expiry_tolerates_float_drift() {
    let mut timers = TimerManager::new();
    let handle = timers.set_timer(None, 1.0 / 60.0, 0.1, TimerCallback::FireCooldownExpired);
    let mut now = 0.0f64;
    for _ in 0..7 {
        now += 1.0 / 60.0;
    }
    assert_eq!(
        timers.expire(now),
        vec![(handle, TimerCallback::FireCooldownExpired)]
    );
}

// ---- Collision ----

#[test]
fn test_sweep_hits_near_face() {
    let wall = Wall::from_center(Vec3::new(100.0, 0.0, 0.0), Vec3::splat(10.0));
    let hit = sweep_sphere_aabb(Vec3::ZERO, Vec3::new(200.0, 0.0, 0.0), 5.0, &wall).unwrap();
    assert!(!hit.start_penetrating);
    assert!((hit.time - 85.0 / 200.0).abs() < 1e-5);
    assert_eq!(hit.normal, Vec3::NEG_X);
}

#[test]
fn test_sweep_misses_short_or_offset() {
    let wall = Wall::from_center(Vec3::new(100.0, 0.0, 0.0), Vec3::splat(10.0));
    assert!(sweep_sphere_aabb(Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), 5.0, &wall).is_none());
    assert!(
        sweep_sphere_aabb(Vec3::new(0.0, 50.0, 0.0), Vec3::new(200.0, 0.0, 0.0), 5.0, &wall)
            .is_none()
    );
    // Moving away.
    assert!(sweep_sphere_aabb(Vec3::ZERO, Vec3::new(-200.0, 0.0, 0.0), 5.0, &wall).is_none());
}

#[test]
fn test_sweep_reports_start_penetrating() {
    let wall = Wall::from_center(Vec3::ZERO, Vec3::splat(10.0));
    let hit = sweep_sphere_aabb(Vec3::new(12.0, 0.0, 0.0), Vec3::X, 5.0, &wall).unwrap();
    assert!(hit.start_penetrating);
    assert!(!hit.is_valid_blocking_hit());
}

#[test]
fn test_sweep_ship_stops_short_and_rotates() {
    let mut world = World::new();
    world.spawn((Wall::from_center(Vec3::new(100.0, 0.0, 0.0), Vec3::splat(10.0)),));
    let ship = world.spawn((Ship { radius: 5.0 }, Transform::default()));
    let rotation = Quat::from_rotation_z(0.3);

    let hit = sweep_ship(&mut world, ship, Vec3::new(200.0, 0.0, 0.0), rotation).unwrap();
    assert!(hit.is_valid_blocking_hit());

    let transform = *world.get::<&Transform>(ship).unwrap();
    assert!(transform.location.x < 85.0 && transform.location.x > 84.8);
    assert_eq!(transform.rotation, rotation);

    // Unblocked move goes the whole way.
    assert!(sweep_ship(&mut world, ship, Vec3::new(0.0, 30.0, 0.0), rotation).is_none());
    let transform = *world.get::<&Transform>(ship).unwrap();
    assert!((transform.location.y - 30.0).abs() < 1e-4);
}

// ---- Input ----

#[test]
fn test_input_unbound_axis_reads_zero() {
    use twinstick_controller::host::InputBinder;

    let mut input = InputState::new();
    input.set_axis(AxisBinding::MoveForward, 0.7);
    assert_eq!(input.axis(AxisBinding::MoveForward), 0.0);

    input.bind_axis(AxisBinding::MoveForward);
    assert_eq!(input.axis(AxisBinding::MoveForward), 0.7);
}

#[test]
fn test_input_clamps_and_rejects_non_finite() {
    use twinstick_controller::host::InputBinder;

    let mut input = InputState::new();
    input.bind_axis(AxisBinding::FireRight);
    input.set_axis(AxisBinding::FireRight, 3.0);
    assert_eq!(input.axis(AxisBinding::FireRight), 1.0);
    input.set_axis(AxisBinding::FireRight, f32::NAN);
    assert_eq!(input.axis(AxisBinding::FireRight), 0.0);
}
