//! Gameplay constants and tuning defaults.
//!
//! These are the authoritative defaults for [`crate::config::GameConfig`];
//! a config file may override any of them.

// --- Ship movement ---

/// Ship speed at full stick deflection (units/s).
pub const MOVE_SPEED: f32 = 1000.0;

// --- Weapon ---

/// Muzzle position in the ship's local frame.
pub const GUN_OFFSET: [f32; 3] = [90.0, 0.0, 0.0];

/// Seconds between shots.
pub const FIRE_RATE: f32 = 0.1;

/// Number of selectable fire modes. Modes are numbered 1..=FIRE_MODE_COUNT.
pub const FIRE_MODE_COUNT: u8 = 3;

// --- Projectiles ---

pub const SLOW_PROJECTILE_SPEED: f32 = 1500.0;
pub const REGULAR_PROJECTILE_SPEED: f32 = 3000.0;
pub const FAST_PROJECTILE_SPEED: f32 = 6000.0;

/// Lifetime of every projectile archetype unless overridden (seconds).
pub const PROJECTILE_LIFETIME_SECS: f32 = 3.0;

/// Collision radius of a projectile (units).
pub const PROJECTILE_RADIUS: f32 = 8.0;

// --- Arena ---

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Half the side length of the square play area (units).
pub const ARENA_HALF_EXTENT: f32 = 2000.0;

/// Thickness of the boundary walls (units).
pub const WALL_THICKNESS: f32 = 100.0;

/// Number of randomly placed pillars inside the arena.
pub const PILLAR_COUNT: u32 = 6;

/// Pillar half-size range (units).
pub const PILLAR_HALF_SIZE_MIN: f32 = 60.0;
pub const PILLAR_HALF_SIZE_MAX: f32 = 200.0;

/// Pillars never overlap this radius around the spawn point.
pub const SPAWN_CLEAR_RADIUS: f32 = 400.0;

/// Collision radius of the ship (units).
pub const SHIP_RADIUS: f32 = 50.0;

/// Distance a blocked sweep stops short of contact (units).
pub const SWEEP_SKIN: f32 = 0.1;

/// Tolerance for accumulated float error when comparing timer deadlines (s).
pub const TIMER_TOLERANCE_SECS: f64 = 1e-6;

/// Default RNG seed for arena layout.
pub const DEFAULT_SEED: u64 = 42;

/// Half-height of walls and pillars along Z (units).
pub const WALL_HALF_HEIGHT: f32 = 200.0;
