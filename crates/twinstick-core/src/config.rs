//! Runtime configuration loaded from a TOML file.
//!
//! [`GameConfig`] mirrors the tuning constants in [`crate::constants`]. Every
//! section and field is `#[serde(default)]`, so a minimal file can override
//! just the values you care about:
//!
//! ```toml
//! [ship]
//! fire_rate = 0.25
//!
//! [projectiles.fast]
//! speed = 8000.0
//! ```
//!
//! Keep `constants.rs` in sync: it remains the authoritative default source.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ProjectileKind;
use crate::error::{require_non_negative, require_positive, ConfigError, ConfigResult};

/// Complete tunable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ship: ShipConfig,
    pub projectiles: ProjectileTable,
    pub arena: ArenaConfig,
}

/// Ship controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Speed at full stick deflection (units/s).
    pub move_speed: f32,
    /// Muzzle position in the ship's local frame.
    pub gun_offset: Vec3,
    /// Seconds between shots.
    pub fire_rate: f32,
    /// Sound asset played on each shot; `None` disables it.
    pub fire_sound: Option<String>,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            gun_offset: Vec3::from_array(GUN_OFFSET),
            fire_rate: FIRE_RATE,
            fire_sound: None,
        }
    }
}

/// Flight parameters of one projectile archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileProfile {
    /// Muzzle speed (units/s).
    pub speed: f32,
    /// Seconds before the projectile despawns on its own.
    pub lifetime_secs: f32,
    /// Collision radius (units).
    pub radius: f32,
}

impl Default for ProjectileProfile {
    fn default() -> Self {
        Self {
            speed: REGULAR_PROJECTILE_SPEED,
            lifetime_secs: PROJECTILE_LIFETIME_SECS,
            radius: PROJECTILE_RADIUS,
        }
    }
}

impl ProjectileProfile {
    fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }
}

/// Per-archetype projectile profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTable {
    pub slow: ProjectileProfile,
    pub regular: ProjectileProfile,
    pub fast: ProjectileProfile,
}

impl Default for ProjectileTable {
    fn default() -> Self {
        Self {
            slow: ProjectileProfile::with_speed(SLOW_PROJECTILE_SPEED),
            regular: ProjectileProfile::with_speed(REGULAR_PROJECTILE_SPEED),
            fast: ProjectileProfile::with_speed(FAST_PROJECTILE_SPEED),
        }
    }
}

impl ProjectileTable {
    pub fn get(&self, kind: ProjectileKind) -> &ProjectileProfile {
        match kind {
            ProjectileKind::Slow => &self.slow,
            ProjectileKind::Regular => &self.regular,
            ProjectileKind::Fast => &self.fast,
        }
    }
}

/// Headless arena layout and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Half the side length of the square play area.
    pub half_extent: f32,
    /// Number of random pillars.
    pub pillar_count: u32,
    /// Ship collision radius.
    pub ship_radius: f32,
    /// Ticks per second.
    pub tick_rate: u32,
    /// RNG seed for the pillar layout. Same seed = same arena.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
            pillar_count: PILLAR_COUNT,
            ship_radius: SHIP_RADIUS,
            tick_rate: TICK_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

impl ArenaConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject values that would break the controller or the arena.
    pub fn validate(&self) -> ConfigResult<()> {
        require_non_negative("ship.move_speed", self.ship.move_speed as f64)?;
        require_positive("ship.fire_rate", self.ship.fire_rate as f64)?;
        if !self.ship.gun_offset.is_finite() {
            return Err(ConfigError::UnsafeValue {
                name: "ship.gun_offset",
                value: f64::NAN,
                safe_range: "finite",
            });
        }

        for kind in ProjectileKind::ALL {
            let profile = self.projectiles.get(kind);
            let (speed, lifetime, radius) = match kind {
                ProjectileKind::Slow => (
                    "projectiles.slow.speed",
                    "projectiles.slow.lifetime_secs",
                    "projectiles.slow.radius",
                ),
                ProjectileKind::Regular => (
                    "projectiles.regular.speed",
                    "projectiles.regular.lifetime_secs",
                    "projectiles.regular.radius",
                ),
                ProjectileKind::Fast => (
                    "projectiles.fast.speed",
                    "projectiles.fast.lifetime_secs",
                    "projectiles.fast.radius",
                ),
            };
            require_positive(speed, profile.speed as f64)?;
            require_positive(lifetime, profile.lifetime_secs as f64)?;
            require_non_negative(radius, profile.radius as f64)?;
        }

        require_positive("arena.half_extent", self.arena.half_extent as f64)?;
        require_positive("arena.tick_rate", self.arena.tick_rate as f64)?;
        require_positive("arena.ship_radius", self.arena.ship_radius as f64)?;
        if self.arena.ship_radius >= self.arena.half_extent {
            return Err(ConfigError::UnsafeValue {
                name: "arena.ship_radius",
                value: self.arena.ship_radius as f64,
                safe_range: "(0.0, arena.half_extent)",
            });
        }
        Ok(())
    }
}
