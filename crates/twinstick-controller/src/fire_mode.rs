//! Fire mode selector.
//!
//! Modes are numbered 1..=3 and map to a projectile archetype through a
//! lookup table.

use std::fmt;

use twinstick_core::constants::FIRE_MODE_COUNT;
use twinstick_core::enums::ProjectileKind;

/// Archetype spawned by each mode, indexed by `mode - 1`.
const MODE_KINDS: [ProjectileKind; FIRE_MODE_COUNT as usize] = [
    ProjectileKind::Slow,
    ProjectileKind::Regular,
    ProjectileKind::Fast,
];

/// The selected fire mode. Always in 1..=FIRE_MODE_COUNT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FireMode(u8);

impl FireMode {
    pub const FIRST: FireMode = FireMode(1);

    /// `None` if `mode` is outside 1..=FIRE_MODE_COUNT.
    pub fn new(mode: u8) -> Option<Self> {
        (1..=FIRE_MODE_COUNT).contains(&mode).then_some(Self(mode))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following mode, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        if self.0 >= FIRE_MODE_COUNT {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    pub fn projectile_kind(self) -> ProjectileKind {
        MODE_KINDS[usize::from(self.0 - 1)]
    }
}

impl Default for FireMode {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for FireMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
