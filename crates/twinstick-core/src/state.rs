//! Game state snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub ship: ShipView,
    pub projectiles: Vec<ProjectileView>,
    pub audio_events: Vec<AudioEvent>,
    /// Total shots taken this session.
    pub shots_fired: u32,
}

/// Ship placement and weapon status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub location: Vec3,
    /// Heading in radians (0 = +X, counterclockwise toward +Y).
    pub yaw: f32,
    /// Current fire mode, 1..=3.
    pub fire_mode: u8,
    pub fire_gate: FireGate,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub kind: ProjectileKind,
    pub location: Vec3,
    pub velocity: Vec3,
    pub ttl_secs: f32,
}
