//! Player commands sent from the frontend to the arena.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Build the arena and start ticking.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Input ---
    /// Set the current value of an analog axis. Values are clamped to [-1, 1].
    SetAxis { binding: AxisBinding, value: f32 },
    /// A discrete input went down.
    PressAction { action: InputAction },
    /// A discrete input was released.
    ReleaseAction { action: InputAction },
}
