//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Projectile archetype spawned by a shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Slow,
    #[default]
    Regular,
    Fast,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::Slow,
        ProjectileKind::Regular,
        ProjectileKind::Fast,
    ];
}

/// Fire gate state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireGate {
    /// A shot may be taken.
    #[default]
    Ready,
    /// Waiting for the cooldown timer to expire.
    Cooling,
}

/// Named analog input axes polled every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisBinding {
    MoveForward,
    MoveRight,
    FireForward,
    FireRight,
}

impl AxisBinding {
    pub const ALL: [AxisBinding; 4] = [
        AxisBinding::MoveForward,
        AxisBinding::MoveRight,
        AxisBinding::FireForward,
        AxisBinding::FireRight,
    ];

    /// Binding name as it appears in the host's input mapping.
    pub fn name(self) -> &'static str {
        match self {
            AxisBinding::MoveForward => "MoveForward",
            AxisBinding::MoveRight => "MoveRight",
            AxisBinding::FireForward => "FireForward",
            AxisBinding::FireRight => "FireRight",
        }
    }
}

/// Discrete (button) input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Cycle to the next fire mode.
    SwitchProjectile,
}

impl InputAction {
    pub fn name(self) -> &'static str {
        match self {
            InputAction::SwitchProjectile => "SwitchProjectile",
        }
    }
}

/// Edge of a discrete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed,
    Released,
}

/// Session phase (top-level state of the arena).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Idle,
    Active,
    Paused,
}
