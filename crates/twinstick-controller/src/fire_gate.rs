//! Fire gate finite state machine.
//!
//! Pure transition function; no host dependency.
//!
//! ```text
//! Ready --ShotFired--> Cooling --CooldownExpired--> Ready
//! ```

use twinstick_core::enums::FireGate;

/// Inputs to the fire gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// A shot was taken.
    ShotFired,
    /// The cooldown timer expired.
    CooldownExpired,
}

/// Next gate state after `event`.
pub fn transition(gate: FireGate, event: GateEvent) -> FireGate {
    match (gate, event) {
        (FireGate::Ready | FireGate::Cooling, GateEvent::ShotFired) => FireGate::Cooling,
        (_, GateEvent::CooldownExpired) => FireGate::Ready,
    }
}

/// Whether a shot may be taken in `gate`.
pub fn can_fire(gate: FireGate) -> bool {
    gate == FireGate::Ready
}
