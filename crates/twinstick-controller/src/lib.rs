//! Ship controller for TWINSTICK.
//!
//! Implements player-directional movement with wall sliding, the three-mode
//! fire selector and the cooldown-gated firing state machine. The controller
//! never touches a world directly: every side effect is a request issued
//! through the host capability traits in [`host`].

pub mod controller;
pub mod fire_gate;
pub mod fire_mode;
pub mod host;
pub mod movement;

pub use controller::ShipController;
pub use fire_mode::FireMode;
pub use host::{ShipControl, ShipHost};
pub use twinstick_core as core;
