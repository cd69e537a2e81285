//! Headless arena host for TWINSTICK.
//!
//! Owns the hecs ECS world, drives a [`ShipController`] at a fixed tick rate,
//! implements every host capability the controller requests (swept moves,
//! projectile spawns, one-shot timers, positional audio) and produces
//! `GameStateSnapshot`s.
//!
//! [`ShipController`]: twinstick_controller::ShipController

pub mod engine;
pub mod host;
pub mod input;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use twinstick_core as core;

#[cfg(test)]
mod tests;
