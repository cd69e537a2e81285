//! TWINSTICK application shell.
//!
//! Runs the arena on a dedicated game-loop thread and exposes it to the
//! rest of the process through a command channel and a latest-snapshot slot.

pub mod error;
pub mod game_loop;
pub mod state;

pub use twinstick_core as core;
