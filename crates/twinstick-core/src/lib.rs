//! Core types and definitions for TWINSTICK.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry helpers, commands, state snapshots, events, configuration and
//! constants. It has no dependency on any runtime or host framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
