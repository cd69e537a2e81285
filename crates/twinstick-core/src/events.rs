//! Events emitted by the arena for audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Play `sound` at a world location.
    PlayAtLocation { sound: String, location: Vec3 },
}
