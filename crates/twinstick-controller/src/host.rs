//! Capabilities the host environment provides to the controller, and the
//! callbacks the controller exposes back to it.
//!
//! Each trait covers one collaborator. A host implements all of them and
//! gets [`ShipHost`] for free.

use glam::{Quat, Vec3};

use twinstick_core::enums::{AxisBinding, InputAction, InputEvent, ProjectileKind};
use twinstick_core::types::{ActorId, BlockingHit, TimerHandle};

/// Analog axis values, polled once per tick.
pub trait AxisInput {
    /// Current value of `binding`, nominally in [-1, 1].
    fn axis_value(&self, binding: AxisBinding) -> f32;
}

/// The controlled body.
pub trait BodyMover {
    fn actor_location(&self) -> Vec3;

    /// Sweep the body by `delta` and set its rotation. Returns the blocking
    /// hit if the sweep was stopped short.
    fn move_body(&mut self, delta: Vec3, rotation: Quat) -> Option<BlockingHit>;
}

/// Actor spawning.
pub trait ActorSpawner {
    /// Spawn a projectile archetype. `None` means there is no world to spawn
    /// into; the caller skips the spawn.
    fn spawn_projectile(
        &mut self,
        kind: ProjectileKind,
        location: Vec3,
        rotation: Quat,
    ) -> Option<ActorId>;
}

/// One-shot delayed callbacks.
pub trait TimerService {
    /// Schedule the fire-cooldown callback `delay_secs` from now. A pending
    /// timer under `replace` is discarded.
    fn set_timer(&mut self, replace: Option<TimerHandle>, delay_secs: f32) -> TimerHandle;
}

/// Positional audio.
pub trait AudioPlayer {
    fn play_sound_at(&mut self, sound: &str, location: Vec3);
}

/// Everything the controller needs from its host.
pub trait ShipHost: AxisInput + BodyMover + ActorSpawner + TimerService + AudioPlayer {}

impl<T> ShipHost for T where T: AxisInput + BodyMover + ActorSpawner + TimerService + AudioPlayer {}

/// Input-binding registration.
pub trait InputBinder {
    fn bind_axis(&mut self, binding: AxisBinding);
    fn bind_action(&mut self, action: InputAction, event: InputEvent);
}

/// Entry points the host invokes on its own schedule.
pub trait ShipControl {
    /// Once per simulation frame.
    fn on_tick(&mut self, host: &mut dyn ShipHost, delta_seconds: f32);
    /// The fire-mode switch action fired.
    fn on_fire_mode_switch(&mut self);
    /// The timer scheduled by the last shot expired.
    fn on_fire_cooldown_expired(&mut self);
}
