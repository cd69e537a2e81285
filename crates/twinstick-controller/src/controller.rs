//! The ship controller.
//!
//! One per session. The host calls [`ShipControl::on_tick`] every frame,
//! [`ShipControl::on_fire_mode_switch`] when the switch action is released and
//! [`ShipControl::on_fire_cooldown_expired`] when the timer scheduled by the
//! last shot runs out. All three run on the same thread, one after another.

use glam::Vec3;
use tracing::{debug, trace};

use twinstick_core::config::ShipConfig;
use twinstick_core::enums::{AxisBinding, FireGate, InputAction, InputEvent};
use twinstick_core::types::{rotation_from_direction, TimerHandle};

use crate::fire_gate::{self, GateEvent};
use crate::fire_mode::FireMode;
use crate::host::{InputBinder, ShipControl, ShipHost};
use crate::movement;

/// Movement, fire mode and fire gate state for the player's ship.
#[derive(Debug, Clone)]
pub struct ShipController {
    move_speed: f32,
    /// Muzzle position in the ship's local frame.
    gun_offset: Vec3,
    /// Cooldown between shots (seconds).
    fire_rate: f32,
    fire_sound: Option<String>,
    gate: FireGate,
    fire_mode: FireMode,
    /// Pending cooldown timer, if any. Replaced on every shot.
    fire_timer: Option<TimerHandle>,
}

impl ShipController {
    pub fn new(config: &ShipConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            gun_offset: config.gun_offset,
            fire_rate: config.fire_rate,
            fire_sound: config.fire_sound.clone(),
            gate: FireGate::Ready,
            fire_mode: FireMode::FIRST,
            fire_timer: None,
        }
    }

    pub fn can_fire(&self) -> bool {
        fire_gate::can_fire(self.gate)
    }

    pub fn fire_gate(&self) -> FireGate {
        self.gate
    }

    pub fn fire_mode(&self) -> FireMode {
        self.fire_mode
    }

    pub fn fire_timer(&self) -> Option<TimerHandle> {
        self.fire_timer
    }

    pub fn fire_rate(&self) -> f32 {
        self.fire_rate
    }

    /// Register the four move/fire axes and the fire-mode switch action.
    pub fn setup_input(&self, binder: &mut dyn InputBinder) {
        for binding in AxisBinding::ALL {
            binder.bind_axis(binding);
        }
        binder.bind_action(InputAction::SwitchProjectile, InputEvent::Released);
    }

    /// Route a discrete input. Only a released switch cycles the mode.
    pub fn handle_action(&mut self, action: InputAction, event: InputEvent) {
        match (action, event) {
            (InputAction::SwitchProjectile, InputEvent::Released) => self.on_fire_mode_switch(),
            (InputAction::SwitchProjectile, InputEvent::Pressed) => {}
        }
    }

    /// Try to fire toward `fire_direction`. Returns whether a shot was taken.
    ///
    /// Nothing happens while cooling down or when the direction is zero.
    /// On success the gate closes and a `fire_rate` timer is scheduled in
    /// place of any pending one.
    pub fn fire_shot(&mut self, host: &mut dyn ShipHost, fire_direction: Vec3) -> bool {
        if !self.can_fire() {
            return false;
        }
        // Also rejects NaN axes.
        if !(fire_direction.length_squared() > 0.0) {
            return false;
        }

        let rotation = rotation_from_direction(fire_direction);
        let origin = host.actor_location();
        let spawn_location = origin + rotation * self.gun_offset;
        let kind = self.fire_mode.projectile_kind();

        match host.spawn_projectile(kind, spawn_location, rotation) {
            Some(actor) => debug!(?kind, ?actor, location = ?spawn_location, "projectile spawned"),
            None => debug!(?kind, "no world to spawn into; projectile skipped"),
        }

        self.gate = fire_gate::transition(self.gate, GateEvent::ShotFired);
        self.fire_timer = Some(host.set_timer(self.fire_timer, self.fire_rate));

        if let Some(sound) = &self.fire_sound {
            host.play_sound_at(sound, origin);
        }
        true
    }

    /// Move by this frame's displacement, sliding once along whatever
    /// blocks the first sweep.
    fn apply_movement(&mut self, host: &mut dyn ShipHost, delta_seconds: f32) {
        let direction = movement::move_direction(
            host.axis_value(AxisBinding::MoveForward),
            host.axis_value(AxisBinding::MoveRight),
        );
        let displacement = movement::displacement(direction, self.move_speed, delta_seconds);
        if !(displacement.length_squared() > 0.0) {
            return;
        }

        let rotation = rotation_from_direction(displacement);
        let Some(hit) = host.move_body(displacement, rotation) else {
            return;
        };
        if hit.is_valid_blocking_hit() {
            let slide = movement::deflection(displacement, &hit);
            trace!(?slide, time = hit.time, "deflecting along blocker");
            // Single deflection attempt; a second block is accepted as is.
            let _ = host.move_body(slide, rotation);
        }
    }
}

impl Default for ShipController {
    fn default() -> Self {
        Self::new(&ShipConfig::default())
    }
}

impl ShipControl for ShipController {
    fn on_tick(&mut self, host: &mut dyn ShipHost, delta_seconds: f32) {
        let delta_seconds = movement::sanitize_delta(delta_seconds);
        self.apply_movement(host, delta_seconds);

        let fire_direction = movement::fire_direction(
            host.axis_value(AxisBinding::FireForward),
            host.axis_value(AxisBinding::FireRight),
        );
        self.fire_shot(host, fire_direction);
    }

    fn on_fire_mode_switch(&mut self) {
        self.fire_mode = self.fire_mode.next();
        debug!(mode = %self.fire_mode, kind = ?self.fire_mode.projectile_kind(), "fire mode switched");
    }

    fn on_fire_cooldown_expired(&mut self) {
        self.gate = fire_gate::transition(self.gate, GateEvent::CooldownExpired);
        self.fire_timer = None;
        trace!("fire cooldown expired");
    }
}
