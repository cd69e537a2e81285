//! The arena's implementation of the controller's host capabilities.
//!
//! `ArenaHost` is a short-lived view over the engine's state, built once per
//! tick and handed to the controller as `&mut dyn ShipHost`.

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use twinstick_controller::host::{ActorSpawner, AudioPlayer, AxisInput, BodyMover, TimerService};
use twinstick_core::components::{Projectile, Transform, Velocity};
use twinstick_core::config::ProjectileTable;
use twinstick_core::enums::{AxisBinding, ProjectileKind};
use twinstick_core::events::AudioEvent;
use twinstick_core::types::{ActorId, BlockingHit, TimerHandle};

use crate::input::InputState;
use crate::systems::collision;
use crate::timers::{TimerCallback, TimerManager};

/// Borrowed engine state the controller acts on during one tick.
pub struct ArenaHost<'a> {
    pub world: &'a mut World,
    pub ship: Entity,
    pub input: &'a InputState,
    pub timers: &'a mut TimerManager,
    pub projectiles: &'a ProjectileTable,
    pub audio_events: &'a mut Vec<AudioEvent>,
    /// Current simulation time (seconds).
    pub now: f64,
    /// Projectiles spawned through this host.
    pub spawned: u32,
}

impl AxisInput for ArenaHost<'_> {
    fn axis_value(&self, binding: AxisBinding) -> f32 {
        self.input.axis(binding)
    }
}

impl BodyMover for ArenaHost<'_> {
    fn actor_location(&self) -> Vec3 {
        self.world
            .get::<&Transform>(self.ship)
            .map(|t| t.location)
            .unwrap_or(Vec3::ZERO)
    }

    fn move_body(&mut self, delta: Vec3, rotation: Quat) -> Option<BlockingHit> {
        collision::sweep_ship(self.world, self.ship, delta, rotation)
    }
}

impl ActorSpawner for ArenaHost<'_> {
    fn spawn_projectile(
        &mut self,
        kind: ProjectileKind,
        location: Vec3,
        rotation: Quat,
    ) -> Option<ActorId> {
        let profile = self.projectiles.get(kind);
        let velocity = rotation * Vec3::X * profile.speed;
        let entity = self.world.spawn((
            Projectile {
                kind,
                ttl_secs: profile.lifetime_secs,
                radius: profile.radius,
                wall_contact: false,
            },
            Transform { location, rotation },
            Velocity(velocity),
        ));
        self.spawned += 1;
        Some(ActorId(entity.to_bits().get()))
    }
}

impl TimerService for ArenaHost<'_> {
    fn set_timer(&mut self, replace: Option<TimerHandle>, delay_secs: f32) -> TimerHandle {
        self.timers.set_timer(
            replace,
            self.now,
            delay_secs as f64,
            TimerCallback::FireCooldownExpired,
        )
    }
}

impl AudioPlayer for ArenaHost<'_> {
    fn play_sound_at(&mut self, sound: &str, location: Vec3) {
        self.audio_events.push(AudioEvent::PlayAtLocation {
            sound: sound.to_string(),
            location,
        });
    }
}
