//! Simulation engine: the arena host loop.
//!
//! `SimulationEngine` owns the hecs ECS world and the ship controller,
//! processes player commands, dispatches timers, runs the controller and the
//! world systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use twinstick_controller::{ShipControl, ShipController};
use twinstick_core::commands::PlayerCommand;
use twinstick_core::config::GameConfig;
use twinstick_core::enums::{InputAction, InputEvent, SessionPhase};
use twinstick_core::events::AudioEvent;
use twinstick_core::state::GameStateSnapshot;
use twinstick_core::types::SimTime;

use crate::host::ArenaHost;
use crate::input::InputState;
use crate::systems;
use crate::timers::{TimerCallback, TimerManager};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all arena state.
pub struct SimulationEngine {
    config: GameConfig,
    world: World,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    controller: ShipController,
    ship: Option<Entity>,
    input: InputState,
    timers: TimerManager,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    shots_fired: u32,
}

impl SimulationEngine {
    /// Create an idle engine. The config is assumed validated.
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.arena.seed),
            controller: ShipController::new(&config.ship),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            ship: None,
            input: InputState::new(),
            timers: TimerManager::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            shots_fired: 0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.ship,
            &self.controller,
            audio_events,
            self.shots_fired,
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.config.arena.dt()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn controller(&self) -> &ShipController {
        &self.controller
    }

    pub fn timers(&self) -> &TimerManager {
        &self.timers
    }

    pub fn ship(&self) -> Option<Entity> {
        self.ship
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == SessionPhase::Idle {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
            }
            PlayerCommand::SetAxis { binding, value } => {
                self.input.set_axis(binding, value);
            }
            PlayerCommand::PressAction { action } => {
                self.dispatch_action(action, InputEvent::Pressed);
            }
            PlayerCommand::ReleaseAction { action } => {
                self.dispatch_action(action, InputEvent::Released);
            }
        }
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.timers = TimerManager::new();
        self.controller = ShipController::new(&self.config.ship);
        self.input.clear_bindings();
        self.controller.setup_input(&mut self.input);
        self.ship = Some(world_setup::setup_arena(
            &mut self.world,
            &mut self.rng,
            &self.config.arena,
        ));
        self.time = SimTime::default();
        self.shots_fired = 0;
        self.phase = SessionPhase::Active;
        info!(
            seed = self.config.arena.seed,
            walls = self.world.len() - 1,
            "session started"
        );
    }

    /// Deliver a discrete input to the controller if it is bound and the
    /// session is running.
    fn dispatch_action(&mut self, action: InputAction, event: InputEvent) {
        if self.phase != SessionPhase::Active {
            debug!(?action, ?event, "action ignored outside an active session");
            return;
        }
        if self.input.is_action_bound(action, event) {
            self.controller.handle_action(action, event);
        }
    }

    /// Run one frame: timers, controller, then world systems.
    fn run_systems(&mut self) {
        let dt = self.dt();
        self.time.advance(dt);

        // 1. Expired timers
        for (handle, callback) in self.timers.expire(self.time.elapsed_secs) {
            match callback {
                TimerCallback::FireCooldownExpired => {
                    if self.controller.fire_timer() != Some(handle) {
                        warn!(?handle, "expired timer is not the controller's pending cooldown");
                    }
                    self.controller.on_fire_cooldown_expired();
                }
            }
        }

        // 2. Ship controller
        if let Some(ship) = self.ship {
            let mut host = ArenaHost {
                world: &mut self.world,
                ship,
                input: &self.input,
                timers: &mut self.timers,
                projectiles: &self.config.projectiles,
                audio_events: &mut self.audio_events,
                now: self.time.elapsed_secs,
                spawned: 0,
            };
            self.controller.on_tick(&mut host, dt as f32);
            self.shots_fired += host.spawned;
        }

        // 3. Projectile kinematics
        systems::movement::run(&mut self.world, dt as f32);
        // 4. Cleanup (expired, wall contact, out of bounds)
        systems::cleanup::run(
            &mut self.world,
            self.config.arena.half_extent,
            &mut self.despawn_buffer,
        );
    }
}
