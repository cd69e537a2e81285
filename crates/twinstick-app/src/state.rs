//! Application state shared between callers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use twinstick_core::commands::PlayerCommand;
use twinstick_core::config::GameConfig;
use twinstick_core::state::GameStateSnapshot;

use crate::error::{AppError, AppResult};
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) game loop.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`.
/// The latest snapshot is shared with the loop thread through an `Arc`.
pub struct AppState {
    /// `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Spawn the game loop thread with `config`.
    pub fn start(&self, config: GameConfig) -> AppResult<()> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;
        *tx_lock = Some(cmd_tx);
        *self.loop_thread.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send(&self, command: PlayerCommand) -> AppResult<()> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Player(command))
                .map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// Latest published snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> AppResult<Option<GameStateSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
        Ok(lock.clone())
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) -> AppResult<()> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::LockPoisoned)?
            .take()
            .ok_or(AppError::NotStarted)?;
        // A dead loop has already stopped; nothing to signal.
        let _ = tx.send(GameLoopCommand::Shutdown);

        let handle = self
            .loop_thread
            .lock()
            .map_err(|_| AppError::LockPoisoned)?
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::error!("game loop thread panicked");
            }
        }
        Ok(())
    }
}
