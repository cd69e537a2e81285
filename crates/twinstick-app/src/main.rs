use std::error::Error;
use std::time::Duration;

use tracing::info;

use twinstick_app::state::AppState;
use twinstick_core::commands::PlayerCommand;
use twinstick_core::config::GameConfig;
use twinstick_core::enums::{AxisBinding, InputAction};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_config() -> Result<GameConfig, Box<dyn Error>> {
    match std::env::var("TWINSTICK_CONFIG") {
        Ok(path) => {
            info!(%path, "loading config");
            Ok(GameConfig::load(&path)?)
        }
        Err(_) => {
            let config = GameConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn log_snapshot(state: &AppState, label: &str) -> Result<(), Box<dyn Error>> {
    if let Some(snapshot) = state.snapshot()? {
        info!(
            label,
            tick = snapshot.time.tick,
            phase = ?snapshot.phase,
            location = ?snapshot.ship.location,
            fire_mode = snapshot.ship.fire_mode,
            projectiles = snapshot.projectiles.len(),
            shots_fired = snapshot.shots_fired,
            "snapshot"
        );
    }
    Ok(())
}

/// Drive a short session: strafe while firing, cycle the fire mode, then
/// pause and report.
fn run_session(state: &AppState) -> Result<(), Box<dyn Error>> {
    let axis = |binding, value| PlayerCommand::SetAxis { binding, value };

    state.send(PlayerCommand::StartSession)?;
    state.send(axis(AxisBinding::MoveForward, 1.0))?;
    state.send(axis(AxisBinding::MoveRight, 0.5))?;
    state.send(axis(AxisBinding::FireRight, 1.0))?;
    std::thread::sleep(Duration::from_millis(500));
    log_snapshot(state, "strafing")?;

    for _ in 0..2 {
        state.send(PlayerCommand::PressAction {
            action: InputAction::SwitchProjectile,
        })?;
        state.send(PlayerCommand::ReleaseAction {
            action: InputAction::SwitchProjectile,
        })?;
        std::thread::sleep(Duration::from_millis(250));
        log_snapshot(state, "mode switched")?;
    }

    state.send(axis(AxisBinding::FireRight, 0.0))?;
    state.send(axis(AxisBinding::MoveForward, -1.0))?;
    std::thread::sleep(Duration::from_millis(500));

    state.send(PlayerCommand::Pause)?;
    std::thread::sleep(Duration::from_millis(50));
    log_snapshot(state, "paused")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = load_config()?;

    let state = AppState::new();
    state.start(config)?;
    let result = run_session(&state);
    state.shutdown()?;
    result
}
