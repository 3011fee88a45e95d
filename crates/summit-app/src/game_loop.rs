//! Game loop thread: runs the climb engine at the configured tick rate and
//! forwards snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via an `mpsc` channel. Snapshots go to a sink channel and
//! are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use summit_core::config::GameConfig;
use summit_core::level::Level;
use summit_core::state::GameStateSnapshot;
use summit_sim::ClimbEngine;

use crate::state::{GameLoopCommand, GameLoopHandle};

/// Duration of one tick at `tick_rate` frames per second.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Every snapshot is sent to `sink`; a disconnected sink is ignored.
pub fn spawn_game_loop(
    config: GameConfig,
    level: Level,
    sink: mpsc::Sender<GameStateSnapshot>,
) -> std::io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("summit-game-loop".into())
        .spawn(move || {
            run_game_loop(config, level, cmd_rx, &sink, &shared);
        })?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    level: Level,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    sink: &mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick = tick_duration(config.tick_rate);
    let mut engine = ClimbEngine::new(config, level);
    let mut next_tick_time = Instant::now();
    tracing::debug!(?tick, "game loop running");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!("game loop stopping");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Forward to the sink
        let _ = sink.send(snapshot.clone());

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_core::commands::PlayerCommand;
    use summit_core::enums::GamePhase;
    use summit_sim::world_setup::default_level;

    #[test]
    fn test_tick_duration_at_60hz() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(tick_duration(60).as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_runs_commands_and_shuts_down() {
        let config = GameConfig::default();
        let level = default_level(&config);
        let (sink_tx, sink_rx) = mpsc::channel();
        let handle = spawn_game_loop(config, level, sink_tx).unwrap();

        handle.send(PlayerCommand::StartGame).unwrap();
        let playing = sink_rx
            .iter()
            .take(600)
            .find(|snap| snap.phase == GamePhase::Playing);
        assert!(playing.is_some(), "loop never started the game");
        assert!(handle.latest_snapshot().is_some());

        handle.shutdown().unwrap();
        // The sink disconnects once the loop thread is gone.
        while sink_rx.recv().is_ok() {}
    }
}
