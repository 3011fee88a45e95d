//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use summit_core::commands::PlayerCommand;
use summit_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// Dropping the handle disconnects the command channel, which also stops
/// the loop.
pub struct GameLoopHandle {
    pub(crate) command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot for synchronous polling. Updated after every tick.
    pub(crate) latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| anyhow::anyhow!("game loop stopped: {e}"))
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) -> anyhow::Result<()> {
        // The loop may already have exited on its own.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
        }
        Ok(())
    }
}
