//! Player commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next tick boundary, in order.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::types::InputState;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset the world and start climbing (from the start or summit screen).
    StartGame,
    /// Reset the world back to the start screen state and start climbing again.
    ResetGame,
    /// Replace the held-key state sampled by the movement system.
    SetInput { input: InputState },
    /// Show the next dialogue line (one per key press).
    AdvanceDialogue,
    /// Directional answer for the memory puzzle.
    PuzzleInput { direction: Direction },
}
