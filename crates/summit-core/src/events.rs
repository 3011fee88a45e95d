//! Events emitted by the engine for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick. Drained into every
/// snapshot, so each event is reported exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fresh session began.
    SessionStarted { seed: u64 },
    /// The player left the ground.
    Jumped { velocity: f64 },
    /// The player came to rest after being airborne.
    Landed { y: f64 },
    /// A random event began.
    WorldEventStarted { kind: EventKind },
    /// A random event ran out.
    WorldEventEnded { kind: EventKind },
    DialogueStarted { npc_id: String },
    DialogueEnded { npc_id: String },
    ItemReceived { item: ItemKind },
    PuzzleStarted { puzzle_id: String, length: usize },
    /// The last answer decided the puzzle.
    PuzzleResolved {
        puzzle_id: String,
        outcome: PuzzleOutcome,
    },
    /// The puzzle overlay closed and climbing resumed.
    PuzzleClosed { puzzle_id: String },
    SummitReached { elapsed_secs: u64 },
}

/// Transient message line shown over the playfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    /// Tick at which the notice was posted.
    pub tick: u64,
}
