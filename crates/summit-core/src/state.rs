//! Game state snapshot: the complete visible state handed to the draw step
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::elements::WorldElement;
use crate::enums::*;
use crate::events::{GameEvent, Notice};
use crate::types::SessionClock;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: SessionClock,
    /// `clock.elapsed_secs` as `HH:MM:SS`.
    pub formatted_time: String,
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Vertical view offset. Starts at 0 and only decreases.
    pub camera_y: f64,
    /// Every element with its current one-shot flags.
    pub elements: Vec<WorldElement>,
    pub active_event: Option<ActiveEventView>,
    pub notice: Option<Notice>,
    pub dialogue: Option<DialogueView>,
    pub puzzle: Option<PuzzleView>,
    pub events: Vec<GameEvent>,
}

/// Player transform and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity (positive = falling).
    pub dy: f64,
    pub on_ground: bool,
    pub has_rope: bool,
    pub energy: f64,
    pub climb_multiplier: f64,
}

/// The random event currently in effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEventView {
    pub kind: EventKind,
    pub remaining_frames: u32,
}

/// The conversation on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueView {
    pub npc_id: String,
    /// Line currently displayed.
    pub line: String,
    /// Index of the displayed line.
    pub line_index: usize,
    pub total_lines: usize,
}

/// The memory puzzle on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleView {
    pub puzzle_id: String,
    pub instruction: String,
    pub length: usize,
    pub stage: PuzzleStage,
    /// Arrow being revealed right now, if any.
    pub showing: Option<Direction>,
    /// Answers entered so far.
    pub input: Vec<Direction>,
    /// The full sequence; only exposed once the puzzle failed.
    pub revealed_sequence: Option<Vec<Direction>>,
    /// Status line ("Your turn!", reward text, failure text).
    pub message: String,
}
