//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    StartScreen,
    /// Normal climbing; the only phase that runs movement and physics.
    Playing,
    /// An npc conversation is on screen.
    Dialogue,
    /// A memory puzzle is on screen.
    Puzzle,
    /// Summit reached. Terminal until the game is restarted.
    Summit,
}

impl GamePhase {
    /// Whether a play session is in progress (timers run).
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Playing | Self::Dialogue | Self::Puzzle)
    }
}

/// Cardinal direction used by the memory puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Random world event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Slows horizontal movement.
    Blizzard,
    /// Speeds up horizontal movement.
    Sunny,
    /// Instant energy bonus; occupies the event slot while its message shows.
    EnergyBar,
}

impl EventKind {
    /// Whether the event changes the climb-speed multiplier.
    pub fn is_weather(&self) -> bool {
        matches!(self, Self::Blizzard | Self::Sunny)
    }
}

/// Item an npc can hand over at the end of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Rope,
    EnergyBar,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rope => "rope",
            Self::EnergyBar => "energy bar",
        }
    }
}

/// Result of a memory puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleOutcome {
    Success,
    Failure,
}

/// Where a memory puzzle session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStage {
    /// Revealing entry `index`; `highlighted` is true for the first part of
    /// each reveal.
    ShowingSequence { index: usize, highlighted: bool },
    /// Reveal finished; answers are accepted.
    AwaitingInput,
    /// Decided. Further answers are ignored until the overlay closes.
    Resolved { outcome: PuzzleOutcome },
}
