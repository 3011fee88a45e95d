//! Errors raised while loading configuration and levels.
//!
//! Gameplay never produces errors; a wrong puzzle answer or a fall is a
//! state transition, not a failure of the engine.

/// Errors from loading or validating a `GameConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be within [0, 1], got {value}")]
    NotProbability { field: &'static str, value: f64 },
    #[error("event bands must satisfy 0 <= blizzard <= sunny <= 1, got {blizzard} and {sunny}")]
    EventBands { blizzard: f64, sunny: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("ground_height {ground_height} must be below canvas_height {canvas_height}")]
    GroundTooTall {
        ground_height: f64,
        canvas_height: f64,
    },
    #[error("summit_altitude must be <= 0, got {0}")]
    SummitAltitude(f64),
    #[error("{field} must be at most {max} ms, got {value}")]
    DelayTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("puzzle direction set is empty")]
    NoPuzzleDirections,
}

/// Errors from loading or validating a `Level`.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level must contain exactly one summit, found {0}")]
    SummitCount(usize),
    #[error("puzzle trigger {id} has a zero-length sequence")]
    EmptyPuzzle { id: String },
    #[error("npc {id} has no dialogue lines")]
    SilentNpc { id: String },
}
