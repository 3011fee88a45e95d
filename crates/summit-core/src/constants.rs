//! Game constants and tuning parameters.
//!
//! These are the defaults behind `GameConfig`; a config file may override any
//! of them.

/// Frame rate the engine is designed around (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Visible playfield width (pixels).
pub const CANVAS_WIDTH: f64 = 800.0;

/// Visible playfield height (pixels).
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Thickness of the ground slab at the bottom of the level.
pub const GROUND_HEIGHT: f64 = 50.0;

/// Highest point the camera may scroll to (y decreases upward).
pub const SUMMIT_ALTITUDE: f64 = -1500.0;

/// Fraction of the canvas height at which the camera keeps the player.
pub const CAMERA_VIEW_ANCHOR: f64 = 1.0 / 3.0;

// --- Player ---

pub const PLAYER_WIDTH: f64 = 32.0;
pub const PLAYER_HEIGHT: f64 = 48.0;

/// Starting x position.
pub const PLAYER_START_X: f64 = 50.0;

/// Horizontal speed per frame before the climb multiplier.
pub const PLAYER_SPEED: f64 = 3.0;

/// Upward velocity applied by a jump.
pub const PLAYER_JUMP_STRENGTH: f64 = 10.0;

/// Downward acceleration per frame.
pub const GRAVITY: f64 = 0.4;

/// Extra depth below a ledge surface that still counts as landing on it.
pub const LANDING_TOLERANCE: f64 = 10.0;

/// Maximum (and starting) energy.
pub const MAX_ENERGY: f64 = 100.0;

// --- Random events ---

/// Chance per playing frame that an event starts when none is active.
pub const EVENT_CHANCE_PER_FRAME: f64 = 0.002;

/// Second-roll upper bound for a blizzard.
pub const BLIZZARD_BAND: f64 = 0.4;

/// Second-roll upper bound for a sunny spell (rolls above it find an energy bar).
pub const SUNNY_BAND: f64 = 0.7;

pub const BLIZZARD_MULTIPLIER: f64 = 0.6;
pub const BLIZZARD_DURATION_FRAMES: u32 = 300;

pub const SUNNY_MULTIPLIER: f64 = 1.3;
pub const SUNNY_DURATION_FRAMES: u32 = 240;

pub const ENERGY_BAR_AMOUNT: f64 = 25.0;
pub const ENERGY_BAR_DURATION_FRAMES: u32 = 120;

// --- Items ---

/// Energy granted by an energy-bar item received from an npc.
pub const ENERGY_BAR_ITEM_AMOUNT: f64 = 50.0;

// --- Notices and puzzle pacing (milliseconds) ---

/// How long a transient notice stays on screen.
pub const NOTICE_DURATION_MS: u64 = 2000;

/// How long each sequence arrow is highlighted.
pub const PUZZLE_HIGHLIGHT_MS: u64 = 700;

/// Pause after an arrow before the next one is shown.
pub const PUZZLE_PAUSE_MS: u64 = 300;

/// Delay after a correct answer before the puzzle closes.
pub const PUZZLE_SUCCESS_CLOSE_MS: u64 = 2000;

/// Delay after a wrong answer before the "moving on" message.
pub const PUZZLE_FAILURE_REVEAL_MS: u64 = 2000;

/// Delay after the "moving on" message before the puzzle closes.
pub const PUZZLE_FAILURE_CLOSE_MS: u64 = 1500;

/// Longest delay a config may ask for (one hour).
pub const MAX_DELAY_MS: u64 = 3_600_000;

/// Seconds added to the clock for a failed puzzle.
pub const PUZZLE_TIME_PENALTY_SECS: u64 = 5;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
