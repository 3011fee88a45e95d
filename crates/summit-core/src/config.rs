//! Runtime configuration.
//!
//! Every field defaults to the matching value in `constants.rs`. A JSON file
//! only needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Direction;
use crate::error::ConfigError;
use crate::types::ms_to_frames;

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same inputs = same session.
    pub seed: u64,
    /// Frames per second the host ticks the engine at.
    pub tick_rate: u32,

    // --- Playfield ---
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub ground_height: f64,
    pub summit_altitude: f64,
    pub camera_view_anchor: f64,

    // --- Player ---
    pub player_width: f64,
    pub player_height: f64,
    pub player_start_x: f64,
    pub player_speed: f64,
    pub jump_strength: f64,
    pub gravity: f64,
    pub landing_tolerance: f64,
    pub max_energy: f64,

    // --- Random events ---
    pub event_chance: f64,
    pub blizzard_band: f64,
    pub sunny_band: f64,
    pub blizzard_multiplier: f64,
    pub blizzard_frames: u32,
    pub sunny_multiplier: f64,
    pub sunny_frames: u32,
    pub energy_bar_amount: f64,
    pub energy_bar_frames: u32,
    pub energy_bar_item_amount: f64,

    // --- Notices and puzzles ---
    pub notice_ms: u64,
    pub puzzle_highlight_ms: u64,
    pub puzzle_pause_ms: u64,
    pub puzzle_success_close_ms: u64,
    pub puzzle_failure_reveal_ms: u64,
    pub puzzle_failure_close_ms: u64,
    pub puzzle_time_penalty_secs: u64,
    /// Directions the puzzle may draw from. Down has no arrow art by default.
    pub puzzle_directions: Vec<Direction>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_rate: TICK_RATE,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            summit_altitude: SUMMIT_ALTITUDE,
            camera_view_anchor: CAMERA_VIEW_ANCHOR,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_speed: PLAYER_SPEED,
            jump_strength: PLAYER_JUMP_STRENGTH,
            gravity: GRAVITY,
            landing_tolerance: LANDING_TOLERANCE,
            max_energy: MAX_ENERGY,
            event_chance: EVENT_CHANCE_PER_FRAME,
            blizzard_band: BLIZZARD_BAND,
            sunny_band: SUNNY_BAND,
            blizzard_multiplier: BLIZZARD_MULTIPLIER,
            blizzard_frames: BLIZZARD_DURATION_FRAMES,
            sunny_multiplier: SUNNY_MULTIPLIER,
            sunny_frames: SUNNY_DURATION_FRAMES,
            energy_bar_amount: ENERGY_BAR_AMOUNT,
            energy_bar_frames: ENERGY_BAR_DURATION_FRAMES,
            energy_bar_item_amount: ENERGY_BAR_ITEM_AMOUNT,
            notice_ms: NOTICE_DURATION_MS,
            puzzle_highlight_ms: PUZZLE_HIGHLIGHT_MS,
            puzzle_pause_ms: PUZZLE_PAUSE_MS,
            puzzle_success_close_ms: PUZZLE_SUCCESS_CLOSE_MS,
            puzzle_failure_reveal_ms: PUZZLE_FAILURE_REVEAL_MS,
            puzzle_failure_close_ms: PUZZLE_FAILURE_CLOSE_MS,
            puzzle_time_penalty_secs: PUZZLE_TIME_PENALTY_SECS,
            puzzle_directions: vec![Direction::Up, Direction::Left, Direction::Right],
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tick_rate", self.tick_rate as f64),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("jump_strength", self.jump_strength),
            ("gravity", self.gravity),
            ("max_energy", self.max_energy),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("ground_height", self.ground_height),
            ("landing_tolerance", self.landing_tolerance),
            ("energy_bar_amount", self.energy_bar_amount),
            ("energy_bar_item_amount", self.energy_bar_item_amount),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.ground_height >= self.canvas_height {
            return Err(ConfigError::GroundTooTall {
                ground_height: self.ground_height,
                canvas_height: self.canvas_height,
            });
        }
        if self.summit_altitude.is_nan() || self.summit_altitude > 0.0 {
            return Err(ConfigError::SummitAltitude(self.summit_altitude));
        }

        let delays = [
            ("notice_ms", self.notice_ms),
            ("puzzle_highlight_ms", self.puzzle_highlight_ms),
            ("puzzle_pause_ms", self.puzzle_pause_ms),
            ("puzzle_success_close_ms", self.puzzle_success_close_ms),
            ("puzzle_failure_reveal_ms", self.puzzle_failure_reveal_ms),
            ("puzzle_failure_close_ms", self.puzzle_failure_close_ms),
        ];
        for (field, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::DelayTooLong {
                    field,
                    value,
                    max: MAX_DELAY_MS,
                });
            }
        }

        let probabilities = [
            ("event_chance", self.event_chance),
            ("camera_view_anchor", self.camera_view_anchor),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::NotProbability { field, value });
            }
        }

        let bands_ok = 0.0 <= self.blizzard_band
            && self.blizzard_band <= self.sunny_band
            && self.sunny_band <= 1.0;
        if !bands_ok {
            return Err(ConfigError::EventBands {
                blizzard: self.blizzard_band,
                sunny: self.sunny_band,
            });
        }

        if self.puzzle_directions.is_empty() {
            return Err(ConfigError::NoPuzzleDirections);
        }
        Ok(())
    }

    /// Frames spanned by a millisecond delay at this tick rate.
    pub fn frames(&self, ms: u64) -> u64 {
        ms_to_frames(ms, self.tick_rate)
    }

    /// World y of the ground surface.
    pub fn ground_top(&self) -> f64 {
        self.canvas_height - self.ground_height
    }

    /// Lowest y the player's top edge may reach.
    pub fn floor_y(&self) -> f64 {
        self.canvas_height - self.player_height
    }

    /// Starting y: standing on the ground.
    pub fn player_start_y(&self) -> f64 {
        self.ground_top() - self.player_height
    }
}
