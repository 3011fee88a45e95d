//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space (pixels).
/// `pos` is the top-left corner; y grows downward, so altitude is `-y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap on the x axis only.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// Per-frame input flags sampled from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    /// Sampled but unbound; only `jump` jumps.
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub jump: bool,
}

/// Session clock.
///
/// `tick` counts every frame the session is live. `elapsed_secs` is the
/// player-facing timer: it only accumulates while climbing and can be
/// bumped by penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    pub tick: u64,
    pub elapsed_secs: u64,
    /// Frames counted toward the next whole second.
    pub frame_in_second: u32,
}

impl SessionClock {
    /// Advance by one frame. Only frames with `counting` set move the timer.
    pub fn advance(&mut self, counting: bool, tick_rate: u32) {
        self.tick += 1;
        if !counting {
            return;
        }
        self.frame_in_second += 1;
        if self.frame_in_second >= tick_rate {
            self.frame_in_second = 0;
            self.elapsed_secs += 1;
        }
    }

    /// Add a flat time penalty.
    pub fn add_penalty(&mut self, secs: u64) {
        self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
    }

    /// Timer formatted as `HH:MM:SS`.
    pub fn formatted(&self) -> String {
        format_time(self.elapsed_secs)
    }
}

/// Format whole seconds as `HH:MM:SS`. Hours do not wrap.
pub fn format_time(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Convert a millisecond delay to whole frames, rounding up so a non-zero
/// delay never becomes zero frames.
pub fn ms_to_frames(ms: u64, tick_rate: u32) -> u64 {
    ms.saturating_mul(u64::from(tick_rate)).div_ceil(1000)
}
