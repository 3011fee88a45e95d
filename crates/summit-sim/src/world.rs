//! Mutable world state advanced by the systems each frame.
//!
//! Everything the draw step needs lives here or in the engine's session
//! slots; systems borrow the pieces they touch.

use summit_core::config::GameConfig;
use summit_core::elements::WorldElement;
use summit_core::enums::ItemKind;
use summit_core::level::Level;
use summit_core::types::{InputState, Rect};

use crate::notice::NoticeBoard;
use crate::systems::random_events::ActiveEvent;

/// The climber.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity; negative moves up.
    pub dy: f64,
    pub speed: f64,
    /// Scales horizontal speed. 1.0 unless weather says otherwise.
    pub climb_multiplier: f64,
    pub jump_strength: f64,
    pub on_ground: bool,
    pub has_rope: bool,
    pub energy: f64,
    pub max_energy: f64,
}

impl Player {
    /// A fresh climber standing on the ground.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.player_start_x,
                config.player_start_y(),
                config.player_width,
                config.player_height,
            ),
            dy: 0.0,
            speed: config.player_speed,
            climb_multiplier: 1.0,
            jump_strength: config.jump_strength,
            on_ground: true,
            has_rope: false,
            energy: config.max_energy,
            max_energy: config.max_energy,
        }
    }

    pub fn x(&self) -> f64 {
        self.rect.pos.x
    }

    pub fn y(&self) -> f64 {
        self.rect.pos.y
    }

    /// Add energy, clamped to `[0, max_energy]`.
    pub fn add_energy(&mut self, amount: f64) {
        self.energy = (self.energy + amount).clamp(0.0, self.max_energy);
    }

    /// Apply an npc reward.
    pub fn receive(&mut self, item: ItemKind, config: &GameConfig) {
        match item {
            ItemKind::Rope => self.has_rope = true,
            ItemKind::EnergyBar => self.add_energy(config.energy_bar_item_amount),
        }
    }
}

/// Everything that changes while climbing, apart from dialogue/puzzle
/// sessions which the engine holds separately.
#[derive(Debug, Clone)]
pub struct WorldState {
    pub player: Player,
    /// Vertical view offset.
    pub camera_y: f64,
    pub elements: Vec<WorldElement>,
    pub active_event: Option<ActiveEvent>,
    pub notice: NoticeBoard,
    /// Held keys for this frame.
    pub input: InputState,
    /// Jump key state last frame, for edge detection.
    pub jump_was_held: bool,
}

impl WorldState {
    pub fn new(config: &GameConfig, level: Level) -> Self {
        Self {
            player: Player::spawn(config),
            camera_y: 0.0,
            elements: level.elements,
            active_event: None,
            notice: NoticeBoard::default(),
            input: InputState::default(),
            jump_was_held: false,
        }
    }

    /// Put everything back to the start of a session. Level geometry stays.
    /// The caller flushes the timer queue.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player = Player::spawn(config);
        self.camera_y = 0.0;
        for element in &mut self.elements {
            element.reset_flags();
        }
        self.active_event = None;
        self.notice.reset();
        self.input = InputState::default();
        self.jump_was_held = false;
    }
}
