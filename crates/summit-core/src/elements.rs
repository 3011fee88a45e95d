//! Static world geometry and interactive elements.
//!
//! Elements are plain data. The one-shot flags (`interacted`, `completed`)
//! are the only fields the engine mutates, and only `reset_flags` clears them.

use serde::{Deserialize, Serialize};

use crate::enums::ItemKind;
use crate::types::Rect;

/// A surface the player can stand on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledge {
    pub rect: Rect,
    /// Without the rope the player falls straight through this ledge.
    #[serde(default)]
    pub requires_rope: bool,
}

/// A character that talks to the player once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: String,
    pub rect: Rect,
    pub lines: Vec<String>,
    /// Handed over when the conversation ends.
    #[serde(default)]
    pub item: Option<ItemKind>,
    #[serde(default)]
    pub interacted: bool,
}

/// Starts a memory puzzle on first touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleTrigger {
    pub id: String,
    pub rect: Rect,
    pub instruction: String,
    pub sequence_length: usize,
    pub reward_text: String,
    /// Energy granted on success.
    #[serde(default)]
    pub energy_reward: Option<f64>,
    #[serde(default)]
    pub completed: bool,
}

/// Reaching this ends the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summit {
    pub rect: Rect,
}

/// Any element placed in the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorldElement {
    Ledge(Ledge),
    Npc(Npc),
    PuzzleTrigger(PuzzleTrigger),
    Summit(Summit),
}

impl WorldElement {
    /// Bounding box of the element.
    pub fn rect(&self) -> &Rect {
        match self {
            Self::Ledge(ledge) => &ledge.rect,
            Self::Npc(npc) => &npc.rect,
            Self::PuzzleTrigger(trigger) => &trigger.rect,
            Self::Summit(summit) => &summit.rect,
        }
    }

    /// Clear one-shot flags for a new session.
    pub fn reset_flags(&mut self) {
        match self {
            Self::Npc(npc) => npc.interacted = false,
            Self::PuzzleTrigger(trigger) => trigger.completed = false,
            Self::Ledge(_) | Self::Summit(_) => {}
        }
    }
}
