//! Level layout: the ordered list of world elements.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::elements::WorldElement;
use crate::error::LevelError;

/// A complete level. Element order is preserved; collision and interaction
/// checks walk it front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub name: String,
    pub elements: Vec<WorldElement>,
}

impl Level {
    /// Parse and validate a JSON level.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read, parse, and validate a JSON level file.
    pub fn from_json_file(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        let summits = self
            .elements
            .iter()
            .filter(|el| matches!(el, WorldElement::Summit(_)))
            .count();
        if summits != 1 {
            return Err(LevelError::SummitCount(summits));
        }

        for element in &self.elements {
            match element {
                WorldElement::PuzzleTrigger(trigger) if trigger.sequence_length == 0 => {
                    return Err(LevelError::EmptyPuzzle {
                        id: trigger.id.clone(),
                    });
                }
                WorldElement::Npc(npc) if npc.lines.is_empty() => {
                    return Err(LevelError::SilentNpc { id: npc.id.clone() });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
