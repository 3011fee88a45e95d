//! Npc dialogue playback.
//!
//! Starting a conversation shows the first line. Each advance shows the next
//! one; advancing past the last line ends the conversation and hands over
//! the npc's item.

use summit_core::elements::Npc;
use summit_core::enums::ItemKind;
use summit_core::state::DialogueView;

/// A conversation in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSession {
    pub npc_id: String,
    pub lines: Vec<String>,
    pub item: Option<ItemKind>,
    /// Index of the next line to show.
    pub cursor: usize,
}

/// Result of one advance.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueStep {
    /// Line at this index is now on screen.
    Line(usize),
    /// Conversation over; grant the item, if any.
    Finished { item: Option<ItemKind> },
}

impl DialogueSession {
    /// Open a conversation with `npc`, showing its first line.
    pub fn start(npc: &Npc) -> Self {
        let mut session = Self {
            npc_id: npc.id.clone(),
            lines: npc.lines.clone(),
            item: npc.item,
            cursor: 0,
        };
        session.advance();
        session
    }

    /// Show the next line, or finish.
    pub fn advance(&mut self) -> DialogueStep {
        if self.cursor >= self.lines.len() {
            return DialogueStep::Finished { item: self.item };
        }
        let shown = self.cursor;
        self.cursor += 1;
        DialogueStep::Line(shown)
    }

    /// Index of the line on screen.
    pub fn shown_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    pub fn view(&self) -> DialogueView {
        let line_index = self.shown_index().unwrap_or(0);
        DialogueView {
            npc_id: self.npc_id.clone(),
            line: self.lines.get(line_index).cloned().unwrap_or_default(),
            line_index,
            total_lines: self.lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use summit_core::types::Rect;

    use super::*;

    fn guide() -> Npc {
        Npc {
            id: "guide1".into(),
            rect: Rect::new(0.0, 0.0, 32.0, 48.0),
            lines: vec!["one".into(), "two".into(), "three".into()],
            item: Some(ItemKind::Rope),
            interacted: true,
        }
    }

    #[test]
    fn start_shows_first_line() {
        let session = DialogueSession::start(&guide());
        assert_eq!(session.view().line, "one");
        assert_eq!(session.shown_index(), Some(0));
    }

    #[test]
    fn one_line_per_advance_then_finish() {
        let mut session = DialogueSession::start(&guide());
        assert_eq!(session.advance(), DialogueStep::Line(1));
        assert_eq!(session.view().line, "two");
        assert_eq!(session.advance(), DialogueStep::Line(2));
        assert_eq!(session.view().line, "three");
        assert_eq!(
            session.advance(),
            DialogueStep::Finished {
                item: Some(ItemKind::Rope)
            }
        );
    }
}
