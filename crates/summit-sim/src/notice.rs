//! The single transient message line shown over the playfield.
//!
//! Weather banners stay up until their event ends. Pickup and energy-bar
//! messages clear themselves on a timer. Posting a new message cancels the
//! timer that belonged to the old one.

use summit_core::events::Notice;

use crate::timers::{TimerAction, TimerQueue, TimerToken};

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    timer: Option<TimerToken>,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show a message until replaced or cleared.
    pub fn post(&mut self, timers: &mut TimerQueue, message: impl Into<String>, tick: u64) {
        self.cancel_timer(timers);
        self.current = Some(Notice {
            message: message.into(),
            tick,
        });
    }

    /// Show a message that clears itself after `frames`.
    pub fn post_timed(
        &mut self,
        timers: &mut TimerQueue,
        message: impl Into<String>,
        tick: u64,
        frames: u64,
    ) {
        self.post(timers, message, tick);
        self.timer = Some(timers.schedule(frames, TimerAction::ClearNotice));
    }

    pub fn clear(&mut self, timers: &mut TimerQueue) {
        self.cancel_timer(timers);
        self.current = None;
    }

    /// Handle a fired `ClearNotice` timer. Only the timer that owns the
    /// current message may clear it.
    pub fn expire(&mut self, token: TimerToken) {
        if self.timer == Some(token) {
            self.timer = None;
            self.current = None;
        }
    }

    /// Forget the message without touching timers (the queue was flushed).
    pub fn reset(&mut self) {
        self.current = None;
        self.timer = None;
    }

    fn cancel_timer(&mut self, timers: &mut TimerQueue) {
        if let Some(token) = self.timer.take() {
            timers.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_all(board: &mut NoticeBoard, timers: &mut TimerQueue, frames: u64) {
        for _ in 0..frames {
            for (token, action) in timers.advance() {
                if action == TimerAction::ClearNotice {
                    board.expire(token);
                }
            }
        }
    }

    #[test]
    fn timed_notice_clears_itself() {
        let mut timers = TimerQueue::new();
        let mut board = NoticeBoard::default();
        board.post_timed(&mut timers, "Received rope!", 0, 5);

        fire_all(&mut board, &mut timers, 4);
        assert!(board.current().is_some());
        fire_all(&mut board, &mut timers, 1);
        assert!(board.current().is_none());
    }

    #[test]
    fn replacing_cancels_old_timer() {
        let mut timers = TimerQueue::new();
        let mut board = NoticeBoard::default();
        board.post_timed(&mut timers, "first", 0, 2);
        board.post(&mut timers, "Blizzard! Climbing is harder.", 1);
        assert!(timers.is_empty());

        fire_all(&mut board, &mut timers, 10);
        assert_eq!(
            board.current().map(|n| n.message.as_str()),
            Some("Blizzard! Climbing is harder.")
        );
    }
}
