//! Frame-based timer queue with cancellable tokens.
//!
//! Delayed UI steps (clearing a notice, revealing the next puzzle arrow,
//! closing the puzzle overlay) are scheduled here instead of as host
//! callbacks. Whoever schedules a timer keeps its token and cancels it on
//! teardown, so a timer can never fire into a session that already ended.

use serde::{Deserialize, Serialize};

/// Handle returned by `TimerQueue::schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

/// Steps of the puzzle overlay that run on a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStep {
    /// Drop the highlight from the arrow on display.
    Unhighlight,
    /// Show the next arrow, or hand over to the player.
    ShowNext,
    /// Replace the failure message with the "moving on" line.
    FailureFollowUp,
    /// Close the overlay and resume climbing.
    Close,
}

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    ClearNotice,
    Puzzle(PuzzleStep),
}

#[derive(Debug, Clone)]
struct Timer {
    token: TimerToken,
    due: u64,
    action: TimerAction,
}

/// Pending timers, measured in frames.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: u64,
    next_token: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_frames` from now. A zero delay fires
    /// on the next `advance`.
    pub fn schedule(&mut self, delay_frames: u64, action: TimerAction) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.timers.push(Timer {
            token,
            due: self.now.saturating_add(delay_frames.max(1)),
            action,
        });
        token
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.token != token);
        self.timers.len() != before
    }

    /// Drop every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.timers.iter().any(|t| t.token == token)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance one frame and return the timers that came due, oldest
    /// deadline first (ties in scheduling order).
    pub fn advance(&mut self) -> Vec<(TimerToken, TimerAction)> {
        self.now += 1;
        let now = self.now;

        let mut due: Vec<Timer> = Vec::new();
        self.timers.retain(|t| {
            if t.due <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due, t.token.0));
        due.into_iter().map(|t| (t.token, t.action)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let mut timers = TimerQueue::new();
        timers.schedule(3, TimerAction::ClearNotice);

        assert!(timers.advance().is_empty());
        assert!(timers.advance().is_empty());
        let fired = timers.advance();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, TimerAction::ClearNotice);
        assert!(timers.is_empty());
    }

    #[test]
    fn zero_delay_fires_next_frame() {
        let mut timers = TimerQueue::new();
        timers.schedule(0, TimerAction::Puzzle(PuzzleStep::Close));
        assert_eq!(timers.advance().len(), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let token = timers.schedule(2, TimerAction::ClearNotice);
        assert!(timers.is_pending(token));
        assert!(timers.cancel(token));
        assert!(!timers.cancel(token));

        for _ in 0..10 {
            assert!(timers.advance().is_empty());
        }
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut timers = TimerQueue::new();
        timers.schedule(1, TimerAction::ClearNotice);
        timers.schedule(5, TimerAction::Puzzle(PuzzleStep::ShowNext));
        timers.cancel_all();
        assert!(timers.is_empty());
        for _ in 0..10 {
            assert!(timers.advance().is_empty());
        }
    }

    #[test]
    fn huge_delay_stays_pending() {
        let mut timers = TimerQueue::new();
        timers.advance();
        let token = timers.schedule(u64::MAX, TimerAction::ClearNotice);
        for _ in 0..10 {
            assert!(timers.advance().is_empty());
        }
        assert!(timers.is_pending(token));
    }

    #[test]
    fn due_order_is_deadline_then_schedule() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(2, TimerAction::Puzzle(PuzzleStep::Close));
        let early = timers.schedule(1, TimerAction::ClearNotice);
        let also_late = timers.schedule(2, TimerAction::Puzzle(PuzzleStep::ShowNext));

        let first = timers.advance();
        assert_eq!(first.iter().map(|f| f.0).collect::<Vec<_>>(), vec![early]);
        let second = timers.advance();
        assert_eq!(
            second.iter().map(|f| f.0).collect::<Vec<_>>(),
            vec![late, also_late]
        );
    }
}
