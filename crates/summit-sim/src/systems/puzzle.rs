//! Memory ("Simon says") puzzle.
//!
//! The session reveals a random direction sequence one arrow at a time,
//! then accepts answers. One wrong answer fails the puzzle; there is no
//! retry. Every delayed step runs through the timer queue and the session
//! holds the token of its single pending step, so tearing the session down
//! cancels whatever was still scheduled.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use summit_core::config::GameConfig;
use summit_core::elements::PuzzleTrigger;
use summit_core::enums::{Direction, PuzzleOutcome, PuzzleStage};
use summit_core::state::PuzzleView;

use crate::timers::{PuzzleStep, TimerAction, TimerQueue, TimerToken};

/// Draw `length` directions uniformly, with replacement.
pub fn generate_sequence(
    rng: &mut ChaCha8Rng,
    length: usize,
    directions: &[Direction],
) -> Vec<Direction> {
    if directions.is_empty() {
        return Vec::new();
    }
    (0..length)
        .map(|_| directions[rng.gen_range(0..directions.len())])
        .collect()
}

/// What the engine should do after a puzzle timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Continue,
    /// Close the overlay and resume climbing.
    Close,
}

/// A puzzle in progress.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    pub puzzle_id: String,
    pub instruction: String,
    pub reward_text: String,
    pub energy_reward: Option<f64>,
    pub sequence: Vec<Direction>,
    pub input: Vec<Direction>,
    pub stage: PuzzleStage,
    pub message: String,
    /// Set once the answer has been shown after a failure.
    pub sequence_revealed: bool,
    pending: Option<TimerToken>,
}

impl PuzzleSession {
    /// Generate a sequence for `trigger` and begin revealing it.
    pub fn start(
        trigger: &PuzzleTrigger,
        rng: &mut ChaCha8Rng,
        config: &GameConfig,
        timers: &mut TimerQueue,
    ) -> Self {
        let sequence =
            generate_sequence(rng, trigger.sequence_length, &config.puzzle_directions);
        Self::with_sequence(trigger, sequence, config, timers)
    }

    /// Begin revealing a known sequence.
    pub fn with_sequence(
        trigger: &PuzzleTrigger,
        sequence: Vec<Direction>,
        config: &GameConfig,
        timers: &mut TimerQueue,
    ) -> Self {
        let mut session = Self {
            puzzle_id: trigger.id.clone(),
            instruction: trigger.instruction.clone(),
            reward_text: trigger.reward_text.clone(),
            energy_reward: trigger.energy_reward,
            input: Vec::with_capacity(sequence.len()),
            sequence,
            stage: PuzzleStage::AwaitingInput,
            message: String::new(),
            sequence_revealed: false,
            pending: None,
        };
        if session.sequence.is_empty() {
            session.message = "Your turn!".into();
        } else {
            session.stage = PuzzleStage::ShowingSequence {
                index: 0,
                highlighted: true,
            };
            session.schedule(
                timers,
                config.frames(config.puzzle_highlight_ms),
                PuzzleStep::Unhighlight,
            );
        }
        session
    }

    pub fn accepts_input(&self) -> bool {
        self.stage == PuzzleStage::AwaitingInput
    }

    /// Whether `token` is the step this session is waiting on.
    pub fn owns(&self, token: TimerToken) -> bool {
        self.pending == Some(token)
    }

    /// Arrow being revealed right now.
    pub fn showing(&self) -> Option<Direction> {
        match self.stage {
            PuzzleStage::ShowingSequence { index, .. } => self.sequence.get(index).copied(),
            PuzzleStage::AwaitingInput | PuzzleStage::Resolved { .. } => None,
        }
    }

    /// Run a delayed step this session scheduled.
    pub fn on_timer(
        &mut self,
        step: PuzzleStep,
        config: &GameConfig,
        timers: &mut TimerQueue,
    ) -> TimerOutcome {
        self.pending = None;
        match (step, self.stage) {
            (
                PuzzleStep::Unhighlight,
                PuzzleStage::ShowingSequence {
                    index,
                    highlighted: true,
                },
            ) => {
                self.stage = PuzzleStage::ShowingSequence {
                    index,
                    highlighted: false,
                };
                self.schedule(
                    timers,
                    config.frames(config.puzzle_pause_ms),
                    PuzzleStep::ShowNext,
                );
            }
            (
                PuzzleStep::ShowNext,
                PuzzleStage::ShowingSequence {
                    index,
                    highlighted: false,
                },
            ) => {
                if index + 1 < self.sequence.len() {
                    self.stage = PuzzleStage::ShowingSequence {
                        index: index + 1,
                        highlighted: true,
                    };
                    self.schedule(
                        timers,
                        config.frames(config.puzzle_highlight_ms),
                        PuzzleStep::Unhighlight,
                    );
                } else {
                    self.stage = PuzzleStage::AwaitingInput;
                    self.message = "Your turn!".into();
                }
            }
            (PuzzleStep::FailureFollowUp, _) => {
                self.message = "Puzzle failed. Moving on.".into();
                self.schedule(
                    timers,
                    config.frames(config.puzzle_failure_close_ms),
                    PuzzleStep::Close,
                );
            }
            (PuzzleStep::Close, _) => return TimerOutcome::Close,
            (step, stage) => {
                tracing::trace!(?step, ?stage, "puzzle step does not apply");
            }
        }
        TimerOutcome::Continue
    }

    /// Record one answer. Returns the outcome when this answer decides the
    /// puzzle. Answers outside the input stage are ignored.
    pub fn submit(
        &mut self,
        direction: Direction,
        config: &GameConfig,
        timers: &mut TimerQueue,
    ) -> Option<PuzzleOutcome> {
        if !self.accepts_input() {
            return None;
        }
        self.input.push(direction);
        let index = self.input.len() - 1;

        if self.sequence.get(index) != Some(&direction) {
            let answer: Vec<&str> = self.sequence.iter().map(|d| d.as_str()).collect();
            self.message = format!("Incorrect! Sequence was: {}.", answer.join(", "));
            self.sequence_revealed = true;
            self.input.clear();
            self.stage = PuzzleStage::Resolved {
                outcome: PuzzleOutcome::Failure,
            };
            self.schedule(
                timers,
                config.frames(config.puzzle_failure_reveal_ms),
                PuzzleStep::FailureFollowUp,
            );
            return Some(PuzzleOutcome::Failure);
        }

        if self.input.len() == self.sequence.len() {
            let reward = if self.reward_text.is_empty() {
                "Well done!"
            } else {
                self.reward_text.as_str()
            };
            self.message = format!("Correct! {reward}");
            self.stage = PuzzleStage::Resolved {
                outcome: PuzzleOutcome::Success,
            };
            self.schedule(
                timers,
                config.frames(config.puzzle_success_close_ms),
                PuzzleStep::Close,
            );
            return Some(PuzzleOutcome::Success);
        }
        None
    }

    /// Cancel whatever step is still pending.
    pub fn teardown(&mut self, timers: &mut TimerQueue) {
        if let Some(token) = self.pending.take() {
            timers.cancel(token);
        }
    }

    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            puzzle_id: self.puzzle_id.clone(),
            instruction: self.instruction.clone(),
            length: self.sequence.len(),
            stage: self.stage,
            showing: self.showing(),
            input: self.input.clone(),
            revealed_sequence: self.sequence_revealed.then(|| self.sequence.clone()),
            message: self.message.clone(),
        }
    }

    fn schedule(&mut self, timers: &mut TimerQueue, frames: u64, step: PuzzleStep) {
        if let Some(stale) = self.pending.take() {
            timers.cancel(stale);
        }
        self.pending = Some(timers.schedule(frames, TimerAction::Puzzle(step)));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use summit_core::types::Rect;

    use super::*;

    fn trigger(length: usize) -> PuzzleTrigger {
        PuzzleTrigger {
            id: "puzzle1".into(),
            rect: Rect::new(0.0, 0.0, 30.0, 30.0),
            instruction: "Repeat the sequence:".into(),
            sequence_length: length,
            reward_text: "The spirits are pleased.".into(),
            energy_reward: Some(30.0),
            completed: true,
        }
    }

    /// Pump the queue until the session stops scheduling or closes.
    fn pump(session: &mut PuzzleSession, config: &GameConfig, timers: &mut TimerQueue) -> u64 {
        let mut frames = 0;
        while !timers.is_empty() {
            frames += 1;
            for (token, action) in timers.advance() {
                if let TimerAction::Puzzle(step) = action {
                    if session.owns(token)
                        && session.on_timer(step, config, timers) == TimerOutcome::Close
                    {
                        return frames;
                    }
                }
            }
        }
        frames
    }

    #[test]
    fn sequence_uses_only_allowed_directions() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let allowed = [Direction::Up, Direction::Left, Direction::Right];
        let sequence = generate_sequence(&mut rng, 200, &allowed);
        assert_eq!(sequence.len(), 200);
        assert!(sequence.iter().all(|d| allowed.contains(d)));
        // With 200 draws every allowed direction shows up.
        for d in allowed {
            assert!(sequence.contains(&d));
        }
    }

    #[test]
    fn reveal_takes_highlight_plus_pause_per_arrow() {
        let config = GameConfig::default();
        let mut timers = TimerQueue::new();
        let sequence = vec![Direction::Up, Direction::Left, Direction::Right];
        let mut session = PuzzleSession::with_sequence(&trigger(3), sequence, &config, &mut timers);

        assert_eq!(session.showing(), Some(Direction::Up));
        assert!(!session.accepts_input());
        assert!(session.submit(Direction::Up, &config, &mut timers).is_none());
        assert!(session.input.is_empty());

        let frames = pump(&mut session, &config, &mut timers);
        assert_eq!(frames, 3 * (42 + 18));
        assert!(session.accepts_input());
        assert_eq!(session.message, "Your turn!");
    }

    #[test]
    fn exact_sequence_succeeds_after_length_inputs() {
        let config = GameConfig::default();
        let mut timers = TimerQueue::new();
        let sequence = vec![Direction::Left, Direction::Left, Direction::Up];
        let mut session =
            PuzzleSession::with_sequence(&trigger(3), sequence.clone(), &config, &mut timers);
        pump(&mut session, &config, &mut timers);

        assert_eq!(session.submit(sequence[0], &config, &mut timers), None);
        assert_eq!(session.submit(sequence[1], &config, &mut timers), None);
        assert_eq!(
            session.submit(sequence[2], &config, &mut timers),
            Some(PuzzleOutcome::Success)
        );
        assert!(session.message.starts_with("Correct!"));

        let frames = pump(&mut session, &config, &mut timers);
        assert_eq!(frames, 120);
    }

    #[test]
    fn wrong_answer_fails_and_ignores_the_rest() {
        let config = GameConfig::default();
        let mut timers = TimerQueue::new();
        let sequence = vec![Direction::Up, Direction::Right, Direction::Left];
        let mut session = PuzzleSession::with_sequence(&trigger(3), sequence, &config, &mut timers);
        pump(&mut session, &config, &mut timers);

        assert_eq!(session.submit(Direction::Up, &config, &mut timers), None);
        assert_eq!(
            session.submit(Direction::Left, &config, &mut timers),
            Some(PuzzleOutcome::Failure)
        );
        assert!(session.input.is_empty());
        assert_eq!(
            session.view().revealed_sequence,
            Some(vec![Direction::Up, Direction::Right, Direction::Left])
        );

        // Later answers, even correct ones, change nothing.
        assert_eq!(session.submit(Direction::Left, &config, &mut timers), None);
        assert_eq!(
            session.stage,
            PuzzleStage::Resolved {
                outcome: PuzzleOutcome::Failure
            }
        );

        let frames = pump(&mut session, &config, &mut timers);
        assert_eq!(frames, 120 + 90);
        assert_eq!(session.message, "Puzzle failed. Moving on.");
    }

    #[test]
    fn teardown_cancels_pending_step() {
        let config = GameConfig::default();
        let mut timers = TimerQueue::new();
        let mut session = PuzzleSession::with_sequence(
            &trigger(2),
            vec![Direction::Up, Direction::Up],
            &config,
            &mut timers,
        );
        assert_eq!(timers.len(), 1);
        session.teardown(&mut timers);
        assert!(timers.is_empty());
    }
}
