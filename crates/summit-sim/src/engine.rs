//! Climb engine: the core of the game.
//!
//! `ClimbEngine` owns the world, the open dialogue/puzzle session and the
//! timer queue, processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use summit_core::commands::PlayerCommand;
use summit_core::config::GameConfig;
use summit_core::elements::WorldElement;
use summit_core::enums::{GamePhase, PuzzleOutcome};
use summit_core::events::GameEvent;
use summit_core::level::Level;
use summit_core::state::GameStateSnapshot;
use summit_core::types::SessionClock;

use crate::systems;
use crate::systems::dialogue::{DialogueSession, DialogueStep};
use crate::systems::interaction::Interaction;
use crate::systems::puzzle::{PuzzleSession, TimerOutcome};
use crate::systems::random_events::ActiveEvent;
use crate::timers::{PuzzleStep, TimerAction, TimerQueue, TimerToken};
use crate::world::{Player, WorldState};

/// The climb engine. Owns the world and all session state.
pub struct ClimbEngine {
    config: GameConfig,
    world: WorldState,
    phase: GamePhase,
    clock: SessionClock,
    rng: ChaCha8Rng,
    timers: TimerQueue,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    dialogue: Option<DialogueSession>,
    puzzle: Option<PuzzleSession>,
}

impl ClimbEngine {
    /// Create an engine on the start screen. `config` and `level` are
    /// expected to be validated already.
    pub fn new(config: GameConfig, level: Level) -> Self {
        Self {
            world: WorldState::new(&config, level),
            phase: GamePhase::default(),
            clock: SessionClock::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            timers: TimerQueue::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            dialogue: None,
            puzzle: None,
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
        }
        if self.phase.is_live() {
            self.fire_timers();
            self.clock
                .advance(self.phase == GamePhase::Playing, self.config.tick_rate);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            self.phase,
            self.dialogue.as_ref(),
            self.puzzle.as_ref(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn clock(&self) -> SessionClock {
        self.clock
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn camera_y(&self) -> f64 {
        self.world.camera_y
    }

    pub fn elements(&self) -> &[WorldElement] {
        &self.world.elements
    }

    pub fn active_event(&self) -> Option<ActiveEvent> {
        self.world.active_event
    }

    pub fn dialogue(&self) -> Option<&DialogueSession> {
        self.dialogue.as_ref()
    }

    pub fn puzzle(&self) -> Option<&PuzzleSession> {
        self.puzzle.as_ref()
    }

    /// Mutable world access (for tests placing the player).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Number of timers still pending (for tests).
    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::StartScreen | GamePhase::Summit) {
                    self.start_session();
                }
            }
            PlayerCommand::ResetGame => {
                tracing::info!(phase = ?self.phase, "game reset");
                self.start_session();
            }
            PlayerCommand::SetInput { input } => {
                self.world.input = input;
            }
            PlayerCommand::AdvanceDialogue => {
                if self.phase == GamePhase::Dialogue {
                    self.advance_dialogue();
                }
            }
            PlayerCommand::PuzzleInput { direction } => {
                if self.phase != GamePhase::Puzzle {
                    return;
                }
                let Some(session) = self.puzzle.as_mut() else {
                    return;
                };
                let Some(outcome) = session.submit(direction, &self.config, &mut self.timers)
                else {
                    return;
                };
                match outcome {
                    PuzzleOutcome::Success => {
                        if let Some(energy) = session.energy_reward {
                            self.world.player.add_energy(energy);
                        }
                    }
                    PuzzleOutcome::Failure => {
                        self.clock.add_penalty(self.config.puzzle_time_penalty_secs);
                    }
                }
                tracing::debug!(puzzle = %session.puzzle_id, ?outcome, "puzzle resolved");
                self.events.push(GameEvent::PuzzleResolved {
                    puzzle_id: session.puzzle_id.clone(),
                    outcome,
                });
            }
        }
    }

    /// Reset the world and begin climbing. Every pending timer is dropped so
    /// nothing from the previous session can fire into this one.
    fn start_session(&mut self) {
        self.world.reset(&self.config);
        self.timers.cancel_all();
        self.dialogue = None;
        self.puzzle = None;
        self.clock = SessionClock::default();
        self.phase = GamePhase::Playing;
        tracing::info!(seed = self.config.seed, "session started");
        self.events.push(GameEvent::SessionStarted {
            seed: self.config.seed,
        });
    }

    /// Run all per-frame systems in order.
    fn run_systems(&mut self) {
        let was_grounded = self.world.player.on_ground;
        systems::movement::run(&mut self.world, &self.config, &mut self.events);
        systems::collision::run(&mut self.world, &self.config, was_grounded, &mut self.events);
        systems::camera::run(&mut self.world, &self.config);

        if let Some(interaction) = systems::interaction::run(&mut self.world) {
            self.begin_interaction(interaction);
        }
        if self.phase != GamePhase::Playing {
            return;
        }

        if systems::interaction::at_summit(&self.world) {
            self.reach_summit();
            return;
        }

        systems::random_events::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.timers,
            self.clock.tick,
            &mut self.events,
        );
    }

    /// Open the dialogue or puzzle the player just touched.
    fn begin_interaction(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Npc(index) => {
                let Some(WorldElement::Npc(npc)) = self.world.elements.get(index) else {
                    return;
                };
                tracing::debug!(npc = %npc.id, "dialogue started");
                self.events.push(GameEvent::DialogueStarted {
                    npc_id: npc.id.clone(),
                });
                self.dialogue = Some(DialogueSession::start(npc));
                self.phase = GamePhase::Dialogue;
            }
            Interaction::Puzzle(index) => {
                let Some(WorldElement::PuzzleTrigger(trigger)) = self.world.elements.get(index)
                else {
                    return;
                };
                let session =
                    PuzzleSession::start(trigger, &mut self.rng, &self.config, &mut self.timers);
                tracing::debug!(
                    puzzle = %session.puzzle_id,
                    sequence = ?session.sequence,
                    "puzzle started"
                );
                self.events.push(GameEvent::PuzzleStarted {
                    puzzle_id: session.puzzle_id.clone(),
                    length: session.sequence.len(),
                });
                self.puzzle = Some(session);
                self.phase = GamePhase::Puzzle;
            }
        }
    }

    fn advance_dialogue(&mut self) {
        let Some(session) = self.dialogue.as_mut() else {
            return;
        };
        let DialogueStep::Finished { item } = session.advance() else {
            return;
        };

        let npc_id = session.npc_id.clone();
        self.dialogue = None;
        self.phase = GamePhase::Playing;

        if let Some(item) = item {
            self.world.player.receive(item, &self.config);
            self.world.notice.post_timed(
                &mut self.timers,
                format!("Received {}!", item.as_str()),
                self.clock.tick,
                self.config.frames(self.config.notice_ms),
            );
            self.events.push(GameEvent::ItemReceived { item });
        }
        tracing::debug!(npc = %npc_id, ?item, "dialogue ended");
        self.events.push(GameEvent::DialogueEnded { npc_id });
    }

    /// Enter the terminal summit phase.
    fn reach_summit(&mut self) {
        self.timers.cancel_all();
        self.world.notice.reset();
        self.phase = GamePhase::Summit;
        tracing::info!(time = %self.clock.formatted(), "summit reached");
        self.events.push(GameEvent::SummitReached {
            elapsed_secs: self.clock.elapsed_secs,
        });
    }

    /// Fire every timer that came due this frame.
    fn fire_timers(&mut self) {
        for (token, action) in self.timers.advance() {
            tracing::trace!(?token, ?action, "timer fired");
            match action {
                TimerAction::ClearNotice => self.world.notice.expire(token),
                TimerAction::Puzzle(step) => self.on_puzzle_timer(token, step),
            }
        }
    }

    fn on_puzzle_timer(&mut self, token: TimerToken, step: PuzzleStep) {
        let Some(session) = self.puzzle.as_mut() else {
            return;
        };
        if !session.owns(token) {
            return;
        }
        if session.on_timer(step, &self.config, &mut self.timers) == TimerOutcome::Close {
            self.close_puzzle();
        }
    }

    /// Tear down the puzzle overlay and resume climbing.
    fn close_puzzle(&mut self) {
        let Some(mut session) = self.puzzle.take() else {
            return;
        };
        session.teardown(&mut self.timers);
        self.phase = GamePhase::Playing;
        tracing::debug!(puzzle = %session.puzzle_id, "puzzle closed");
        self.events.push(GameEvent::PuzzleClosed {
            puzzle_id: session.puzzle_id,
        });
    }
}
