//! Unpaced scripted runs, for smoke tests and the `simulate` subcommand.

use summit_core::commands::PlayerCommand;
use summit_core::config::GameConfig;
use summit_core::level::Level;
use summit_core::state::GameStateSnapshot;
use summit_core::types::InputState;
use summit_sim::ClimbEngine;

/// Horizontal input held for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Walk {
    Left,
    Right,
    #[default]
    None,
}

/// A trivial input script: walk one way, tap jump every `jump_every` frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Script {
    pub walk: Walk,
    /// Zero never jumps.
    pub jump_every: u64,
}

impl Script {
    /// Held keys for `frame`. A jump is a single-frame tap so every tap is a
    /// fresh press.
    pub fn input(&self, frame: u64) -> InputState {
        InputState {
            left: self.walk == Walk::Left,
            right: self.walk == Walk::Right,
            up: false,
            jump: self.jump_every > 0 && frame % self.jump_every == 0,
        }
    }
}

/// Start a session and run `ticks` frames as fast as possible. Returns the
/// last snapshot, or `None` when `ticks` is zero.
pub fn run(
    config: GameConfig,
    level: Level,
    ticks: u64,
    script: Script,
) -> Option<GameStateSnapshot> {
    let mut engine = ClimbEngine::new(config, level);
    engine.queue_command(PlayerCommand::StartGame);

    let mut last = None;
    for frame in 0..ticks {
        engine.queue_command(PlayerCommand::SetInput {
            input: script.input(frame),
        });
        let snapshot = engine.tick();
        for event in &snapshot.events {
            tracing::debug!(tick = snapshot.clock.tick, ?event, "event");
        }
        last = Some(snapshot);
    }
    last
}

#[cfg(test)]
mod tests {
    use summit_core::enums::GamePhase;
    use summit_sim::world_setup::default_level;

    use super::*;

    #[test]
    fn test_zero_ticks_yields_nothing() {
        let config = GameConfig::default();
        let level = default_level(&config);
        assert!(run(config, level, 0, Script::default()).is_none());
    }

    #[test]
    fn test_walk_right_reaches_the_wall() {
        let config = GameConfig {
            event_chance: 0.0,
            ..Default::default()
        };
        let level = default_level(&config);
        let snap = run(
            config,
            level,
            400,
            Script {
                walk: Walk::Right,
                jump_every: 0,
            },
        )
        .unwrap();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.player.x, 800.0 - 32.0);
        assert_eq!(snap.player.y, 502.0);
    }

    #[test]
    fn test_jump_taps_are_single_frames() {
        let script = Script {
            walk: Walk::None,
            jump_every: 30,
        };
        assert!(script.input(0).jump);
        assert!(!script.input(1).jump);
        assert!(script.input(60).jump);
        assert!(!script.input(0).left && !script.input(0).right);
    }
}
