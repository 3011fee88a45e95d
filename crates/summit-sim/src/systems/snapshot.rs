//! Snapshot system: reads the world and the open sessions and builds a
//! complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use summit_core::enums::GamePhase;
use summit_core::events::GameEvent;
use summit_core::state::*;
use summit_core::types::SessionClock;

use crate::systems::dialogue::DialogueSession;
use crate::systems::puzzle::PuzzleSession;
use crate::world::{Player, WorldState};

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(
    world: &WorldState,
    clock: &SessionClock,
    phase: GamePhase,
    dialogue: Option<&DialogueSession>,
    puzzle: Option<&PuzzleSession>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        clock: *clock,
        formatted_time: clock.formatted(),
        phase,
        player: build_player(&world.player),
        camera_y: world.camera_y,
        elements: world.elements.clone(),
        active_event: world.active_event.map(|active| ActiveEventView {
            kind: active.kind,
            remaining_frames: active.remaining_frames,
        }),
        notice: world.notice.current().cloned(),
        dialogue: dialogue.map(DialogueSession::view),
        puzzle: puzzle.map(PuzzleSession::view),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        x: player.x(),
        y: player.y(),
        width: player.rect.size.x,
        height: player.rect.size.y,
        dy: player.dy,
        on_ground: player.on_ground,
        has_rope: player.has_rope,
        energy: player.energy,
        climb_multiplier: player.climb_multiplier,
    }
}
