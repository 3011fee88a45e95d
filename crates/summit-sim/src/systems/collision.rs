//! Ledge landing, the absolute floor, and horizontal bounds.

use summit_core::config::GameConfig;
use summit_core::elements::{Ledge, WorldElement};
use summit_core::events::GameEvent;

use crate::world::{Player, WorldState};

/// Resolve collisions after movement.
///
/// `was_grounded` is the grounded flag from before movement ran; a
/// `Landed` event is emitted only on the airborne-to-grounded edge.
pub fn run(
    world: &mut WorldState,
    config: &GameConfig,
    was_grounded: bool,
    events: &mut Vec<GameEvent>,
) {
    let landing = find_landing(&world.player, &world.elements, config.landing_tolerance);

    let player = &mut world.player;
    if let Some(top) = landing {
        settle(player, top - player.rect.size.y);
    }

    let floor = config.floor_y();
    if player.y() > floor {
        settle(player, floor);
    }

    let max_x = config.canvas_width - player.rect.size.x;
    player.rect.pos.x = player.rect.pos.x.clamp(0.0, max_x.max(0.0));

    if player.on_ground && !was_grounded {
        events.push(GameEvent::Landed { y: player.y() });
    }
}

/// Top of the first ledge the player lands on, in level order.
fn find_landing(player: &Player, elements: &[WorldElement], tolerance: f64) -> Option<f64> {
    elements.iter().find_map(|element| match element {
        WorldElement::Ledge(ledge) if lands_on(player, ledge, tolerance) => Some(ledge.rect.top()),
        _ => None,
    })
}

/// Whether the player lands on `ledge` this frame.
///
/// The player must be falling (or resting), horizontally over the ledge, and
/// have feet at or below its top but no deeper than this frame's fall plus
/// the tolerance. A rope ledge is not a surface without the rope.
pub fn lands_on(player: &Player, ledge: &Ledge, tolerance: f64) -> bool {
    if ledge.requires_rope && !player.has_rope {
        return false;
    }
    let feet = player.rect.bottom();
    let top = ledge.rect.top();
    player.dy >= 0.0
        && feet >= top
        && feet <= top + player.dy + tolerance
        && player.rect.overlaps_horizontally(&ledge.rect)
}

fn settle(player: &mut Player, y: f64) {
    player.rect.pos.y = y;
    player.dy = 0.0;
    player.on_ground = true;
}

#[cfg(test)]
mod tests {
    use summit_core::types::Rect;

    use super::*;

    fn player_at(x: f64, y: f64, dy: f64) -> Player {
        let mut player = Player::spawn(&GameConfig::default());
        player.rect.pos.x = x;
        player.rect.pos.y = y;
        player.dy = dy;
        player.on_ground = false;
        player
    }

    fn ledge(requires_rope: bool) -> Ledge {
        Ledge {
            rect: Rect::new(100.0, 300.0, 150.0, 20.0),
            requires_rope,
        }
    }

    #[test]
    fn lands_inside_tolerance() {
        // Feet at 305: 5 below the top, falling at 4.
        let player = player_at(120.0, 257.0, 4.0);
        assert!(lands_on(&player, &ledge(false), 10.0));
    }

    #[test]
    fn rising_player_passes_through() {
        let player = player_at(120.0, 257.0, -4.0);
        assert!(!lands_on(&player, &ledge(false), 10.0));
    }

    #[test]
    fn too_deep_is_not_a_landing() {
        // Feet 20 below the top with dy 4 and tolerance 10.
        let player = player_at(120.0, 272.0, 4.0);
        assert!(!lands_on(&player, &ledge(false), 10.0));
    }

    #[test]
    fn must_be_over_the_ledge() {
        let player = player_at(60.0, 257.0, 4.0);
        assert!(!lands_on(&player, &ledge(false), 10.0));
        // Edge-touching is not over it either.
        let player = player_at(68.0, 257.0, 4.0);
        assert!(!lands_on(&player, &ledge(false), 10.0));
    }

    #[test]
    fn rope_ledge_needs_rope() {
        let mut player = player_at(120.0, 257.0, 4.0);
        assert!(!lands_on(&player, &ledge(true), 10.0));
        player.has_rope = true;
        assert!(lands_on(&player, &ledge(true), 10.0));
    }
}
