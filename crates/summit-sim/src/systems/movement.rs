//! Player movement: horizontal walking, jump impulse, gravity integration.

use summit_core::config::GameConfig;
use summit_core::events::GameEvent;

use crate::world::WorldState;

/// Move the player for one frame.
///
/// Order: walk, `dy += gravity`, jump (rising edge of the jump key while
/// grounded overrides `dy`), then `y += dy`. A jump frame therefore ends
/// with `dy == -jump_strength`. Grounded is cleared here and re-established
/// by the collision pass.
pub fn run(world: &mut WorldState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let input = world.input;
    let player = &mut world.player;

    let step = player.speed * player.climb_multiplier;
    if input.left {
        player.rect.pos.x -= step;
    }
    if input.right {
        player.rect.pos.x += step;
    }

    player.dy += config.gravity;

    let jump_pressed = input.jump && !world.jump_was_held;
    world.jump_was_held = input.jump;
    if jump_pressed && player.on_ground {
        player.dy = -player.jump_strength;
        events.push(GameEvent::Jumped {
            velocity: player.dy,
        });
    }

    player.rect.pos.y += player.dy;
    player.on_ground = false;
}

#[cfg(test)]
mod tests {
    use summit_core::level::Level;
    use summit_core::types::InputState;

    use super::*;

    fn world() -> (WorldState, GameConfig) {
        let config = GameConfig::default();
        (WorldState::new(&config, Level::default()), config)
    }

    #[test]
    fn walking_uses_climb_multiplier() {
        let (mut world, config) = world();
        world.player.climb_multiplier = 0.6;
        world.input = InputState {
            right: true,
            ..Default::default()
        };
        let start_x = world.player.x();
        run(&mut world, &config, &mut Vec::new());
        assert!((world.player.x() - (start_x + 1.8)).abs() < 1e-9);
    }

    #[test]
    fn opposite_keys_cancel() {
        let (mut world, config) = world();
        world.input = InputState {
            left: true,
            right: true,
            ..Default::default()
        };
        let start_x = world.player.x();
        run(&mut world, &config, &mut Vec::new());
        assert_eq!(world.player.x(), start_x);
    }

    #[test]
    fn held_jump_fires_once() {
        let (mut world, config) = world();
        world.input = InputState {
            jump: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        run(&mut world, &config, &mut events);
        assert_eq!(events, vec![GameEvent::Jumped { velocity: -10.0 }]);

        // Pretend we landed while the key is still held: no second jump.
        world.player.on_ground = true;
        world.player.dy = 0.0;
        events.clear();
        run(&mut world, &config, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn jump_frame_keeps_full_impulse() {
        let (mut world, config) = world();
        world.input = InputState {
            jump: true,
            ..Default::default()
        };
        let start_y = world.player.y();
        run(&mut world, &config, &mut Vec::new());
        assert_eq!(world.player.dy, -10.0);
        assert_eq!(world.player.y(), start_y - 10.0);

        run(&mut world, &config, &mut Vec::new());
        assert!((world.player.dy + 9.6).abs() < 1e-9);
        assert!((world.player.y() - (start_y - 19.6)).abs() < 1e-9);
    }

    #[test]
    fn up_key_does_not_jump() {
        let (mut world, config) = world();
        world.input = InputState {
            up: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        run(&mut world, &config, &mut events);
        assert!(events.is_empty());
        assert!(world.player.dy > 0.0);
    }
}
