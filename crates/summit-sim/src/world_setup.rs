//! Factories for the built-in level.
//!
//! The default climb: ground, a guide npc handing out the rope, a memory
//! puzzle, a rope-only ledge bridging a gap too tall to jump, and the summit.

use summit_core::config::GameConfig;
use summit_core::elements::*;
use summit_core::enums::ItemKind;
use summit_core::level::Level;
use summit_core::types::Rect;

/// Ledge thickness used by the built-in layout.
const LEDGE_HEIGHT: f64 = 20.0;

/// Build the default level. Ground geometry follows the configured canvas.
pub fn default_level(config: &GameConfig) -> Level {
    let mut elements = vec![WorldElement::Ledge(Ledge {
        rect: Rect::new(
            0.0,
            config.ground_top(),
            config.canvas_width,
            config.ground_height,
        ),
        requires_rope: false,
    })];

    elements.extend([
        ledge(100.0, 450.0, 150.0),
        ledge(300.0, 350.0, 200.0),
        ledge(50.0, 240.0, 180.0),
        ledge(350.0, 140.0, 150.0),
        guide_npc(),
        ledge(100.0, 40.0, 200.0),
        spirit_puzzle(),
        ledge(400.0, -60.0, 250.0),
        rope_ledge(200.0, -160.0, 150.0),
        ledge(500.0, -260.0, 200.0),
        ledge(100.0, -360.0, 300.0),
        ledge(300.0, -460.0, 200.0),
        ledge(450.0, -560.0, 200.0),
        ledge(250.0, -660.0, 200.0),
        ledge(350.0, -760.0, 150.0),
        ledge(300.0, -860.0, 200.0),
        WorldElement::Summit(Summit {
            rect: Rect::new(375.0, -930.0, 50.0, 70.0),
        }),
    ]);

    Level {
        name: "default".into(),
        elements,
    }
}

fn ledge(x: f64, y: f64, width: f64) -> WorldElement {
    WorldElement::Ledge(Ledge {
        rect: Rect::new(x, y, width, LEDGE_HEIGHT),
        requires_rope: false,
    })
}

/// A ledge that only holds a climber carrying the rope.
fn rope_ledge(x: f64, y: f64, width: f64) -> WorldElement {
    WorldElement::Ledge(Ledge {
        rect: Rect::new(x, y, width, LEDGE_HEIGHT),
        requires_rope: true,
    })
}

/// Guide standing on the ledge at y = 140.
fn guide_npc() -> WorldElement {
    WorldElement::Npc(Npc {
        id: "guide1".into(),
        rect: Rect::new(400.0, 92.0, 32.0, 48.0),
        lines: vec![
            "Welcome, climber! The path ahead is tricky.".into(),
            "Take this rope. It might help you with a wide gap later!".into(),
            "Be wary of the changing weather.".into(),
        ],
        item: Some(ItemKind::Rope),
        interacted: false,
    })
}

/// Memory puzzle floating over the ledge at y = 40.
fn spirit_puzzle() -> WorldElement {
    WorldElement::PuzzleTrigger(PuzzleTrigger {
        id: "puzzle1".into(),
        rect: Rect::new(150.0, 10.0, 30.0, 30.0),
        instruction: "The ancient spirits demand a tribute! Repeat the sequence:".into(),
        sequence_length: 3,
        reward_text: "The spirits are pleased. You feel a surge of energy!".into(),
        energy_reward: Some(30.0),
        completed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_valid() {
        let level = default_level(&GameConfig::default());
        assert!(level.validate().is_ok());
    }

    #[test]
    fn ground_spans_the_canvas() {
        let config = GameConfig::default();
        let level = default_level(&config);
        let WorldElement::Ledge(ground) = &level.elements[0] else {
            panic!("first element should be the ground");
        };
        assert_eq!(ground.rect.top(), 550.0);
        assert_eq!(ground.rect.size.x, config.canvas_width);
    }

    #[test]
    fn every_ledge_gap_is_jumpable() {
        // Apex of a jump from rest: sum of upward steps until dy turns
        // non-negative.
        let config = GameConfig::default();
        let mut dy = -config.jump_strength;
        let mut rise = 0.0;
        while dy < 0.0 {
            rise -= dy;
            dy += config.gravity;
        }

        let tops: Vec<f64> = default_level(&config)
            .elements
            .iter()
            .filter_map(|el| match el {
                WorldElement::Ledge(ledge) => Some(ledge.rect.top()),
                _ => None,
            })
            .collect();
        for pair in tops.windows(2) {
            assert!(pair[0] - pair[1] < rise, "gap {pair:?} too tall");
        }
    }

    #[test]
    fn summit_sits_on_the_top_ledge() {
        let level = default_level(&GameConfig::default());
        let summit = level
            .elements
            .iter()
            .find_map(|el| match el {
                WorldElement::Summit(summit) => Some(summit.rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(summit.bottom(), -860.0);
    }
}
