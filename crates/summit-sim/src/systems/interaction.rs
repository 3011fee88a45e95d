//! Touch detection against npcs, puzzle triggers, and the summit.

use summit_core::elements::WorldElement;

use crate::world::WorldState;

/// What the player touched this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Un-interacted npc at this element index. Its flag is already set.
    Npc(usize),
    /// Un-completed puzzle trigger at this element index. Its flag is
    /// already set.
    Puzzle(usize),
}

/// Find the first fresh npc or puzzle trigger the player overlaps and burn
/// its one-shot flag.
pub fn run(world: &mut WorldState) -> Option<Interaction> {
    let player = world.player.rect;
    for (index, element) in world.elements.iter_mut().enumerate() {
        if !player.overlaps(element.rect()) {
            continue;
        }
        match element {
            WorldElement::Npc(npc) if !npc.interacted => {
                npc.interacted = true;
                return Some(Interaction::Npc(index));
            }
            WorldElement::PuzzleTrigger(trigger) if !trigger.completed => {
                trigger.completed = true;
                return Some(Interaction::Puzzle(index));
            }
            WorldElement::Npc(_)
            | WorldElement::PuzzleTrigger(_)
            | WorldElement::Ledge(_)
            | WorldElement::Summit(_) => {}
        }
    }
    None
}

/// Whether the player touches the summit.
pub fn at_summit(world: &WorldState) -> bool {
    world.elements.iter().any(|element| {
        matches!(element, WorldElement::Summit(summit) if world.player.rect.overlaps(&summit.rect))
    })
}
