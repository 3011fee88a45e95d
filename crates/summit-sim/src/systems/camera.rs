//! Camera follow. The view only ever scrolls up, and never past the summit.

use summit_core::config::GameConfig;

use crate::world::WorldState;

/// Pull the camera up so the player stays at the view anchor.
pub fn run(world: &mut WorldState, config: &GameConfig) {
    world.camera_y = follow(
        world.camera_y,
        world.player.y(),
        config.canvas_height * config.camera_view_anchor,
        config.summit_altitude,
    );
}

/// Next camera offset. Non-increasing in `camera_y`, floored at `summit`.
pub fn follow(camera_y: f64, player_y: f64, anchor: f64, summit: f64) -> f64 {
    let target = player_y - anchor;
    let next = if target < camera_y { target } else { camera_y };
    next.max(summit)
}
