//! Systems that advance the world each frame.
//!
//! Systems are free functions over borrowed state. They do not own state;
//! everything they change lives in `WorldState` or the engine's sessions.

pub mod camera;
pub mod collision;
pub mod dialogue;
pub mod interaction;
pub mod movement;
pub mod puzzle;
pub mod random_events;
pub mod snapshot;
