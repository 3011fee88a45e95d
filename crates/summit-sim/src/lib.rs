//! Headless climb engine for SUMMIT.
//!
//! Owns the world state, runs systems at a fixed frame rate, and produces
//! GameStateSnapshots for whatever host draws them.

pub mod engine;
pub mod notice;
pub mod systems;
pub mod timers;
pub mod world;
pub mod world_setup;

pub use engine::ClimbEngine;
pub use summit_core as core;
