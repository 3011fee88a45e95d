//! SUMMIT host: the paced game loop and headless runners behind the
//! `summit` binary.

pub mod game_loop;
pub mod headless;
pub mod state;

pub use summit_core as core;
