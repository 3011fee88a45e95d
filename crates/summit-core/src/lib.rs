//! Core types and definitions for the SUMMIT climbing game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! world elements, commands, state snapshots, events, configuration,
//! and constants. It has no dependency on any runtime or renderer.

pub mod commands;
pub mod config;
pub mod constants;
pub mod elements;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod state;
pub mod types;
