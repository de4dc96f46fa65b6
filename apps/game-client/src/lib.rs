//! Game Client
//!
//! Frame orchestrator for the billboard engine: owns the player, camera,
//! inventory, world and asset registry, consumes input events, and
//! enforces the per-frame update order the renderer depends on.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod game_loop;
pub mod world;

pub use game_loop::{ClientConfig, GameClient};
pub use world::{ObjectRecord, World};
