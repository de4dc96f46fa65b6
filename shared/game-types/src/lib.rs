//! Game Types
//!
//! Pure simulation types for the billboard engine: player kinematics, the
//! camera's jump/crouch/head-bob state machines, weapons and the inventory.
//! No OS, windowing or rendering dependencies - `no_std` compatible.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod audio;
pub mod camera;
pub mod input;
pub mod inventory;
pub mod player;
pub mod tuning;
pub mod weapon;

pub use audio::AudioCue;
pub use camera::{Camera, JumpState};
pub use input::{InputEvent, Key};
pub use inventory::{Inventory, SwitchAnimation};
pub use player::Player;
pub use weapon::{GunState, Weapon, WeaponKind};
