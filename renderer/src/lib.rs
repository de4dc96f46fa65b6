//! Billboard sprite renderer
//!
//! Projects world-space billboarded sprites onto a 2D screen through a
//! single camera with one horizontal rotational degree of freedom.
//! No meshes and no z-buffer; occlusion comes from the caller drawing
//! objects back to front.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod billboard;
pub mod image;
pub mod math;
pub mod surface;

pub use billboard::Billboard;
pub use image::{AssetRegistry, Image};
pub use math::{CameraPose, Projection, Viewport};
pub use surface::{Framebuffer, Surface};
