//! Billboarded world sprites
//!
//! A billboard is a flat sprite that always faces the camera, scaled by
//! distance but never rotated in 3D. Its projected state is derived once
//! per frame and consumed by drawing and hit-testing.

use alloc::sync::Arc;
use glam::Vec3;

use crate::image::Image;
use crate::math::{self, CameraPose, Viewport};
use crate::surface::Surface;

/// Perspective scale clamp band applied before image resampling.
pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;

/// Below this scale an object is too far away to hit.
pub const MIN_HIT_SCALE: f32 = 0.25;

/// Reticle tolerance in pixels: `BASE + SPREAD * scale`, so nearby objects
/// get a more forgiving hit box than distant ones.
pub const TOLERANCE_BASE: f32 = 35.0;
pub const TOLERANCE_SPREAD: f32 = 90.0;

/// A static world object rendered as a billboard.
#[derive(Debug, Clone)]
pub struct Billboard {
    /// World position, immutable after placement.
    pub position: Vec3,
    /// Whether a reticle hit removes this object.
    pub destroyable: bool,

    // Projected state, stale until `update_projection` has run this frame.
    pub screen_x: f32,
    pub screen_y: f32,
    pub scale: f32,
    pub visible: bool,

    texture: Arc<Image>,
    cached_size: (u32, u32),
    cached: Option<Arc<Image>>,
}

impl Billboard {
    pub fn new(texture: Arc<Image>, position: Vec3, destroyable: bool) -> Self {
        Self {
            position,
            destroyable,
            screen_x: 0.0,
            screen_y: 0.0,
            scale: 1.0,
            visible: false,
            texture,
            cached_size: (0, 0),
            cached: None,
        }
    }

    /// The source texture this billboard was placed with.
    pub fn texture(&self) -> &Arc<Image> {
        &self.texture
    }

    /// The pre-scaled image for the last projected size, if any.
    pub fn scaled_image(&self) -> Option<&Arc<Image>> {
        self.cached.as_ref()
    }

    /// Project the billboard for the given camera pose.
    ///
    /// Re-renders the scaled image only when the target pixel size actually
    /// changed since the last call; an unchanged pose reuses the cache.
    pub fn update_projection(&mut self, cam: &CameraPose, vp: &Viewport) {
        let Some(proj) = math::project(self.position, cam, vp) else {
            self.visible = false;
            return;
        };
        if proj.scale <= 0.0 {
            self.visible = false;
            return;
        }

        // Extended frustum pre-cull: cheap reject before any image work.
        let w = vp.width as f32;
        if proj.screen_x < -w || proj.screen_x > 2.0 * w {
            self.visible = false;
            return;
        }

        self.screen_x = proj.screen_x;
        self.screen_y = proj.screen_y;
        self.scale = proj.scale;

        let clamped = proj.scale.clamp(MIN_SCALE, MAX_SCALE);
        let new_w = (self.texture.width() as f32 * clamped) as u32;
        let new_h = (self.texture.height() as f32 * clamped) as u32;
        if new_w == 0 || new_h == 0 {
            self.visible = false;
            return;
        }
        self.visible = true;

        if self.cached_size != (new_w, new_h) {
            self.cached_size = (new_w, new_h);
            self.cached = Some(Arc::new(self.texture.resized(new_w, new_h)));
        }
    }

    /// Squared distance to the camera, for back-to-front ordering.
    pub fn distance_squared(&self, cam_pos: Vec3) -> f32 {
        (self.position - cam_pos).length_squared()
    }

    /// Whether the aim reticle at `(center_x, center_y)` would hit this
    /// object. The tolerance band shrinks with distance.
    pub fn in_aim_reticle(&self, center_x: f32, center_y: f32) -> bool {
        if !self.visible || self.scale < MIN_HIT_SCALE {
            return false;
        }

        let height = self
            .cached
            .as_ref()
            .map(|i| i.height())
            .unwrap_or(self.texture.height()) as f32;
        let tolerance = TOLERANCE_BASE + TOLERANCE_SPREAD * self.scale;

        let dx = (self.screen_x - center_x).abs();
        let dy = (self.screen_y - height / 2.0 - center_y).abs();
        dx < tolerance && dy < tolerance
    }

    /// Blit the billboard, bottom-anchored to the ground plane.
    pub fn draw(&self, surface: &mut dyn Surface, ground_offset: f32) {
        if !self.visible {
            return;
        }
        let w = surface.width() as f32;
        if self.screen_x < -(w / 2.0) || self.screen_x > 1.5 * w {
            return;
        }
        let Some(image) = self.cached.as_ref() else {
            return;
        };

        let img_w = image.width() as f32;
        let img_h = image.height() as f32;

        let draw_x = self.screen_x - img_w / 2.0;

        // Taller source images need a larger anchor correction to stay
        // planted on the ground instead of floating.
        let factor = if self.texture.height() > 400 { 0.4 } else { 0.25 };
        let ground_anchor = 40.0 + img_h * factor;
        let draw_y = self.screen_y - img_h + ground_anchor + ground_offset;

        surface.blit(image, draw_x as i32, draw_y as i32);
    }
}
