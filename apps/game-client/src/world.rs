//! World object collection
//!
//! Holds the placed billboards and owns the per-frame projection,
//! depth-sort, draw, hit-scan and collision queries over them.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use glam::Vec3;
use renderer::billboard::Billboard;
use renderer::image::{AssetRegistry, Image};
use renderer::math::{CameraPose, Viewport};
use renderer::surface::Surface;

/// One placement record from a level/map loader.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    pub texture: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub destroyable: bool,
}

#[derive(Debug, Default)]
pub struct World {
    pub objects: Vec<Billboard>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an object, loading its texture through the registry so the
    /// same path is materialized only once.
    pub fn spawn<F>(&mut self, registry: &mut AssetRegistry, record: &ObjectRecord, load: F)
    where
        F: FnOnce() -> Image,
    {
        let texture = registry.get_or_load(&record.texture, load);
        self.objects.push(Billboard::new(
            texture,
            Vec3::new(record.x, record.y, record.z),
            record.destroyable,
        ));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn update_projections(&mut self, cam: &CameraPose, vp: &Viewport) {
        for object in &mut self.objects {
            object.update_projection(cam, vp);
        }
    }

    /// Order objects farthest-first so nearer sprites occlude. Squared
    /// distance keeps the comparator sqrt-free.
    pub fn sort_back_to_front(&mut self, cam_pos: Vec3) {
        self.objects.sort_by(|a, b| {
            b.distance_squared(cam_pos)
                .partial_cmp(&a.distance_squared(cam_pos))
                .unwrap_or(Ordering::Equal)
        });
    }

    /// Draw in storage order; callers sort back-to-front first.
    pub fn draw(&self, surface: &mut dyn Surface, ground_offset: f32) {
        for object in &self.objects {
            object.draw(surface, ground_offset);
        }
    }

    /// Remove the first destroyable object under the reticle and stop
    /// scanning; one removal per shot keeps the collection stable while
    /// it is iterated.
    pub fn hit_scan(&mut self, center_x: f32, center_y: f32) -> bool {
        let hit = self
            .objects
            .iter()
            .position(|o| o.destroyable && o.in_aim_reticle(center_x, center_y));
        match hit {
            Some(index) => {
                let object = self.objects.remove(index);
                log::debug!(
                    "destroyed object at ({}, {})",
                    object.position.x,
                    object.position.z
                );
                true
            }
            None => false,
        }
    }

    /// Whether the XZ point sits within `radius` of any placed object.
    /// Movement resolution rejects blocked axes one at a time.
    pub fn blocks(&self, x: f32, z: f32, radius: f32) -> bool {
        self.objects.iter().any(|o| {
            let dx = o.position.x - x;
            let dz = o.position.z - z;
            dx * dx + dz * dz < radius * radius
        })
    }
}
