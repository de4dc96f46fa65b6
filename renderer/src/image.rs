//! Image resources and the shared asset registry
//!
//! Pixels are 0xAARRGGBB words; an alpha byte of zero marks a fully
//! transparent pixel. Decoding image files is the front-end's job, the
//! registry only guarantees each distinct texture is materialized once.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// An immutable pixel rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A single-color image, handy for placeholders and tests.
    pub fn solid(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![color; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Nearest-neighbour resample to the given pixel size.
    ///
    /// Both dimensions must be non-zero.
    pub fn resized(&self, width: u32, height: u32) -> Image {
        debug_assert!(width > 0 && height > 0);
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let src_y = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let src_x = (x as u64 * self.width as u64 / width as u64) as u32;
                pixels.push(self.pixel(src_x, src_y));
            }
        }
        Image {
            width,
            height,
            pixels,
        }
    }
}

/// Path-keyed texture table owned by the frame orchestrator.
///
/// Objects hold non-owning `Arc` handles into this registry, so placing the
/// same texture a hundred times still decodes it once.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    images: BTreeMap<String, Arc<Image>>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Arc<Image>> {
        self.images.get(path).cloned()
    }

    /// Fetch the image for `path`, invoking `load` only on the first request.
    pub fn get_or_load<F>(&mut self, path: &str, load: F) -> Arc<Image>
    where
        F: FnOnce() -> Image,
    {
        self.images
            .entry(String::from(path))
            .or_insert_with(|| Arc::new(load()))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
