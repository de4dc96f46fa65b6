//! Draw surface abstraction
//!
//! The presentation seam between the engine and whatever actually owns the
//! screen. The engine only needs to blit images at pixel positions.

use alloc::vec::Vec;

use crate::image::Image;

/// A destination the renderer can blit into.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy `image` with its top-left corner at `(x, y)`, clipping to the
    /// surface and skipping fully transparent pixels.
    fn blit(&mut self, image: &Image, x: i32, y: i32);
}

/// Plain in-memory pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![0; (width * height) as usize],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn blit(&mut self, image: &Image, x: i32, y: i32) {
        for sy in 0..image.height() as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..image.width() as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let px = image.pixel(sx as u32, sy as u32);
                if px & 0xFF00_0000 == 0 {
                    continue;
                }
                self.pixels[(dy as u32 * self.width + dx as u32) as usize] = px;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_clips_at_edges() {
        let mut fb = Framebuffer::new(4, 4);
        let img = Image::solid(3, 3, 0xFFAA0000);
        fb.blit(&img, -1, -1);
        assert_eq!(fb.pixel(0, 0), 0xFFAA0000);
        assert_eq!(fb.pixel(1, 1), 0xFFAA0000);
        assert_eq!(fb.pixel(2, 2), 0);
        assert_eq!(fb.pixel(3, 3), 0);
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut fb = Framebuffer::new(2, 1);
        fb.clear(0xFF112233);
        let img = Image::new(2, 1, alloc::vec![0x00000000, 0xFF445566]);
        fb.blit(&img, 0, 0);
        assert_eq!(fb.pixel(0, 0), 0xFF112233);
        assert_eq!(fb.pixel(1, 0), 0xFF445566);
    }
}
