//! RGBA pixel buffer backing a canvas 2D context.
//!
//! Rows are padded to a 64-byte stride so row fills stay on aligned chunks.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Pixel buffer with a padded stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// RGBA pixels in row-major order, `stride` bytes per row.
    pixels: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    /// Create a transparent framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use histogram_widget::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(200, 150).unwrap();
    /// assert_eq!(fb.width(), 200);
    /// assert_eq!(fb.height(), 150);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row width in bytes, including padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw pixel data, including stride padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// A row of pixels without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.width, self.height, color);
    }

    /// Fill a rectangle, replacing existing pixels.
    ///
    /// Coordinates are clamped to the buffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let Some((x1, y1, x2, y2)) = self.clip(x, y, w, h) else {
            return;
        };
        let [r, g, b, a] = color.to_array();

        for row_y in y1..y2 {
            let start = self.pixel_index(x1, row_y);
            let end = self.pixel_index(x2, row_y);
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Fill a rectangle with "over" alpha compositing.
    pub fn blend_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if color.a == 255 {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        let Some((x1, y1, x2, y2)) = self.clip(x, y, w, h) else {
            return;
        };
        for row_y in y1..y2 {
            for col_x in x1..x2 {
                self.blend_pixel(col_x, row_y, color);
            }
        }
    }

    /// Color at a pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color onto a pixel using the "over" operator:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = color.alpha_f32();
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|px| *px == target)
            .count()
    }

    /// Pixel data without stride padding, as PNG and `ImageData` expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        if self.stride == row_bytes {
            return self.pixels.clone();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                compact.extend_from_slice(row);
            }
        }
        compact
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    fn clip(&self, x: u32, y: u32, w: u32, h: u32) -> Option<(u32, u32, u32, u32)> {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);
        (x1 < x2 && y1 < y2).then_some((x1, y1, x2, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % 64, 0);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 100);
    }

    #[test]
    fn test_fill_rect_clamped() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(15, 15, 100, 100, Rgba::BLACK);

        assert_eq!(fb.count_pixels(Rgba::BLACK), 25);
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::WHITE));
    }

    #[test]
    fn test_blend_rect_over_white() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        let fill = Rgba::new(151, 187, 205, 128);
        fb.blend_rect(0, 0, 4, 4, fill);

        let px = fb.get_pixel(2, 2).unwrap();
        let expected = fill.over(Rgba::WHITE);
        assert_eq!(px.a, 255);
        assert!(px.r.abs_diff(expected.r) <= 1);
        assert!(px.g.abs_diff(expected.g) <= 1);
        assert!(px.b.abs_diff(expected.b) <= 1);
    }

    #[test]
    fn test_set_get_pixel_bounds() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLACK);
        fb.set_pixel(50, 50, Rgba::BLACK);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), None);
    }

    #[test]
    fn test_compact_pixels_strip_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::BLACK);
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }
}
