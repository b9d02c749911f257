//! Primitive rendering functions.
//!
//! Rasterization for the handful of shapes a bar chart needs: lines for axes
//! and ticks, solid and outlined rectangles for bars, and dotted outlines for
//! element borders.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Pixels are alpha-blended, so translucent grid colors stay translucent.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.blend_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Fill a rectangle with alpha blending.
pub fn fill_rect(fb: &mut Framebuffer, rect: Rect, color: Rgba) {
    let (x, y, w, h) = rect.to_pixels();
    fb.blend_rect(x, y, w, h, color);
}

/// Draw a rectangle outline of the given thickness, blended.
pub fn draw_rect_outline(fb: &mut Framebuffer, rect: Rect, color: Rgba, thickness: u32) {
    let thickness = thickness.max(1);
    let (x, y, width, height) = rect.to_pixels();
    if width == 0 || height == 0 {
        return;
    }

    // Top edge
    fb.blend_rect(x, y, width, thickness.min(height), color);
    // Bottom edge
    if height > thickness {
        fb.blend_rect(x, y + height - thickness, width, thickness, color);
    }
    if height > 2 * thickness {
        let inner = height - 2 * thickness;
        // Left edge
        fb.blend_rect(x, y + thickness, thickness.min(width), inner, color);
        // Right edge
        if width > thickness {
            fb.blend_rect(x + width - thickness, y + thickness, thickness, inner, color);
        }
    }
}

/// Draw a dotted rectangle outline: one pixel on, one pixel off.
///
/// Corners are always drawn.
pub fn draw_dotted_rect_outline(fb: &mut Framebuffer, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
    if w == 0 || h == 0 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    for i in (0..w).step_by(2).chain(std::iter::once(w - 1)) {
        fb.set_pixel(x + i, y, color);
        fb.set_pixel(x + i, bottom, color);
    }
    for j in (0..h).step_by(2).chain(std::iter::once(h - 1)) {
        fb.set_pixel(x, y + j, color);
        fb.set_pixel(right, y + j, color);
    }
}
