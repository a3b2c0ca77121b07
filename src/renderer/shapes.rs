//! Filled 2D primitives rasterized straight into a `PixelBuffer`

use super::pixels::{Color, PixelBuffer};
use crate::{Position, rect_origin};

/// Filled circle by per-pixel distance test.
///
/// Offsets run over `[-radius, radius)` on both axes and a pixel is lit only
/// when `dx² + dy² < radius²` (strict). No anti-aliasing.
pub fn draw_disc(buf: &mut PixelBuffer, center: Position, radius: f32, color: Color) {
    let r2 = radius * radius;
    let mut dy = -radius;
    while dy < radius {
        let mut dx = -radius;
        while dx < radius {
            if dx * dx + dy * dy < r2 {
                buf.set_pixel((center.x + dx) as i32, (center.y + dy) as i32, color);
            }
            dx += 1.0;
        }
        dy += 1.0;
    }
}

/// Filled axis-aligned rectangle centered at `center`
pub fn draw_rect(buf: &mut PixelBuffer, center: Position, width: f32, height: f32, color: Color) {
    let (start_x, start_y) = rect_origin(center, width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            buf.set_pixel(start_x + x, start_y + y, color);
        }
    }
}

/// Filled `size`x`size` square with its top-left corner at `(x0, y0)`
pub fn fill_square(buf: &mut PixelBuffer, x0: i32, y0: i32, size: i32, color: Color) {
    for y in y0..y0 + size {
        for x in x0..x0 + size {
            buf.set_pixel(x, y, color);
        }
    }
}
