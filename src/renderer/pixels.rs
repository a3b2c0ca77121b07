//! RGBA8 frame buffer
//!
//! Row-major, 4 bytes per pixel, byte order R,G,B,A. This is the layout the
//! presentation texture expects, so the bytes are uploaded as-is.

use bytemuck::{Pod, Zeroable};

/// 8-bit RGBA color. Alpha is carried but never written by the rasterizer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Fixed-size software frame buffer
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Allocate a zeroed `width`x`height` buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * Self::BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width * Self::BYTES_PER_PIXEL
    }

    /// Zero every byte (opaque writes start from black)
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Write r,g,b at `(y * width + x) * 4`.
    ///
    /// Only the linear index is checked: anything outside `[0, len)` is
    /// dropped silently. An x past the right edge therefore lands on the next
    /// row, which is the long-standing look of the ball at the side walls.
    /// The alpha byte is left untouched.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index =
            (i64::from(y) * self.width as i64 + i64::from(x)) * Self::BYTES_PER_PIXEL as i64;
        if index < 0 || index >= self.bytes.len() as i64 {
            return;
        }
        let i = index as usize;
        self.bytes[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The buffer viewed as whole pixels
    pub fn pixels(&self) -> &[Color] {
        bytemuck::cast_slice(self.bytes.as_slice())
    }

    /// Pixel at `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels().get(y * self.width + x).copied()
    }

    /// True if any of the pixel's color bytes is nonzero
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixel(x, y)
            .is_some_and(|c| c.r != 0 || c.g != 0 || c.b != 0)
    }
}
