//! Software rendering module
//!
//! Everything is rasterized on the CPU into an RGBA `PixelBuffer`; the GPU
//! only receives the finished frame as a texture.

pub mod glyphs;
pub mod pipeline;
pub mod pixels;
pub mod shapes;

pub use glyphs::{draw_digit, draw_title};
pub use pipeline::BlitRenderer;
pub use pixels::{Color, PixelBuffer};
pub use shapes::{draw_disc, draw_rect};
