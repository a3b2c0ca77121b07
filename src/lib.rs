//! Pixel Pong - one human paddle against a perfect AI, drawn pixel by pixel
//!
//! Core modules:
//! - `sim`: Entities, physics, collisions and the Start/Play state machine
//! - `renderer`: RGBA pixel buffer, software rasterizer and GPU presentation
//! - `platform`: Window, input and clock collaborators
//! - `game_loop`: Poll -> simulate -> rasterize -> present -> pace
//! - `settings`: Window/display preferences

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PlatformError;
pub use game_loop::GameLoop;
pub use settings::Settings;

use glam::Vec2;

/// Screen-space position: origin top-left, y grows downward.
pub type Position = Vec2;

/// Game rules and layout constants
pub mod consts {
    use std::time::Duration;

    /// Logical canvas size in pixels
    pub const WIN_WIDTH: usize = 800;
    pub const WIN_HEIGHT: usize = 600;

    /// First paddle to this many points wins and the game returns to Start
    pub const WINNING_SCORE: u32 = 9;
    /// Per-frame velocity multiplier (unbounded)
    pub const SPEED_RAMP: f32 = 1.0002;
    /// Frames shorter than this are padded with a sleep (~200 FPS cap)
    pub const MIN_FRAME_TIME: Duration = Duration::from_millis(5);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical speed of the human paddle (pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Distance of each paddle's center from its side wall
    pub const PADDLE_INSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START: (f32, f32) = (300.0, 300.0);
    /// Initial ball velocity (pixels/s)
    pub const BALL_START_VELOCITY: (f32, f32) = (350.0, 350.0);

    /// Score digits
    pub const SCORE_GLYPH_SIZE: i32 = 15;
    pub const SCORE_Y: f32 = 60.0;
    /// How far the score sits from its paddle toward the center line
    pub const SCORE_LERP: f32 = 0.2;

    /// Title glyph cell size
    pub const TITLE_GLYPH_SIZE: i32 = 15;
}

/// Center of the canvas
#[inline]
pub fn screen_center() -> Position {
    // Integer halves first, matching the pixel grid
    Vec2::new(
        (consts::WIN_WIDTH / 2) as f32,
        (consts::WIN_HEIGHT / 2) as f32,
    )
}

/// Linear interpolation from `a` toward `b`
#[inline]
pub fn lerp(a: f32, b: f32, pct: f32) -> f32 {
    a + pct * (b - a)
}

/// Top-left pixel of a `width`x`height` box centered at `center`
///
/// Truncates toward zero, so a box hanging off the left edge rounds right.
#[inline]
pub fn rect_origin(center: Position, width: f32, height: f32) -> (i32, i32) {
    (
        (center.x - width / 2.0) as i32,
        (center.y - height / 2.0) as i32,
    )
}
