//! Entities and the game state machine's states

use glam::Vec2;

use crate::consts::*;
use crate::lerp;
use crate::renderer::{Color, PixelBuffer, draw_digit, draw_disc, draw_rect};
use crate::{Position, screen_center};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen, waiting for serve
    #[default]
    Start,
    /// Active rally
    Play,
    /// Reserved: entities are drawn frozen, nothing updates
    Pause,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Position,
    pub radius: f32,
    /// Pixels per second
    pub vel: Vec2,
    pub color: Color,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::from(BALL_START),
            radius: BALL_RADIUS,
            vel: Vec2::from(BALL_START_VELOCITY),
            color: Color::WHITE,
        }
    }
}

impl Ball {
    pub fn draw(&self, buf: &mut PixelBuffer) {
        draw_disc(buf, self.pos, self.radius, self.color);
    }

    /// Move to the screen center, keeping velocity
    pub fn recenter(&mut self) {
        self.pos = screen_center();
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A paddle. Only ever moves vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Position,
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    pub speed: f32,
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    /// Paddle centered vertically at horizontal position `x`
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, (WIN_HEIGHT / 2) as f32),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            score: 0,
            color: Color::WHITE,
        }
    }

    /// Human-controlled paddle on the left wall
    pub fn left() -> Self {
        Self::new(PADDLE_INSET)
    }

    /// AI paddle on the right wall
    pub fn right() -> Self {
        Self::new(WIN_WIDTH as f32 - PADDLE_INSET)
    }

    /// Move by `speed * dt` while a direction is held. No clamping to the
    /// canvas; a paddle can be driven off-screen.
    pub fn update(&mut self, up: bool, down: bool, dt: f32) {
        if up {
            self.pos.y -= self.speed * dt;
        }
        if down {
            self.pos.y += self.speed * dt;
        }
    }

    /// Perfect tracking: snap to the ball's height
    pub fn ai_update(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }

    pub fn recenter(&mut self) {
        self.pos.y = (WIN_HEIGHT / 2) as f32;
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Where this paddle's score digit is drawn
    pub fn score_position(&self) -> Position {
        Vec2::new(lerp(self.pos.x, screen_center().x, SCORE_LERP), SCORE_Y)
    }

    /// Draw the paddle body and its score
    pub fn draw(&self, buf: &mut PixelBuffer) {
        draw_rect(buf, self.pos, self.width, self.height, self.color);
        draw_digit(
            buf,
            self.score_position(),
            self.color,
            SCORE_GLYPH_SIZE,
            self.score,
        );
    }
}
