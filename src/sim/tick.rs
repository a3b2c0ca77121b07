//! Per-frame simulation step
//!
//! Advances the entities by the previous frame's wall-clock duration and
//! drives the Start -> Play -> Start state machine.

use super::collision::{
    exited_left, exited_right, resolve_left_paddle, resolve_right_paddle, resolve_wall_collision,
};
use super::state::{Ball, GameState, Paddle};
use crate::consts::*;
use crate::renderer::{PixelBuffer, draw_title};

/// Held-key snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the human paddle up
    pub up: bool,
    /// Move the human paddle down
    pub down: bool,
    /// Serve (leave the title screen)
    pub serve: bool,
}

/// Owns every entity and the current game state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: GameState,
    /// Human paddle (left)
    pub left: Paddle,
    /// AI paddle (right)
    pub right: Paddle,
    pub ball: Ball,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            state: GameState::Start,
            left: Paddle::left(),
            right: Paddle::right(),
            ball: Ball::default(),
        }
    }

    /// Advance one frame by `dt` seconds and return the resulting state
    pub fn update(&mut self, input: &TickInput, dt: f32) -> GameState {
        match self.state {
            GameState::Start => {
                if input.serve {
                    self.left.score = 0;
                    self.right.score = 0;
                    self.state = GameState::Play;
                    log::info!("Serve: Start -> Play");
                }
            }
            GameState::Play => {
                self.left.update(input.up, input.down, dt);
                self.right.ai_update(&self.ball);
                self.update_ball(dt);
            }
            GameState::Pause => {}
        }
        self.state
    }

    /// Ball physics, scoring and paddle hits. Order matters.
    fn update_ball(&mut self, dt: f32) {
        let width = WIN_WIDTH as f32;
        let height = WIN_HEIGHT as f32;

        self.ball.pos += self.ball.vel * dt;

        resolve_wall_collision(&mut self.ball, height);

        if exited_left(&self.ball) {
            self.right.score += 1;
            log::debug!("Right scores ({} - {})", self.left.score, self.right.score);
            self.recenter();
        }
        if exited_right(&self.ball, width) {
            self.left.score += 1;
            log::debug!("Left scores ({} - {})", self.left.score, self.right.score);
            self.recenter();
        }

        // Same tick as the winning point
        if self.left.score >= WINNING_SCORE || self.right.score >= WINNING_SCORE {
            log::info!(
                "Game over ({} - {}), back to Start",
                self.left.score,
                self.right.score
            );
            self.reset_game();
        }

        resolve_left_paddle(&mut self.ball, &self.left);
        resolve_right_paddle(&mut self.ball, &self.right);

        // Unbounded on purpose: long rallies keep getting faster
        self.ball.vel *= SPEED_RAMP;

        log::trace!("(xVel, yVel): ({}, {})", self.ball.vel.x, self.ball.vel.y);
    }

    /// Soft reset after a point: ball and paddles recenter, scores and
    /// velocity carry over
    fn recenter(&mut self) {
        self.ball.recenter();
        self.left.recenter();
        self.right.recenter();
    }

    /// Full reset: recenter everything, zero both scores, back to Start
    pub fn reset_game(&mut self) {
        self.left.recenter();
        self.right.recenter();
        self.left.score = 0;
        self.right.score = 0;
        self.ball.recenter();
        self.state = GameState::Start;
    }

    /// Paint the current frame. The buffer is cleared first.
    pub fn render(&self, buf: &mut PixelBuffer) {
        buf.clear();
        match self.state {
            GameState::Start => draw_title(buf, TITLE_GLYPH_SIZE),
            GameState::Play | GameState::Pause => {
                self.left.draw(buf);
                self.right.draw(buf);
                self.ball.draw(buf);
            }
        }
    }
}
