//! Collision tests and responses
//!
//! Everything is axis-aligned: the ball is treated as its bounding edges and
//! paddles as boxes around their centers.

use super::state::{Ball, Paddle};
use crate::Position;

/// Open vertical band test: `center.y - half_height < y < center.y + half_height`
#[inline]
pub fn within_vertical_extent(y: f32, center: Position, half_height: f32) -> bool {
    y < center.y + half_height && y > center.y - half_height
}

/// Bounce off the top and bottom walls.
///
/// Vertical velocity is inverted and the ball is clamped so its edge sits on
/// the wall; the clamp keeps it from sinking through across frames.
/// Returns true if either wall was hit.
pub fn resolve_wall_collision(ball: &mut Ball, height: f32) -> bool {
    let mut hit = false;
    if ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
        hit = true;
    }
    if ball.bottom() > height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = height - ball.radius;
        hit = true;
    }
    hit
}

/// Ball's left edge has crossed x = 0
#[inline]
pub fn exited_left(ball: &Ball) -> bool {
    ball.left() < 0.0
}

/// Ball's right edge has crossed the right wall
#[inline]
pub fn exited_right(ball: &Ball, width: f32) -> bool {
    ball.right() > width
}

/// Ball's leading edge is inside the left paddle's box
pub fn overlaps_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() < paddle.pos.x + paddle.half_width()
        && within_vertical_extent(ball.pos.y, paddle.pos, paddle.half_height())
}

/// Ball's leading edge is inside the right paddle's box
pub fn overlaps_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.pos.x - paddle.half_width()
        && within_vertical_extent(ball.pos.y, paddle.pos, paddle.half_height())
}

/// Reflect off the left paddle and park the ball flush against its face
pub fn resolve_left_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !overlaps_left_paddle(ball, paddle) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    ball.pos.x = paddle.pos.x + paddle.half_width() + ball.radius;
    true
}

/// Reflect off the right paddle and park the ball flush against its face
pub fn resolve_right_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !overlaps_right_paddle(ball, paddle) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    ball.pos.x = paddle.pos.x - paddle.half_width() - ball.radius;
    true
}
