//! Ball vs paddle collision response
//!
//! A one-axis response: the horizontal velocity is pointed away from the
//! paddle and the ball is snapped flush against the paddle's facing edge,
//! so it can never be caught overlapping the same paddle on the next frame.

use super::ball::Ball;
use super::paddle::Paddle;
use super::state::Side;

/// Resolve a hit between `ball` and the paddle defending `side`.
///
/// Returns `true` if the ball overlapped the paddle and was bounced.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    let paddle_rect = paddle.rect();
    if !ball.rect().overlaps(&paddle_rect) {
        return false;
    }

    match side {
        Side::Player => {
            ball.pos.x = paddle_rect.right();
            ball.vel.x = ball.vel.x.abs();
        }
        Side::Computer => {
            ball.pos.x = paddle_rect.left() - ball.size;
            ball.vel.x = -ball.vel.x.abs();
        }
    }

    true
}
