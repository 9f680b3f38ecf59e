//! The ball: per-frame motion, wall bounces and serve reset

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::BALL_SIZE;

/// A square ball anchored at its top-left corner
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub size: f32,
    /// Playfield width/height the ball bounces inside
    pub bounds: Vec2,
}

impl Ball {
    /// Create a ball at the center of `bounds` moving with `vel`
    pub fn new(bounds: Vec2, vel: Vec2) -> Self {
        Self {
            pos: bounds / 2.0,
            vel,
            size: BALL_SIZE,
            bounds,
        }
    }

    /// Bounding rectangle for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Advance one frame and bounce off the top and bottom walls.
    ///
    /// The vertical velocity is pointed away from the wall rather than
    /// negated, so a ball straddling a wall for several frames flips once.
    pub fn advance(&mut self) {
        self.pos += self.vel;

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y + self.size >= self.bounds.y {
            self.pos.y = self.bounds.y - self.size;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Serve from the center with a random direction on both axes.
    ///
    /// Speed magnitudes are preserved.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = self.bounds / 2.0;
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(self.vel.x.abs() * sx, self.vel.y.abs() * sy);
    }

    /// True once the ball has crossed the left scoring line
    #[inline]
    pub fn past_left(&self) -> bool {
        self.pos.x <= 0.0
    }

    /// True once the ball has crossed the right scoring line
    #[inline]
    pub fn past_right(&self) -> bool {
        self.pos.x >= self.bounds.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bounds() -> Vec2 {
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }

    #[test]
    fn test_starts_centered() {
        let ball = Ball::new(bounds(), Vec2::new(7.0, 7.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_single_step_from_center() {
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, 7.0));
        ball.advance();
        assert_eq!(ball.pos, Vec2::new(407.0, 307.0));
        assert_eq!(ball.vel, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, -7.0));
        ball.pos.y = 3.0;
        ball.advance();
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 7.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut ball = Ball::new(bounds(), Vec2::new(-7.0, 7.0));
        ball.pos.y = PLAYFIELD_HEIGHT - BALL_SIZE - 2.0;
        ball.advance();
        assert_eq!(ball.pos.y, PLAYFIELD_HEIGHT - BALL_SIZE);
        assert_eq!(ball.vel.y, -7.0);
        assert_eq!(ball.vel.x, -7.0);
    }

    #[test]
    fn test_wall_contact_flips_once() {
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, -7.0));
        ball.pos.y = 1.0;
        ball.advance();
        assert_eq!(ball.vel.y, 7.0);

        // Still touching the wall on the next frame must not flip back
        ball.pos.y = 0.0;
        ball.vel.y = 7.0;
        ball.advance();
        assert_eq!(ball.vel.y, 7.0);
        assert_eq!(ball.pos.y, 7.0);
    }

    #[test]
    fn test_reset_centers_and_keeps_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, 7.0));
        ball.pos = Vec2::new(-3.0, 120.0);

        for _ in 0..32 {
            ball.reset(&mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x.abs(), 7.0);
            assert_eq!(ball.vel.y.abs(), 7.0);
        }
    }

    #[test]
    fn test_reset_serves_both_ways() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, 7.0));
        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            ball.reset(&mut rng);
            if ball.vel.x < 0.0 {
                left += 1;
            } else {
                right += 1;
            }
        }
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_scoring_lines() {
        let mut ball = Ball::new(bounds(), Vec2::new(7.0, 7.0));
        ball.pos.x = 0.0;
        assert!(ball.past_left());
        ball.pos.x = PLAYFIELD_WIDTH;
        assert!(ball.past_right());
        ball.pos.x = 1.0;
        assert!(!ball.past_left() && !ball.past_right());
    }

    proptest! {
        #[test]
        fn prop_free_flight_keeps_direction(
            x in 50.0f32..700.0,
            y in 50.0f32..500.0,
            vx in prop::sample::select(vec![-7.0f32, 7.0]),
            vy in prop::sample::select(vec![-7.0f32, 7.0]),
        ) {
            let mut ball = Ball::new(bounds(), Vec2::new(vx, vy));
            ball.pos = Vec2::new(x, y);
            ball.advance();
            prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
            prop_assert_eq!(ball.pos, Vec2::new(x + vx, y + vy));
        }
    }
}
