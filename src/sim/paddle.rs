//! Paddles: vertical movement clamped to the playfield, plus the AI tracker

use glam::Vec2;

use super::ball::Ball;
use super::rect::Rect;
use crate::consts::*;

/// A vertical paddle anchored at its top-left corner
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner; x is fixed for the life of the paddle
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Tracking speed in pixels per frame (used by `auto_track`)
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
        }
    }

    /// Bounding rectangle for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Shift vertically by `delta`, clamped to `[0, playfield_height - height]`
    pub fn move_by(&mut self, delta: f32, playfield_height: f32) {
        let max_y = (playfield_height - self.height).max(0.0);
        self.pos.y = (self.pos.y + delta).clamp(0.0, max_y);
    }

    /// Put the paddle back at the vertical middle of the court
    pub fn recenter(&mut self, playfield_height: f32) {
        self.pos.y = ((playfield_height - self.height) / 2.0).max(0.0);
    }

    /// Move one speed-step toward the ball's vertical center
    pub fn auto_track(&mut self, ball: &Ball, playfield_height: f32) {
        let dir = track_direction(self.center_y(), ball.rect().center().y, self.height / 4.0);
        if dir != 0.0 {
            self.move_by(dir * self.speed, playfield_height);
        }
    }
}

/// Reactive tracking rule: -1 (up), 1 (down) or 0 inside the dead zone.
///
/// `dead_zone` is the half-width of the band around the paddle center in
/// which the paddle holds still.
pub fn track_direction(paddle_center: f32, ball_center: f32, dead_zone: f32) -> f32 {
    let diff = ball_center - paddle_center;
    if diff < -dead_zone {
        -1.0
    } else if diff > dead_zone {
        1.0
    } else {
        0.0
    }
}
