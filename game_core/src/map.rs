use glam::Vec2;

use crate::components::{Ball, Paddle, Side};
use crate::params::Params;

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Playing field dimensions, reported by the host every frame.
///
/// All size-dependent geometry is derived from these on demand so a resize
/// takes effect on the very next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn paddle_height(&self) -> f32 {
        Params::PADDLE_HEIGHT_RATIO * self.height
    }

    pub fn paddle_width(&self) -> f32 {
        Params::PADDLE_WIDTH_RATIO * self.paddle_height()
    }

    /// Ball edge length (the ball is a square as wide as a paddle)
    pub fn ball_size(&self) -> f32 {
        self.paddle_width()
    }

    /// X of the plane each paddle defends
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width(),
            Side::Right => self.width - self.paddle_width(),
        }
    }

    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.height * 0.5)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Legal range for a paddle's center y
    pub fn paddle_y_range(&self) -> (f32, f32) {
        let half = self.paddle_height() / 2.0;
        (half, self.height - half)
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let (min, max) = self.paddle_y_range();
        // max() then min() so a degenerate surface never panics like clamp() would
        y.max(min).min(max)
    }

    pub fn paddle_rect(&self, paddle: &Paddle) -> Aabb {
        let w = self.paddle_width();
        let h = self.paddle_height();
        let x = self.paddle_x(paddle.side);
        let left = match paddle.side {
            Side::Left => x,
            Side::Right => x - w,
        };
        let top = paddle.y - h / 2.0;
        Aabb::new(Vec2::new(left, top), Vec2::new(left + w, top + h))
    }

    pub fn ball_rect(&self, ball: &Ball) -> Aabb {
        let size = self.ball_size();
        Aabb::from_center_size(ball.pos, Vec2::splat(size))
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(Params::DEFAULT_WIDTH, Params::DEFAULT_HEIGHT)
    }
}
