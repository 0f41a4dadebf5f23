use glam::Vec2;

use crate::geometry::{direction_from_angle, launch_angle, signed_distance};
use crate::input::InputState;
use crate::map::GameMap;
use crate::resources::GameRng;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Human player
    Left,
    /// Computer player
    Right,
}

impl Side {
    /// Collision-plane normal along x: +1 for the left paddle, -1 for the right
    pub fn facing(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Movement strategy, fixed when the paddle is spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleControl {
    /// Follows the held up/down keys
    Keyboard,
    /// Chases the ball's y with a capped step
    TrackBall,
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    /// Max travel along y, pixels per second
    pub speed: f32,
    pub control: PaddleControl,
}

impl Paddle {
    pub fn new(side: Side, y: f32, speed: f32, control: PaddleControl) -> Self {
        Self {
            side,
            y,
            speed,
            control,
        }
    }

    pub fn facing(&self) -> f32 {
        self.side.facing()
    }

    pub fn reset_position(&mut self, map: &GameMap) {
        self.y = map.paddle_spawn(self.side).y;
    }

    /// Advance by `dt` seconds using this paddle's control strategy.
    ///
    /// `ball_y` is only read by [`PaddleControl::TrackBall`].
    pub fn steer(&mut self, dt: f32, input: &InputState, ball_y: f32, map: &GameMap) {
        match self.control {
            PaddleControl::Keyboard => self.move_by_input(dt, input, map),
            PaddleControl::TrackBall => self.track(dt, ball_y, map),
        }
    }

    /// Move along the held direction; up and down together cancel out
    pub fn move_by_input(&mut self, dt: f32, input: &InputState, map: &GameMap) {
        let step = self.speed * dt;
        if input.up {
            self.y -= step;
        }
        if input.down {
            self.y += step;
        }
        self.y = map.clamp_paddle_y(self.y);
    }

    /// Close the gap to `target_y`, at most `speed * dt` per call
    pub fn track(&mut self, dt: f32, target_y: f32, map: &GameMap) {
        let gap = target_y - self.y;
        let step = (self.speed * dt).min(gap.abs());
        self.y += step.copysign(gap);
        self.y = map.clamp_paddle_y(self.y);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Direction of travel; unit length at launch, never zero
    pub dir: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, speed: f32) -> Self {
        Self { pos, dir, speed }
    }

    /// Back to the center of the field with a fresh random launch direction
    pub fn reset(&mut self, map: &GameMap, rng: &mut GameRng) {
        self.pos = map.ball_spawn();
        self.dir = direction_from_angle(launch_angle(&mut rng.0));
    }

    /// Wall collision first, then motion. Returns true on a wall bounce.
    pub fn update(&mut self, dt: f32, map: &GameMap) -> bool {
        let bounced = self.resolve_wall_collision(map);
        self.advance(dt);
        bounced
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
    }

    /// Reflect off the top or bottom wall.
    ///
    /// Only flips while heading into the wall, so calling this again before
    /// the ball has moved out of the band is a no-op.
    pub fn resolve_wall_collision(&mut self, map: &GameMap) -> bool {
        let half = map.ball_size() / 2.0;
        let into_top = self.pos.y <= half && self.dir.y < 0.0;
        let into_bottom = self.pos.y >= map.height - half && self.dir.y > 0.0;
        if into_top || into_bottom {
            self.dir.y = -self.dir.y;
            true
        } else {
            false
        }
    }

    /// Bounce off `paddle` if the ball is inside its hit zone and heading at it.
    ///
    /// Only the x direction flips, giving the classic straight-line bounce.
    pub fn deal_with_paddle_hit(&mut self, paddle: &Paddle, map: &GameMap) -> bool {
        let facing = paddle.facing();
        let distance = signed_distance(facing, map.paddle_x(paddle.side), self.pos.x);
        if distance < 0.0 || facing * self.dir.x > 0.0 {
            // Behind the paddle, or already rebounded
            return false;
        }

        if distance > map.paddle_width() / 2.0 {
            return false;
        }

        let half_height = map.paddle_height() / 2.0;
        if self.pos.y > paddle.y - half_height && self.pos.y < paddle.y + half_height {
            self.dir.x = -self.dir.x;
            return true;
        }
        false
    }
}
