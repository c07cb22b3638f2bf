//! The ball
//!
//! Position is the top-left of the ball's bounding box; the drawn circle is
//! centred at `pos + size` with radius `size`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Arena;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius-equivalent size
    pub size: f32,
    /// Base speed; never changes during a match
    pub speed: f32,
}

impl Ball {
    /// Serve position: horizontally centred, a third of the way down
    pub fn new(arena: &Arena, size: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.height / 3.0),
            vel: Vec2::splat(speed),
            size,
            speed,
        }
    }

    /// Advance one tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the side walls and the ceiling. The floor is open.
    pub fn reflect_off_walls(&mut self, arena_width: f32) {
        if self.pos.x + self.size * 2.0 >= arena_width || self.pos.x <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Point used for brick hits: bottom-right of the bounding box
    #[inline]
    pub fn trailing_corner(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size)
    }

    /// Centre of the drawn circle
    #[inline]
    pub fn draw_center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size)
    }

    /// True once the ball has dropped through the floor
    pub fn is_below(&self, arena_height: f32) -> bool {
        self.pos.y >= arena_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            size: 7.0,
            speed: 3.0,
        }
    }

    #[test]
    fn test_serve_position() {
        let ball = Ball::new(&Arena::new(400.0, 300.0), 7.0, 3.0);
        assert_eq!(ball.pos, Vec2::new(200.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_integrate() {
        let mut ball = ball_at(10.0, 20.0, 3.0, -2.5);
        ball.integrate();
        assert_eq!(ball.pos, Vec2::new(13.0, 17.5));
    }

    #[test]
    fn test_left_wall_reflects() {
        let mut ball = ball_at(0.0, 100.0, -3.0, 3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_right_wall_uses_full_diameter() {
        // 386 + 14 = 400 touches the wall
        let mut ball = ball_at(386.0, 100.0, 3.0, 3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel.x, -3.0);

        let mut ball = ball_at(385.0, 100.0, 3.0, 3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel.x, 3.0);
    }

    #[test]
    fn test_ceiling_reflects() {
        let mut ball = ball_at(100.0, -1.0, 3.0, -3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_in_bounds_unaffected() {
        let mut ball = ball_at(100.0, 100.0, -3.0, -3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_no_floor_reflection() {
        let mut ball = ball_at(100.0, 450.0, 3.0, 3.0);
        ball.reflect_off_walls(400.0);
        assert_eq!(ball.vel.y, 3.0);
        assert!(ball.is_below(400.0));
    }

    #[test]
    fn test_reference_points() {
        let ball = ball_at(10.0, 20.0, 0.0, 0.0);
        assert_eq!(ball.trailing_corner(), Vec2::new(17.0, 27.0));
        assert_eq!(ball.draw_center(), ball.trailing_corner());
    }
}
