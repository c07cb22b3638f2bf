//! The player's paddle
//!
//! Moves horizontally only, at a fixed step per tick while an intent is held.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Arena, Rect};
use crate::consts::PADDLE_BOTTOM_GAP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; `y` never changes
    pub pos: Vec2,
    /// Width
    pub size: f32,
    /// Distance moved per tick per held intent
    pub speed: f32,
}

impl Paddle {
    pub fn new(arena: &Arena, size: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.height - PADDLE_BOTTOM_GAP),
            size,
            speed,
        }
    }

    pub fn move_left(&mut self) {
        self.pos.x -= self.speed;
    }

    pub fn move_right(&mut self) {
        self.pos.x += self.speed;
    }

    /// Keep the paddle between the side walls
    pub fn clamp(&mut self, arena_width: f32) {
        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.size >= arena_width {
            self.pos.x = arena_width - self.size;
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Drawn thickness
    pub fn thickness(&self) -> f32 {
        self.size / 2.0 - self.size / 3.0
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, Vec2::new(self.size, self.thickness()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 390.0),
            size: 70.0,
            speed: 5.0,
        }
    }

    #[test]
    fn test_spawn_position() {
        let paddle = Paddle::new(&Arena::new(400.0, 400.0), 70.0, 5.0);
        assert_eq!(paddle.pos, Vec2::new(200.0, 390.0));
    }

    #[test]
    fn test_clamp_left() {
        let mut paddle = paddle_at(-5.0);
        paddle.clamp(400.0);
        assert_eq!(paddle.pos.x, 0.0);
    }

    #[test]
    fn test_clamp_right() {
        let mut paddle = paddle_at(395.0);
        paddle.clamp(400.0);
        assert_eq!(paddle.pos.x, 330.0);
    }

    #[test]
    fn test_opposing_moves_cancel() {
        let mut paddle = paddle_at(100.0);
        paddle.move_left();
        paddle.move_right();
        assert_eq!(paddle.pos.x, 100.0);

        paddle.move_left();
        assert_eq!(paddle.pos.x, 95.0);
    }

    #[test]
    fn test_rect_thickness() {
        let paddle = paddle_at(10.0);
        let rect = paddle.rect();
        assert_eq!(rect.min, Vec2::new(10.0, 390.0));
        assert!((rect.height() - 70.0 / 6.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_arena(x in -1000.0f32..1000.0, width in 80.0f32..2000.0) {
            let mut paddle = paddle_at(x);
            paddle.clamp(width);
            prop_assert!(paddle.left() >= 0.0);
            prop_assert!(paddle.right() <= width + 1e-3);
        }
    }
}
