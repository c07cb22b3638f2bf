//! Axis-aligned geometry helpers
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Point containment, edges included
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Inclusive 1D span overlap
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

/// Fixed playing field bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::from_min_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 5.0));
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(r.contains_point(Vec2::new(30.0, 15.0)));
        assert!(!r.contains_point(Vec2::new(30.1, 15.0)));
        assert!(!r.contains_point(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn test_spans_overlap() {
        assert!(spans_overlap(0.0, 5.0, 5.0, 9.0));
        assert!(!spans_overlap(0.0, 4.9, 5.0, 9.0));
    }

    #[test]
    fn test_arena_bounds() {
        let arena = Arena::new(400.0, 300.0);
        assert_eq!(arena.bounds().size(), Vec2::new(400.0, 300.0));
        assert_eq!(arena.center(), Vec2::new(200.0, 150.0));
    }
}
