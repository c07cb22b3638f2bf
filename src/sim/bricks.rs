//! Brick field: grid layout and removal on hit

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bounds::Rect;
use crate::consts::{BRICK_ORIGIN_X, BRICK_ORIGIN_Y};
use crate::renderer::{Color, Renderer};

/// A destructible target. Position only; size comes from the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
}

/// All surviving bricks of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    /// Surviving bricks in generation order (row-major)
    pub bricks: Vec<Brick>,
    pub rows: u32,
    pub columns: u32,
    /// Horizontal pitch: arena width / columns
    pub cell_size: f32,
    pub color: Color,
}

impl BrickField {
    /// Lay out `rows x columns` bricks. Deterministic.
    pub fn generate_layout(rows: u32, columns: u32, arena_width: f32, color: Color) -> Self {
        let cell_size = arena_width / columns as f32;
        let mut bricks = Vec::with_capacity(rows as usize * columns as usize);

        for i in 0..rows {
            for j in 0..columns {
                bricks.push(Brick {
                    pos: Vec2::new(
                        cell_size * j as f32 + BRICK_ORIGIN_X,
                        (cell_size / 2.0) * i as f32 + BRICK_ORIGIN_Y,
                    ),
                });
            }
        }

        Self {
            bricks,
            rows,
            columns,
            cell_size,
            color,
        }
    }

    #[inline]
    pub fn brick_size(&self) -> Vec2 {
        Vec2::new(self.cell_size / 1.3, self.cell_size / 5.0)
    }

    pub fn brick_rect(&self, brick: &Brick) -> Rect {
        Rect::from_min_size(brick.pos, self.brick_size())
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for brick in &self.bricks {
            renderer.draw_rect(self.brick_rect(brick), self.color);
        }
    }

    /// Remove every brick containing the ball's trailing corner.
    ///
    /// Hits are tested against the ball as it was when the pass started and
    /// removed together afterwards. Each hit negates `vel.y` once, so an even
    /// number of hits in one pass leaves it unchanged. Returns the hit count.
    pub fn resolve_collisions(&mut self, ball: &mut Ball) -> usize {
        let probe = ball.trailing_corner();
        let hits: Vec<bool> = self
            .bricks
            .iter()
            .map(|b| self.brick_rect(b).contains_point(probe))
            .collect();

        let count = hits.iter().filter(|&&hit| hit).count();
        if count == 0 {
            return 0;
        }

        for _ in 0..count {
            ball.vel.y = -ball.vel.y;
        }

        let mut flags = hits.into_iter();
        self.bricks.retain(|_| !flags.next().unwrap_or(false));

        log::debug!(
            "Ball at ({:.1}, {:.1}) broke {} brick(s), {} left",
            probe.x,
            probe.y,
            count,
            self.bricks.len()
        );
        count
    }
}
