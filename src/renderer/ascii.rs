//! Character-grid renderer for terminals
//!
//! Arena coordinates are scaled onto a fixed `cols x rows` grid. Shapes are
//! filled cell by cell using the cell's centre point.

use glam::Vec2;

use super::{Color, Renderer, TextAlign, TextStyle};
use crate::sim::Rect;

const BLANK: char = ' ';

/// Rasterises draw calls into characters
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    /// Arena units per cell
    scale: Vec2,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(cols: usize, rows: usize, arena_size: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::new(arena_size.x / cols as f32, arena_size.y / rows as f32),
            cells: vec![BLANK; cols * rows],
        }
    }

    /// Character at a grid cell (None when out of range)
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// The grid as newline-separated lines
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        let i = row as usize * self.cols + col as usize;
        self.cells[i] = ch;
    }

    fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.scale.x,
            (row as f32 + 0.5) * self.scale.y,
        )
    }

    /// Fill every cell whose centre passes `inside`
    fn fill(&mut self, bounds: Rect, ch: char, inside: impl Fn(Vec2) -> bool) {
        let min_col = (bounds.min.x / self.scale.x).floor().max(0.0) as usize;
        let min_row = (bounds.min.y / self.scale.y).floor().max(0.0) as usize;
        let max_col = ((bounds.max.x / self.scale.x).ceil().max(0.0) as usize).min(self.cols);
        let max_row = ((bounds.max.y / self.scale.y).ceil().max(0.0) as usize).min(self.rows);

        for row in min_row..max_row {
            for col in min_col..max_col {
                if inside(self.cell_center(col, row)) {
                    self.cells[row * self.cols + col] = ch;
                }
            }
        }
    }
}

/// Pick a glyph that roughly tracks brightness
fn glyph_for(color: Color) -> char {
    let luma = (color.r as u32 * 3 + color.g as u32 * 6 + color.b as u32) / 10;
    match luma {
        0..=40 => BLANK,
        41..=160 => '=',
        _ => '#',
    }
}

impl Renderer for AsciiCanvas {
    fn clear(&mut self, bounds: Rect) {
        self.fill(bounds, BLANK, |_| true);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let ch = glyph_for(color);
        self.fill(rect, ch, |p| rect.contains_point(p));
        // Thin shapes can fall between cell centres; mark at least the origin cell
        if !rect.is_empty() {
            let col = (rect.min.x / self.scale.x).floor() as i64;
            let row = (rect.min.y / self.scale.y).floor() as i64;
            self.put(col, row, ch);
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
        let bounds = Rect::from_min_size(center - Vec2::splat(radius), Vec2::splat(radius * 2.0));
        self.fill(bounds, 'o', |p| p.distance(center) <= radius);
        let col = (center.x / self.scale.x).floor() as i64;
        let row = (center.y / self.scale.y).floor() as i64;
        self.put(col, row, 'o');
    }

    fn draw_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        let len = text.chars().count() as i64;
        let anchor = (at.x / self.scale.x).floor() as i64;
        let start = match style.align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
            TextAlign::Right => anchor - len,
        };
        let row = (at.y / self.scale.y).floor() as i64;
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i64, row, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> AsciiCanvas {
        AsciiCanvas::new(40, 20, Vec2::new(400.0, 400.0))
    }

    #[test]
    fn test_rect_fills_cells() {
        let mut c = canvas();
        c.draw_rect(
            Rect::from_min_size(Vec2::new(0.0, 0.0), Vec2::new(30.0, 20.0)),
            Color::WHITE,
        );
        assert_eq!(c.cell(0, 0), Some('#'));
        assert_eq!(c.cell(2, 0), Some('#'));
        assert_eq!(c.cell(3, 0), Some(BLANK));
        assert_eq!(c.cell(0, 1), Some(BLANK));
    }

    #[test]
    fn test_thin_rect_still_visible() {
        let mut c = canvas();
        c.draw_rect(
            Rect::from_min_size(Vec2::new(100.0, 390.0), Vec2::new(70.0, 2.0)),
            Color::GRAY,
        );
        assert_eq!(c.cell(10, 19), Some('='));
    }

    #[test]
    fn test_clear_wipes() {
        let mut c = canvas();
        c.draw_circle(Vec2::new(200.0, 200.0), 7.0, Color::WHITE);
        assert_eq!(c.cell(20, 10), Some('o'));
        c.clear(Rect::from_min_size(Vec2::ZERO, Vec2::new(400.0, 400.0)));
        assert!(c.to_text().chars().all(|ch| ch == BLANK || ch == '\n'));
    }

    #[test]
    fn test_centered_text() {
        let mut c = canvas();
        c.draw_text("WIN", Vec2::new(200.0, 200.0), &TextStyle::banner());
        assert_eq!(c.cell(19, 10), Some('W'));
        assert_eq!(c.cell(20, 10), Some('I'));
        assert_eq!(c.cell(21, 10), Some('N'));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut c = canvas();
        c.draw_circle(Vec2::new(-50.0, 900.0), 7.0, Color::WHITE);
        c.draw_text("far away", Vec2::new(1000.0, 1000.0), &TextStyle::banner());
        assert_eq!(c.cell(40, 0), None);
        assert_eq!(c.to_text().lines().count(), 20);
    }
}
