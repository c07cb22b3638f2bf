//! Rendering capability
//!
//! The simulation never draws pixels itself. Each tick it issues a fixed
//! sequence of primitive calls against a [`Renderer`]; backends decide what a
//! rectangle or a circle actually becomes.

pub mod ascii;
pub mod recorder;

pub use ascii::AsciiCanvas;
pub use recorder::{CommandRecorder, DrawCommand};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How a piece of text should look
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    /// Large centred banner used for the outcome text
    pub fn banner() -> Self {
        Self {
            color: Color::WHITE,
            size: crate::consts::BANNER_FONT_SIZE,
            bold: true,
            align: TextAlign::Center,
        }
    }
}

/// Drawing primitives consumed by the simulation
pub trait Renderer {
    /// Wipe the given area back to the background
    fn clear(&mut self, bounds: Rect);

    /// Fill an axis-aligned rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Fill a circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw text anchored at `at`
    fn draw_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
}

/// A renderer that ignores everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _bounds: Rect) {}
    fn draw_rect(&mut self, _rect: Rect, _color: Color) {}
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn draw_text(&mut self, _text: &str, _at: Vec2, _style: &TextStyle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_json() {
        let json = serde_json::to_string(&Color::GRAY).unwrap();
        assert_eq!(json, r#"{"r":128,"g":128,"b":128}"#);
    }
}
