//! Rendering module
//!
//! The game draws through the `Surface` trait so the simulation never sees a
//! window or canvas. Backends:
//! - `RecordingSurface`: captures draw commands (tests, headless runs)
//! - `CanvasSurface`: HTML canvas 2D context (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render;
pub use theme::Theme;

use glam::Vec2;

use crate::sim::Rect;

/// An RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color string, e.g. `rgba(255,255,255,1)`
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

/// A font request: family name and pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }

    /// CSS font shorthand, e.g. `30px Arial`
    pub fn to_css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

/// Where rendered text is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Top-left corner of the text box at this point
    TopLeft(Vec2),
    /// Text box centered on this point
    Center(Vec2),
}

/// A 2D drawing target
pub trait Surface {
    /// Clear the whole surface
    fn fill(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Filled ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    /// Anti-aliased line
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, font: &Font, color: Color, anchor: TextAnchor);
    /// Show the finished frame
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::WHITE.to_css(), "rgba(255,255,255,1)");
        assert_eq!(Font::new("Arial", 30.0).to_css(), "30px Arial");
    }
}
