//! A surface that records draw calls instead of rasterising them

use glam::Vec2;

use super::{Color, Font, Surface, TextAnchor};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect(Rect, Color),
    Ellipse(Rect, Color),
    Line(Vec2, Vec2, Color),
    Text {
        text: String,
        font: Font,
        color: Color,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Commands of the frame being drawn
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text strings drawn this frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, color: Color) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Ellipse(rect, color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line(from, to, color));
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, anchor: TextAnchor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.clone(),
            color,
            anchor,
        });
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
