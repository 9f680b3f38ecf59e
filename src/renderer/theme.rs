//! Render configuration: colors and fonts
//!
//! Passed explicitly to `render`; there are no global colors.

use super::{Color, Font};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Paddles, ball and scores
    pub foreground: Color,
    /// Center divider
    pub divider: Color,
    /// Secondary overlay text (prompts, menu hints)
    pub muted: Color,
    pub score_font: Font,
    pub banner_font: Font,
    pub menu_font: Font,
    pub show_divider: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            divider: Color::rgb(160, 160, 160),
            muted: Color::rgb(180, 180, 180),
            score_font: Font::new("Arial", 30.0),
            banner_font: Font::new("Arial", 50.0),
            menu_font: Font::new("Arial", 28.0),
            show_divider: true,
        }
    }
}

impl Theme {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut theme = Self::default();
        if settings.high_contrast {
            theme.divider = Color::WHITE;
            theme.muted = Color::WHITE;
        }
        theme.show_divider = settings.show_divider;
        theme
    }
}
