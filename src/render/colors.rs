//! Color definitions for players and the grid

use ratatui::style::Color as TermColor;

use crate::core::types::PlayerId;

/// RGB color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Darken color by a factor (0.0 = black, 1.0 = unchanged)
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// 24-bit terminal color
    pub fn to_terminal(self) -> TermColor {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        TermColor::Rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Background color for the renderer
pub const BACKGROUND: Color = Color::new(0.1, 0.1, 0.12);

/// Grid line / empty cell color
pub const GRID: Color = Color::new(0.3, 0.3, 0.35);

const PALETTE: [Color; 8] = [
    Color::new(0.2, 0.6, 0.9), // Blue
    Color::new(0.9, 0.3, 0.3), // Red
    Color::new(0.3, 0.9, 0.5), // Light green
    Color::new(0.9, 0.8, 0.2), // Yellow
    Color::new(0.7, 0.5, 0.9), // Violet
    Color::new(0.9, 0.5, 0.2), // Orange
    Color::new(0.3, 0.8, 0.8), // Teal
    Color::new(0.9, 0.9, 0.9), // White
];

/// Base color for a player; ids beyond the palette wrap around darker
pub fn player_color(player: PlayerId) -> Color {
    let idx = player.index();
    let base = PALETTE[idx % PALETTE.len()];
    if idx < PALETTE.len() {
        base
    } else {
        base.darken(0.7)
    }
}
