//! Frontend collaborators the simulation calls into
//!
//! The engine only knows these traits. Concrete implementations:
//! - `terminal`: crossterm/ratatui renderer and keyboard input
//! - `headless`: logging and recording renderers, scripted input
//! - `clock`: frame pacing and FPS sampling

pub mod clock;
pub mod colors;
pub mod headless;
pub mod terminal;

pub use clock::FrameClock;
pub use headless::{LogRenderer, ManualClock, NeverQuit, RecordingRenderer, ScriptedInput};
pub use terminal::{KeyboardInput, TerminalRenderer};

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{GridSpec, PlayerId, Position};

/// Result of polling the input source once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub quit: bool,
}

/// Unit as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderUnit {
    pub owner: PlayerId,
    pub position: Position,
}

/// Identity of the winning player for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerInfo {
    pub player: PlayerId,
    pub name: String,
    pub strategy: String,
}

/// Source of the external stop signal, polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> Result<InputState>;
}

/// Draws the grid and the caption
pub trait Renderer {
    /// Draw all units over the grid
    fn draw(&mut self, units: &[RenderUnit], grid: &GridSpec) -> Result<()>;

    /// Refresh the caption with the sampled frame rate and the winner, if any
    fn update_caption(&mut self, fps: f32, winner: Option<&WinnerInfo>) -> Result<()>;
}

/// Tick pacing and frame rate readout
pub trait Clock {
    /// Throttle to the target rate and record the frame
    fn tick(&mut self);

    /// Frames per second over the recent window
    fn fps(&self) -> f32;
}

/// Caption text: `"{title} - FPS: 30.00"`, plus ` - WINNER: Player 0 (idle)`
pub fn format_caption(title: &str, fps: f32, winner: Option<&WinnerInfo>) -> String {
    match winner {
        Some(winner) => format!(
            "{} - FPS: {:.2} - WINNER: {} ({})",
            title, fps, winner.name, winner.strategy
        ),
        None => format!("{} - FPS: {:.2}", title, fps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_without_winner() {
        assert_eq!(format_caption("Grid Arena", 29.5, None), "Grid Arena - FPS: 29.50");
    }

    #[test]
    fn test_caption_with_winner() {
        let winner = WinnerInfo {
            player: PlayerId(1),
            name: "Player 1".to_string(),
            strategy: "column_rush".to_string(),
        };
        assert_eq!(
            format_caption("Grid Arena", 60.0, Some(&winner)),
            "Grid Arena - FPS: 60.00 - WINNER: Player 1 (column_rush)"
        );
    }
}
