//! Collaborators for running without a terminal
//!
//! Used by the batch runner, `--headless`, tests and benches.

use crate::core::error::Result;
use crate::core::types::GridSpec;

use super::{format_caption, Clock, InputSource, InputState, RenderUnit, Renderer, WinnerInfo};

/// Renderer that only traces what it would show
#[derive(Debug)]
pub struct LogRenderer {
    title: String,
    frames: u64,
    last_caption: String,
}

impl LogRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            frames: 0,
            last_caption: String::new(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_caption(&self) -> &str {
        &self.last_caption
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, units: &[RenderUnit], grid: &GridSpec) -> Result<()> {
        self.frames += 1;
        let outside = units.iter().filter(|u| !grid.contains(u.position)).count();
        tracing::trace!(
            "Frame {}: {} units on {}x{} grid ({} off-grid)",
            self.frames,
            units.len(),
            grid.columns,
            grid.rows,
            outside
        );
        Ok(())
    }

    fn update_caption(&mut self, fps: f32, winner: Option<&WinnerInfo>) -> Result<()> {
        let caption = format_caption(&self.title, fps, winner);
        if winner.is_some() && caption != self.last_caption {
            tracing::debug!("{}", caption);
        }
        self.last_caption = caption;
        Ok(())
    }
}

/// Renderer that keeps every frame and caption, for inspection
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    title: String,
    pub frames: Vec<Vec<RenderUnit>>,
    pub captions: Vec<String>,
    pub winners: Vec<Option<WinnerInfo>>,
}

impl RecordingRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&[RenderUnit]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, units: &[RenderUnit], _grid: &GridSpec) -> Result<()> {
        self.frames.push(units.to_vec());
        Ok(())
    }

    fn update_caption(&mut self, fps: f32, winner: Option<&WinnerInfo>) -> Result<()> {
        self.captions.push(format_caption(&self.title, fps, winner));
        self.winners.push(winner.cloned());
        Ok(())
    }
}

/// Input source that never asks to stop
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverQuit;

impl InputSource for NeverQuit {
    fn poll(&mut self) -> Result<InputState> {
        Ok(InputState::default())
    }
}

/// Input source that reports quit on a given poll (1-based)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    quit_on_poll: Option<u64>,
    polls: u64,
}

impl ScriptedInput {
    pub fn quit_on(poll: u64) -> Self {
        Self {
            quit_on_poll: Some(poll),
            polls: 0,
        }
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputState> {
        self.polls += 1;
        Ok(InputState {
            quit: self.quit_on_poll.is_some_and(|n| self.polls >= n),
        })
    }
}

/// Clock with a fixed FPS readout and no pacing
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    fps: f32,
    ticks: u64,
}

impl ManualClock {
    pub fn new(fps: f32) -> Self {
        Self { fps, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for ManualClock {
    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}
