//! Terminal frontend (crossterm + ratatui)
//!
//! One character per grid cell. Each player's units show as the last digit
//! of the player id in that player's color; cells holding units of several
//! players show `*`. The caption is the block title.

use std::io::{self, Stdout};
use std::time::Duration;

use ahash::AHashMap;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use crate::core::error::Result;
use crate::core::types::{GridSpec, PlayerId, Position};

use super::colors::{player_color, BACKGROUND, GRID};
use super::{format_caption, InputSource, InputState, RenderUnit, Renderer, WinnerInfo};

/// What a single cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellContent {
    Player(PlayerId),
    Contested,
}

/// Full-screen terminal renderer
///
/// Owns raw mode and the alternate screen for its lifetime. `draw` stores
/// the frame; it is presented by `update_caption`, which the engine calls
/// at the end of every tick.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    title: String,
    frame: Vec<Line<'static>>,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            title: title.into(),
            frame: Vec::new(),
        })
    }

    fn present(&mut self, caption: String) -> Result<()> {
        let lines = self.frame.clone();
        self.terminal.draw(|frame| {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(caption)
                .style(Style::default().bg(BACKGROUND.to_terminal()));
            frame.render_widget(Paragraph::new(lines).block(block), frame.size());
        })?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, units: &[RenderUnit], grid: &GridSpec) -> Result<()> {
        self.frame = grid_lines(units, grid);
        Ok(())
    }

    fn update_caption(&mut self, fps: f32, winner: Option<&WinnerInfo>) -> Result<()> {
        let caption = format_caption(&self.title, fps, winner);
        self.present(caption)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to restore cursor: {}", e);
        }
    }
}

/// Build one styled line per grid row. Off-grid units are not shown.
fn grid_lines(units: &[RenderUnit], grid: &GridSpec) -> Vec<Line<'static>> {
    let mut cells: AHashMap<Position, CellContent> = AHashMap::new();
    for unit in units.iter().filter(|u| grid.contains(u.position)) {
        cells
            .entry(unit.position)
            .and_modify(|content| {
                if *content != CellContent::Player(unit.owner) {
                    *content = CellContent::Contested;
                }
            })
            .or_insert(CellContent::Player(unit.owner));
    }

    let empty = Style::default().fg(GRID.to_terminal());
    (0..grid.rows as i32)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..grid.columns as i32)
                .map(|x| match cells.get(&Position::new(x, y)) {
                    Some(CellContent::Player(owner)) => Span::styled(
                        format!("{}", owner.0 % 10),
                        Style::default().fg(player_color(*owner).to_terminal()),
                    ),
                    Some(CellContent::Contested) => Span::raw("*"),
                    None => Span::styled("·", empty),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Keyboard stop signal: Esc, `q`, or Ctrl-C
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<InputState> {
        let mut state = InputState::default();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => true,
                    KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
                    _ => false,
                };
                state.quit |= quit;
            }
        }
        Ok(state)
    }
}
