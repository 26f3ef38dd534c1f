//! Arena configuration with documented defaults
//!
//! Everything the core consumes as a constant (grid bounds, squad size,
//! pacing) is collected here. Values can be loaded from a TOML file whose
//! sections mirror the structs below; missing sections fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{GridSpec, Position};

/// Grid geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns (cells along x)
    pub columns: u32,
    /// Number of rows (cells along y)
    pub rows: u32,
    /// Pixel size of one cell, for graphical renderers
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 30,
            cell_size: 16,
        }
    }
}

/// Per-match settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Units each player commands. A squad of one wins on the first tick.
    pub units_per_player: usize,
    /// Target ticks per second for paced clocks
    pub fps: u32,
    /// Window/terminal caption prefix
    pub caption: String,
    /// Seed for spawn scatter and bot RNGs
    pub seed: u64,
    /// Optional cap on ticks; None runs until victory or quit
    pub max_ticks: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            units_per_player: 3,
            fps: 30,
            caption: "Grid Arena".to_string(),
            seed: 12345,
            max_ticks: None,
        }
    }
}

/// How starting positions are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnLayout {
    /// Distinct random cells drawn from the seeded RNG
    #[default]
    Scatter,
    /// Each player gets its own diagonal lane, so no squad starts aligned
    Lanes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub layout: SpawnLayout,
    /// Explicit starting positions, one list per player (overrides `layout`)
    pub positions: Option<Vec<Vec<Position>>>,
}

/// Complete arena configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub grid: GridConfig,
    pub game: GameConfig,
    pub spawn: SpawnConfig,
}

impl ArenaConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(contents)?;
        config.validate().map_err(ArenaError::InvalidConfig)?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.grid.columns, self.grid.rows, self.grid.cell_size)
    }

    /// Validate configuration for internal consistency
    ///
    /// Checks that depend on the number of players live in the spawner.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(format!(
                "grid must have at least one cell ({}x{})",
                self.grid.columns, self.grid.rows
            ));
        }

        if self.grid.columns > i32::MAX as u32 || self.grid.rows > i32::MAX as u32 {
            return Err("grid dimensions exceed the coordinate range".into());
        }

        if self.game.units_per_player == 0 {
            return Err("units_per_player must be at least 1".into());
        }

        if self.game.fps == 0 {
            return Err("fps must be positive".into());
        }

        if let Some(lists) = &self.spawn.positions {
            let grid = self.grid_spec();
            for (player, list) in lists.iter().enumerate() {
                if list.len() != self.game.units_per_player {
                    return Err(format!(
                        "spawn list for player {} has {} positions, expected {}",
                        player,
                        list.len(),
                        self.game.units_per_player
                    ));
                }
                if let Some(outside) = list.iter().find(|p| !grid.contains(**p)) {
                    return Err(format!(
                        "spawn position {} for player {} is outside the grid",
                        outside, player
                    ));
                }
            }
        }

        Ok(())
    }
}
