use thiserror::Error;

use crate::core::types::{PlayerId, Tick};

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Strategy error (player {player}, unit {unit}, tick {tick}): {reason}")]
    StrategyError {
        player: PlayerId,
        unit: usize,
        tick: Tick,
        reason: String,
    },

    #[error("Simulation already finished")]
    SimulationFinished,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
