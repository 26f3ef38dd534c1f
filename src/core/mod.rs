pub mod config;
pub mod error;
pub mod types;

pub use config::{ArenaConfig, GameConfig, GridConfig, SpawnConfig, SpawnLayout};
pub use error::{ArenaError, Result};
pub use types::{Direction, GridSpec, PlayerId, Position, Tick};
