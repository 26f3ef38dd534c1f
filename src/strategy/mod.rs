//! Pluggable decision-making for player squads
//!
//! Architecture: Trait + Registry
//! - `Bot` trait is the only contract a strategy has to satisfy
//! - `StrategyRegistry` maps string identifiers to bot factories and is
//!   populated before any simulation is constructed
//! - Bots see the world through a read-only `WorldView` and return an
//!   `Action`; they never touch engine state directly

pub mod bots;
pub mod registry;

pub use registry::{BotFactory, ResolvedStrategy, StrategyRegistry};

use thiserror::Error;

use crate::core::types::{Direction, PlayerId, Position};
use crate::simulation::unit::Unit;
use crate::simulation::world_view::WorldView;

/// Decision returned by a bot for one unit on one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stay on the current cell
    Hold,
    /// Move one cell in a direction
    Step(Direction),
    /// Jump straight to a cell. Not bounds-checked by the core.
    MoveTo(Position),
}

impl Action {
    /// Target cell when applied from `from`, or None if the step overflows
    pub fn resolve(self, from: Position) -> Option<Position> {
        match self {
            Action::Hold => Some(from),
            Action::Step(direction) => from.checked_step(direction),
            Action::MoveTo(target) => Some(target),
        }
    }
}

/// Failure reported by a strategy while deciding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StrategyFault(pub String);

impl StrategyFault {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Construction input handed to a bot factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSeed {
    /// Player the bot will command
    pub player: PlayerId,
    /// Deterministic RNG seed for this player
    pub seed: u64,
}

impl BotSeed {
    /// Derive a per-player seed from the match seed
    pub fn derive(player: PlayerId, match_seed: u64) -> Self {
        Self {
            player,
            seed: match_seed.wrapping_add(player.0 as u64),
        }
    }
}

/// Trait for strategy implementations
pub trait Bot {
    /// Choose the next action for `unit`
    ///
    /// Called once per unit per tick, in player id then roster order. Units
    /// earlier in that order have already moved this tick when `world` is read.
    fn decide(&mut self, unit: &Unit, world: &WorldView<'_>) -> Result<Action, StrategyFault>;
}
