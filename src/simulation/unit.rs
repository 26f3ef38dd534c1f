//! A single piece on the grid

use crate::core::error::{ArenaError, Result};
use crate::core::types::{PlayerId, Position};
use crate::simulation::world_view::WorldView;
use crate::strategy::Bot;

/// One unit of a player's squad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    owner: PlayerId,
    index: usize,
    position: Position,
}

impl Unit {
    pub fn new(owner: PlayerId, index: usize, position: Position) -> Self {
        Self {
            owner,
            index,
            position,
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Position of this unit in its owner's roster
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Ask the owning player's bot where this unit goes next
    ///
    /// The returned target is not clamped or checked for collisions.
    pub fn decide(&self, bot: &mut dyn Bot, world: &WorldView<'_>) -> Result<Position> {
        let action = bot
            .decide(self, world)
            .map_err(|fault| self.strategy_error(world, fault.to_string()))?;

        action.resolve(self.position).ok_or_else(|| {
            self.strategy_error(
                world,
                format!("{:?} from {} leaves the coordinate range", action, self.position),
            )
        })
    }

    pub(crate) fn relocate(&mut self, target: Position) {
        self.position = target;
    }

    fn strategy_error(&self, world: &WorldView<'_>, reason: String) -> ArenaError {
        ArenaError::StrategyError {
            player: self.owner,
            unit: self.index,
            tick: world.tick(),
            reason,
        }
    }
}
