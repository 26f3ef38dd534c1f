//! Players: a bot plus the squad it commands

use crate::core::error::Result;
use crate::core::types::{PlayerId, Position};
use crate::simulation::unit::Unit;
use crate::simulation::world_view::{TickScope, WorldView};
use crate::strategy::{Bot, BotSeed, ResolvedStrategy};

/// A contestant with exclusive ownership of its bot and units
pub struct Player {
    id: PlayerId,
    name: String,
    strategy: String,
    bot: Box<dyn Bot>,
    units: Vec<Unit>,
}

impl Player {
    /// Instantiate the strategy's bot and spawn one unit per position
    pub fn new(
        id: PlayerId,
        strategy: &ResolvedStrategy,
        spawn: &[Position],
        match_seed: u64,
    ) -> Self {
        let bot = strategy.instantiate(&BotSeed::derive(id, match_seed));
        let units = spawn
            .iter()
            .enumerate()
            .map(|(index, &position)| Unit::new(id, index, position))
            .collect();

        Self {
            id,
            name: format!("Player {}", id),
            strategy: strategy.name().to_string(),
            bot,
            units,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the strategy this player was built from
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Squad in roster order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.units.iter().map(Unit::position)
    }

    /// Let unit `index` act: consult the bot, then apply the target cell
    pub(crate) fn act_unit(&mut self, index: usize, scope: &TickScope<'_>) -> Result<Position> {
        let target = {
            let view = WorldView::new(scope, self.id, &self.units);
            self.units[index].decide(self.bot.as_mut(), &view)?
        };
        self.units[index].relocate(target);
        Ok(target)
    }

    /// Put every unit back on `positions`, in roster order
    pub(crate) fn restore_positions(&mut self, positions: &[Position]) {
        for (unit, &position) in self.units.iter_mut().zip(positions) {
            unit.relocate(position);
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("strategy", &self.strategy)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}
