//! Random walker that stays on the grid

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Direction;
use crate::simulation::unit::Unit;
use crate::simulation::world_view::WorldView;
use crate::strategy::{Action, Bot, StrategyFault};

/// Steps in a random in-bounds direction, or holds, each tick
pub struct RandomWalkBot {
    rng: ChaCha8Rng,
}

impl RandomWalkBot {
    /// Create with a specific RNG seed for deterministic behavior
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomWalkBot {
    fn decide(&mut self, unit: &Unit, world: &WorldView<'_>) -> Result<Action, StrategyFault> {
        let grid = world.grid();
        let mut options = vec![Action::Hold];
        options.extend(
            Direction::ALL
                .into_iter()
                .filter(|&dir| {
                    unit.position()
                        .checked_step(dir)
                        .is_some_and(|target| grid.contains(target))
                })
                .map(Action::Step),
        );

        Ok(options.choose(&mut self.rng).copied().unwrap_or(Action::Hold))
    }
}
