//! Built-in strategies
//!
//! Simple reference bots so a match can be run out of the box. They are
//! registered like any user strategy and get no special treatment.

mod idle;
mod random_walk;
mod rush;

pub use idle::IdleBot;
pub use random_walk::RandomWalkBot;
pub use rush::{Axis, RushBot};

use super::registry::StrategyRegistry;
use super::{Bot, BotSeed};

/// Register every built-in strategy
pub fn register_builtins(registry: &mut StrategyRegistry) {
    registry.register("idle", |_: &BotSeed| Box::new(IdleBot) as Box<dyn Bot>);
    registry.register("random_walk", |seed: &BotSeed| {
        Box::new(RandomWalkBot::new(seed.seed)) as Box<dyn Bot>
    });
    registry.register("column_rush", |_: &BotSeed| {
        Box::new(RushBot::new(Axis::Column)) as Box<dyn Bot>
    });
    registry.register("row_rush", |_: &BotSeed| {
        Box::new(RushBot::new(Axis::Row)) as Box<dyn Bot>
    });
}
