use crate::simulation::unit::Unit;
use crate::simulation::world_view::WorldView;
use crate::strategy::{Action, Bot, StrategyFault};

/// Never moves
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleBot;

impl Bot for IdleBot {
    fn decide(&mut self, _unit: &Unit, _world: &WorldView<'_>) -> Result<Action, StrategyFault> {
        Ok(Action::Hold)
    }
}
