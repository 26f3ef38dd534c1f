//! Squad-alignment bots
//!
//! Every unit steps toward the median line of its own squad. Units never
//! overshoot the median, so the median itself stays put and the squad
//! converges in at most (grid span) ticks.

use crate::core::types::Direction;
use crate::simulation::unit::Unit;
use crate::simulation::world_view::WorldView;
use crate::strategy::{Action, Bot, StrategyFault};

/// Line the squad gathers on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Share one x coordinate
    Column,
    /// Share one y coordinate
    Row,
}

#[derive(Debug, Clone, Copy)]
pub struct RushBot {
    axis: Axis,
}

impl RushBot {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    fn coordinate(&self, unit: &Unit) -> i32 {
        match self.axis {
            Axis::Column => unit.position().x,
            Axis::Row => unit.position().y,
        }
    }
}

impl Bot for RushBot {
    fn decide(&mut self, unit: &Unit, world: &WorldView<'_>) -> Result<Action, StrategyFault> {
        let mut coords: Vec<i32> = world.own_units().iter().map(|u| self.coordinate(u)).collect();
        if coords.is_empty() {
            return Err(StrategyFault::new("squad is empty"));
        }
        coords.sort_unstable();
        let target = coords[(coords.len() - 1) / 2];
        let current = self.coordinate(unit);

        let direction = match (self.axis, current.cmp(&target)) {
            (_, std::cmp::Ordering::Equal) => return Ok(Action::Hold),
            (Axis::Column, std::cmp::Ordering::Less) => Direction::Right,
            (Axis::Column, std::cmp::Ordering::Greater) => Direction::Left,
            (Axis::Row, std::cmp::Ordering::Less) => Direction::Down,
            (Axis::Row, std::cmp::Ordering::Greater) => Direction::Up,
        };
        Ok(Action::Step(direction))
    }
}
