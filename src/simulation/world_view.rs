//! A bot's read-only view of the simulation
//!
//! Built fresh for every decision. Roster positions are live: units earlier
//! in the tick order have already moved, later ones have not. The occupied
//! cells are the set recomputed at the end of the previous tick.

use crate::core::types::{GridSpec, PlayerId, Position, Tick};
use crate::simulation::occupancy::OccupiedCells;
use crate::simulation::player::Player;
use crate::simulation::unit::Unit;

/// Borrowed engine state shared by every decision of one player's turn
pub(crate) struct TickScope<'a> {
    pub tick: Tick,
    pub grid: GridSpec,
    pub occupied: &'a OccupiedCells,
    /// Players with lower ids than the acting one
    pub earlier: &'a [Player],
    /// Players with higher ids than the acting one
    pub later: &'a [Player],
}

/// Decision context handed to `Bot::decide`
pub struct WorldView<'a> {
    tick: Tick,
    grid: GridSpec,
    occupied: &'a OccupiedCells,
    earlier: &'a [Player],
    own_id: PlayerId,
    own_units: &'a [Unit],
    later: &'a [Player],
}

impl<'a> WorldView<'a> {
    pub(crate) fn new(scope: &TickScope<'a>, own_id: PlayerId, own_units: &'a [Unit]) -> Self {
        Self {
            tick: scope.tick,
            grid: scope.grid,
            occupied: scope.occupied,
            earlier: scope.earlier,
            own_id,
            own_units,
            later: scope.later,
        }
    }

    /// Tick currently being simulated (the first tick is 1)
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Cells occupied at the end of the previous tick
    pub fn occupied(&self) -> &'a OccupiedCells {
        self.occupied
    }

    /// Id of the player whose unit is deciding
    pub fn own_id(&self) -> PlayerId {
        self.own_id
    }

    pub fn own_units(&self) -> &'a [Unit] {
        self.own_units
    }

    pub fn player_count(&self) -> usize {
        self.earlier.len() + 1 + self.later.len()
    }

    /// Live roster of any player; empty for unknown ids
    pub fn units_of(&self, player: PlayerId) -> &'a [Unit] {
        let own = self.own_id.index();
        let idx = player.index();
        if idx < own {
            self.earlier.get(idx).map(Player::units).unwrap_or(&[])
        } else if idx == own {
            self.own_units
        } else {
            self.later
                .get(idx - own - 1)
                .map(Player::units)
                .unwrap_or(&[])
        }
    }

    /// Every roster in player id order
    pub fn rosters(&self) -> impl Iterator<Item = (PlayerId, &'a [Unit])> + '_ {
        (0..self.player_count()).map(move |idx| {
            let id = PlayerId(idx as u32);
            (id, self.units_of(id))
        })
    }

    /// Every unit in tick order
    pub fn all_units(&self) -> impl Iterator<Item = &'a Unit> + '_ {
        self.rosters().flat_map(|(_, units)| units.iter())
    }

    /// Units of other players, in tick order
    pub fn opponent_units(&self) -> impl Iterator<Item = &'a Unit> + '_ {
        self.rosters()
            .filter(move |(id, _)| *id != self.own_id)
            .flat_map(|(_, units)| units.iter())
    }

    /// Whether any unit stands on `pos` right now, including moves made
    /// earlier this tick
    pub fn is_occupied_now(&self, pos: Position) -> bool {
        self.all_units().any(|unit| unit.position() == pos)
    }
}
