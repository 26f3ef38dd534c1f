//! Occupied cells, derived once per tick

use ahash::AHashMap;

use crate::core::types::Position;
use crate::simulation::player::Player;

/// Positions of every unit at a tick boundary
///
/// Tick-scoped: rebuilt wholesale after all units act and carries no
/// history. Coinciding units are all counted, so `len()` always equals the
/// total number of units.
#[derive(Debug, Clone, Default)]
pub struct OccupiedCells {
    cells: Vec<Position>,
    counts: AHashMap<Position, u32>,
}

impl OccupiedCells {
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let cells: Vec<Position> = positions.into_iter().collect();
        let mut counts = AHashMap::with_capacity(cells.len());
        for &cell in &cells {
            *counts.entry(cell).or_insert(0) += 1;
        }
        Self { cells, counts }
    }

    /// Number of units tracked (not distinct cells)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.counts.contains_key(&pos)
    }

    /// How many units stand on `pos`
    pub fn occupants(&self, pos: Position) -> u32 {
        self.counts.get(&pos).copied().unwrap_or(0)
    }

    pub fn distinct_cells(&self) -> usize {
        self.counts.len()
    }

    /// Positions in player id then roster order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

/// Rebuild the occupied cells from current unit positions
pub fn recompute(players: &[Player]) -> OccupiedCells {
    OccupiedCells::from_positions(players.iter().flat_map(|player| player.positions()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_coinciding_units() {
        let cells = OccupiedCells::from_positions([
            Position::new(1, 1),
            Position::new(1, 1),
            Position::new(2, 3),
        ]);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells.distinct_cells(), 2);
        assert_eq!(cells.occupants(Position::new(1, 1)), 2);
        assert!(cells.is_occupied(Position::new(2, 3)));
        assert!(!cells.is_occupied(Position::new(0, 0)));
        assert_eq!(cells.occupants(Position::new(0, 0)), 0);
    }

    #[test]
    fn test_iteration_keeps_order() {
        let positions = vec![Position::new(5, 0), Position::new(0, 5), Position::new(5, 0)];
        let cells = OccupiedCells::from_positions(positions.clone());
        assert_eq!(cells.iter().collect::<Vec<_>>(), positions);
    }

    #[test]
    fn test_empty() {
        let cells = OccupiedCells::default();
        assert!(cells.is_empty());
        assert_eq!(cells.len(), 0);
    }
}
