//! Starting positions for every squad

use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::{ArenaConfig, SpawnLayout};
use crate::core::error::{ArenaError, Result};
use crate::core::types::{GridSpec, Position};

/// Compute one list of starting cells per player
///
/// Explicit positions from the config take precedence over the layout.
pub fn spawn_positions(config: &ArenaConfig, player_count: usize) -> Result<Vec<Vec<Position>>> {
    let units = config.game.units_per_player;

    if let Some(lists) = &config.spawn.positions {
        if lists.len() != player_count {
            return Err(ArenaError::InvalidConfig(format!(
                "{} spawn lists configured for {} players",
                lists.len(),
                player_count
            )));
        }
        return Ok(lists.clone());
    }

    let grid = config.grid_spec();
    let total = player_count as u64 * units as u64;
    if total > grid.cell_count() {
        return Err(ArenaError::InvalidConfig(format!(
            "{} units do not fit on a {}x{} grid",
            total, grid.columns, grid.rows
        )));
    }

    match config.spawn.layout {
        SpawnLayout::Scatter => Ok(scatter(grid, player_count, units, config.game.seed)),
        SpawnLayout::Lanes => lanes(grid, player_count, units),
    }
}

/// Distinct random cells, drawn from a seeded RNG
fn scatter(grid: GridSpec, player_count: usize, units: usize, seed: u64) -> Vec<Vec<Position>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = index::sample(&mut rng, grid.cell_count() as usize, player_count * units);
    let columns = grid.columns as usize;

    let positions: Vec<Position> = cells
        .into_iter()
        .map(|cell| Position::new((cell % columns) as i32, (cell / columns) as i32))
        .collect();

    positions.chunks(units).map(<[Position]>::to_vec).collect()
}

/// Diagonal lanes: every unit gets its own column and each squad spans
/// distinct rows, so no squad starts aligned
fn lanes(grid: GridSpec, player_count: usize, units: usize) -> Result<Vec<Vec<Position>>> {
    let lane_count = player_count * units;
    if lane_count > grid.columns as usize || units > grid.rows as usize {
        return Err(ArenaError::InvalidConfig(format!(
            "lanes layout needs {} columns and {} rows, grid is {}x{}",
            lane_count, units, grid.columns, grid.rows
        )));
    }

    let x_stride = (grid.columns as usize / lane_count).max(1);
    let y_stride = (grid.rows as usize / units).max(1);

    Ok((0..player_count)
        .map(|player| {
            (0..units)
                .map(|unit| {
                    let lane = player * units + unit;
                    Position::new((lane * x_stride) as i32, (unit * y_stride) as i32)
                })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::victory::is_aligned;
    use ahash::AHashSet;

    fn config(columns: u32, rows: u32, units: usize, layout: SpawnLayout) -> ArenaConfig {
        let mut config = ArenaConfig::default();
        config.grid.columns = columns;
        config.grid.rows = rows;
        config.game.units_per_player = units;
        config.spawn.layout = layout;
        config
    }

    #[test]
    fn test_scatter_is_distinct_and_in_bounds() {
        let config = config(10, 8, 4, SpawnLayout::Scatter);
        let spawn = spawn_positions(&config, 3).expect("fits");

        assert_eq!(spawn.len(), 3);
        assert!(spawn.iter().all(|squad| squad.len() == 4));

        let all: Vec<Position> = spawn.iter().flatten().copied().collect();
        let distinct: AHashSet<Position> = all.iter().copied().collect();
        assert_eq!(distinct.len(), all.len());
        assert!(all.iter().all(|p| config.grid_spec().contains(*p)));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let config = config(20, 20, 3, SpawnLayout::Scatter);
        assert_eq!(
            spawn_positions(&config, 2).unwrap(),
            spawn_positions(&config, 2).unwrap()
        );
    }

    #[test]
    fn test_lanes_never_start_aligned() {
        let config = config(40, 30, 3, SpawnLayout::Lanes);
        let spawn = spawn_positions(&config, 4).expect("fits");
        for squad in &spawn {
            assert!(!is_aligned(squad.iter().copied()));
        }
    }

    #[test]
    fn test_too_many_units() {
        let config = config(2, 2, 3, SpawnLayout::Scatter);
        assert!(matches!(
            spawn_positions(&config, 2),
            Err(ArenaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_lanes_need_enough_columns() {
        let config = config(5, 10, 3, SpawnLayout::Lanes);
        assert!(spawn_positions(&config, 2).is_err());
    }

    #[test]
    fn test_explicit_positions_must_match_player_count() {
        let mut config = config(10, 10, 1, SpawnLayout::Scatter);
        config.spawn.positions = Some(vec![vec![Position::new(0, 0)]]);
        assert!(spawn_positions(&config, 1).is_ok());
        assert!(spawn_positions(&config, 2).is_err());
    }
}
