//! Built-in strategy and determinism integration tests

use grid_arena::core::config::{ArenaConfig, SpawnLayout};
use grid_arena::core::types::PlayerId;
use grid_arena::render::{ManualClock, NeverQuit, RecordingRenderer};
use grid_arena::simulation::{SimulationEngine, StopReason};
use grid_arena::strategy::StrategyRegistry;

fn lanes_config(units: usize, seed: u64) -> ArenaConfig {
    let mut config = ArenaConfig::default();
    config.game.units_per_player = units;
    config.game.seed = seed;
    config.spawn.layout = SpawnLayout::Lanes;
    config
}

fn play(strategies: &[&str], config: &ArenaConfig, limit: u64) -> (RecordingRenderer, grid_arena::simulation::RunSummary) {
    let registry = StrategyRegistry::with_builtins();
    let mut engine = SimulationEngine::new(&registry, strategies, config).unwrap();
    let mut renderer = RecordingRenderer::new("Arena");
    let summary = engine
        .run_for(limit, &mut NeverQuit, &mut renderer, &mut ManualClock::new(30.0))
        .unwrap();
    (renderer, summary)
}

#[test]
fn test_column_rush_aligns_squad() {
    let (_, summary) = play(&["column_rush"], &lanes_config(4, 1), 200);

    assert_eq!(summary.stop_reason, StopReason::Victory);
    let winner = summary.winner.expect("winner");
    assert_eq!(winner.player, PlayerId(0));
    assert_eq!(winner.strategy, "column_rush");
}

#[test]
fn test_row_rush_aligns_squad() {
    let (_, summary) = play(&["row_rush"], &lanes_config(3, 1), 200);
    assert_eq!(summary.stop_reason, StopReason::Victory);
}

#[test]
fn test_rush_beats_idle_from_lanes() {
    let (renderer, summary) = play(&["idle", "column_rush"], &lanes_config(3, 7), 200);

    let winner = summary.winner.expect("winner");
    assert_eq!(winner.player, PlayerId(1));
    assert_eq!(winner.name, "Player 1");
    assert!(renderer
        .captions
        .last()
        .is_some_and(|c| c.ends_with("WINNER: Player 1 (column_rush)")));
}

#[test]
fn test_idle_squads_never_finish() {
    let (_, summary) = play(&["idle", "idle"], &lanes_config(3, 1), 25);
    assert_eq!(summary.stop_reason, StopReason::TickLimit);
    assert_eq!(summary.ticks, 25);
    assert!(summary.winner.is_none());
}

#[test]
fn test_identical_runs_are_identical() {
    let mut config = ArenaConfig::default();
    config.game.units_per_player = 5;
    config.game.seed = 4242;
    let strategies = ["random_walk", "random_walk", "column_rush"];

    let (first, first_summary) = play(&strategies, &config, 60);
    let (second, second_summary) = play(&strategies, &config, 60);

    assert_eq!(first.frames, second.frames);
    assert_eq!(first_summary, second_summary);
}

#[test]
fn test_seed_changes_random_walk() {
    let mut a = ArenaConfig::default();
    a.game.units_per_player = 5;
    a.game.seed = 1;
    let mut b = a.clone();
    b.game.seed = 2;

    let (first, _) = play(&["random_walk"], &a, 30);
    let (second, _) = play(&["random_walk"], &b, 30);
    assert_ne!(first.frames, second.frames);
}

#[test]
fn test_random_walk_stays_on_grid() {
    let config = lanes_config(4, 99);
    let grid = config.grid_spec();
    let (renderer, _) = play(&["random_walk", "random_walk"], &config, 300);

    for frame in &renderer.frames {
        assert!(frame.iter().all(|unit| grid.contains(unit.position)));
    }
}
