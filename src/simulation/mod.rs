//! Simulation core: players, units, occupancy, victory and the tick loop

pub mod engine;
pub mod occupancy;
pub mod player;
pub mod spawn;
pub mod unit;
pub mod victory;
pub mod world_view;

pub use engine::{EngineState, RunSummary, SimulationEngine, StopReason, TickOutcome};
pub use occupancy::OccupiedCells;
pub use player::Player;
pub use unit::Unit;
pub use world_view::WorldView;
