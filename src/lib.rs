//! Grid Arena - alignment contest between pluggable bots

pub mod core;
pub mod render;
pub mod simulation;
pub mod strategy;

pub use crate::core::{ArenaConfig, ArenaError, Result};
pub use crate::simulation::{SimulationEngine, StopReason, TickOutcome};
pub use crate::strategy::{Action, Bot, StrategyRegistry};
