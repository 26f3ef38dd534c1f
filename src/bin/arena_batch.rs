//! Headless Batch Runner
//!
//! Plays many seeded matches between the same strategies and reports how
//! often each seat won.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use grid_arena::core::error::Result;
use grid_arena::core::ArenaConfig;
use grid_arena::render::{FrameClock, LogRenderer, NeverQuit};
use grid_arena::simulation::{SimulationEngine, StopReason};
use grid_arena::strategy::StrategyRegistry;

/// Headless Batch Runner - repeated matches for comparing strategies
#[derive(Parser, Debug)]
#[command(name = "arena_batch")]
#[command(about = "Run seeded headless matches and report win counts")]
struct Args {
    /// Strategy identifiers, one per player
    #[arg(required = true)]
    strategies: Vec<String>,

    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    matches: u32,

    /// Seed of the first match; match i uses seed + i
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum ticks per match before it counts as a draw
    #[arg(long, default_value_t = 2000)]
    max_ticks: u64,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

#[derive(Serialize)]
struct SeatResult {
    player: u32,
    strategy: String,
    wins: u32,
}

#[derive(Serialize)]
struct BatchResult {
    matches: u32,
    draws: u32,
    average_ticks: f64,
    seats: Vec<SeatResult>,
    first_seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grid_arena=warn")),
        )
        .init();

    let registry = StrategyRegistry::with_builtins();
    let base = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let mut seats: Vec<SeatResult> = args
        .strategies
        .iter()
        .enumerate()
        .map(|(idx, name)| SeatResult {
            player: idx as u32,
            strategy: name.clone(),
            wins: 0,
        })
        .collect();
    let mut draws = 0u32;
    let mut total_ticks = 0u64;

    for i in 0..args.matches {
        let mut config = base.clone();
        config.game.seed = args.seed.wrapping_add(i as u64);

        let mut engine = SimulationEngine::new(&registry, &args.strategies, &config)?;
        let mut renderer = LogRenderer::new(config.game.caption.clone());
        let summary = engine.run_for(
            args.max_ticks,
            &mut NeverQuit,
            &mut renderer,
            &mut FrameClock::unpaced(),
        )?;

        total_ticks += summary.ticks;
        match (summary.stop_reason, summary.winner) {
            (StopReason::Victory, Some(winner)) => {
                if let Some(seat) = seats.get_mut(winner.player.index()) {
                    seat.wins += 1;
                }
            }
            _ => draws += 1,
        }
        tracing::debug!("Match {} finished after {} ticks", i, summary.ticks);
    }

    let result = BatchResult {
        matches: args.matches,
        draws,
        average_ticks: if args.matches > 0 {
            total_ticks as f64 / args.matches as f64
        } else {
            0.0
        },
        seats,
        first_seed: args.seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Batch Result");
            println!("============");
            println!("Matches: {}", result.matches);
            for seat in &result.seats {
                println!(
                    "  Player {} ({}): {} wins",
                    seat.player, seat.strategy, seat.wins
                );
            }
            println!("Draws: {}", result.draws);
            println!("Average ticks: {:.1}", result.average_ticks);
            println!("First seed: {}", result.first_seed);
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
