//! Grid Arena - Entry Point
//!
//! Runs one match between the named strategies, either in the terminal or
//! headless. Controls in the terminal: Esc / q / Ctrl-C quit.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use grid_arena::core::error::Result;
use grid_arena::core::ArenaConfig;
use grid_arena::render::{
    Clock, FrameClock, InputSource, KeyboardInput, LogRenderer, NeverQuit, Renderer,
    TerminalRenderer,
};
use grid_arena::simulation::{RunSummary, SimulationEngine};
use grid_arena::strategy::StrategyRegistry;

/// Grid Arena - squads of bots race to line up
#[derive(Parser, Debug)]
#[command(name = "grid-arena")]
#[command(about = "Run a grid alignment contest between bot strategies")]
struct Args {
    /// Strategy identifiers, one per player (player ids follow this order)
    #[arg(required_unless_present = "list_strategies")]
    strategies: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run without the terminal UI
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Random seed for spawn scatter and bots
    #[arg(long)]
    seed: Option<u64>,

    /// Target ticks per second (terminal mode)
    #[arg(long)]
    fps: Option<u32>,

    /// Output format for the final summary: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// List registered strategies and exit
    #[arg(long)]
    list_strategies: bool,
}

#[derive(Serialize)]
struct MatchReport<'a> {
    strategies: &'a [String],
    seed: u64,
    #[serde(flatten)]
    summary: RunSummary,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never land in the terminal UI
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grid_arena=info")),
        )
        .init();

    let registry = StrategyRegistry::with_builtins();

    if args.list_strategies {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.game.seed = seed;
    }
    if let Some(fps) = args.fps {
        config.game.fps = fps;
    }
    if args.max_ticks.is_some() {
        config.game.max_ticks = args.max_ticks;
    }

    let mut engine = SimulationEngine::new(&registry, &args.strategies, &config)?;
    tracing::info!(
        "Starting match on a {}x{} grid (seed {})",
        config.grid.columns,
        config.grid.rows,
        config.game.seed
    );

    let summary = if args.headless {
        let mut renderer = LogRenderer::new(config.game.caption.clone());
        let mut input = NeverQuit;
        let mut clock = FrameClock::unpaced();
        run(&mut engine, &config, &mut input, &mut renderer, &mut clock)?
    } else {
        // Dropped at the end of this block, restoring the terminal before printing
        let mut renderer = TerminalRenderer::new(config.game.caption.clone())?;
        let mut input = KeyboardInput::new();
        let mut clock = FrameClock::paced(config.game.fps);
        run(&mut engine, &config, &mut input, &mut renderer, &mut clock)?
    };

    let report = MatchReport {
        strategies: &args.strategies,
        seed: config.game.seed,
        summary,
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_text(&report),
        other => {
            eprintln!("Unknown format '{}', defaulting to text", other);
            print_text(&report);
        }
    }

    Ok(())
}

fn run(
    engine: &mut SimulationEngine,
    config: &ArenaConfig,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    clock: &mut dyn Clock,
) -> Result<RunSummary> {
    match config.game.max_ticks {
        Some(limit) => engine.run_for(limit, input, renderer, clock),
        None => engine.run(input, renderer, clock),
    }
}

fn print_text(report: &MatchReport<'_>) {
    println!("Match Result");
    println!("============");
    println!("Strategies: {}", report.strategies.join(" vs "));
    println!("Ticks: {}", report.summary.ticks);
    println!("Stopped by: {:?}", report.summary.stop_reason);
    match &report.summary.winner {
        Some(winner) => println!("Winner: {} ({})", winner.name, winner.strategy),
        None => println!("Winner: none"),
    }
    println!("Seed: {}", report.seed);
}
