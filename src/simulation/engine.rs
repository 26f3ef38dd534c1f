//! Simulation engine: owns the players and drives the tick loop
//!
//! Tick order is fixed:
//! 1. poll input (quit ends the simulation before anything moves)
//! 2. every unit acts, player id ascending then roster order
//! 3. occupied cells are recomputed
//! 4. victory is evaluated (a new winner finishes the engine)
//! 5. the renderer draws the new state
//! 6. the clock paces the loop and the caption is refreshed

use serde::Serialize;

use crate::core::config::ArenaConfig;
use crate::core::error::{ArenaError, Result};
use crate::core::types::{GridSpec, PlayerId, Position, Tick};
use crate::render::{Clock, InputSource, RenderUnit, Renderer, WinnerInfo};
use crate::simulation::occupancy::{self, OccupiedCells};
use crate::simulation::player::Player;
use crate::simulation::spawn::spawn_positions;
use crate::simulation::victory;
use crate::simulation::world_view::TickScope;
use crate::strategy::StrategyRegistry;

/// Engine lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineState {
    Running,
    Finished,
}

/// What a single tick ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Units moved, nobody won yet
    Continued,
    /// Stop signal observed; no unit moved this tick
    Quit,
    /// This tick produced the winner
    Victory(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Victory,
    Quit,
    TickLimit,
}

/// Summary returned by `run` and `run_for`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Ticks completed over the whole simulation
    pub ticks: Tick,
    pub winner: Option<WinnerInfo>,
    pub stop_reason: StopReason,
}

pub struct SimulationEngine {
    players: Vec<Player>,
    occupied: OccupiedCells,
    winner: Option<PlayerId>,
    state: EngineState,
    tick: Tick,
    grid: GridSpec,
}

impl SimulationEngine {
    /// Resolve every strategy, then create one player per name
    ///
    /// Fails with `UnknownStrategy` before any player exists if a name is
    /// not registered.
    pub fn new<S: AsRef<str>>(
        registry: &StrategyRegistry,
        strategies: &[S],
        config: &ArenaConfig,
    ) -> Result<Self> {
        config.validate().map_err(ArenaError::InvalidConfig)?;
        if strategies.is_empty() {
            return Err(ArenaError::InvalidConfig(
                "at least one strategy is required".into(),
            ));
        }

        let resolved = registry.resolve_all(strategies)?;
        let spawn = spawn_positions(config, resolved.len())?;

        let players: Vec<Player> = resolved
            .iter()
            .zip(&spawn)
            .enumerate()
            .map(|(idx, (strategy, positions))| {
                Player::new(PlayerId(idx as u32), strategy, positions, config.game.seed)
            })
            .collect();

        for player in &players {
            tracing::info!(
                "{} plays '{}' with {} units",
                player.name(),
                player.strategy(),
                player.unit_count()
            );
        }

        let occupied = occupancy::recompute(&players);

        Ok(Self {
            players,
            occupied,
            winner: None,
            state: EngineState::Running,
            tick: 0,
            grid: config.grid_spec(),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    /// Number of completed ticks
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn winner_info(&self) -> Option<WinnerInfo> {
        let player = self.player(self.winner?)?;
        Some(WinnerInfo {
            player: player.id(),
            name: player.name().to_string(),
            strategy: player.strategy().to_string(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn occupied_cells(&self) -> &OccupiedCells {
        &self.occupied
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn unit_count(&self) -> usize {
        self.players.iter().map(Player::unit_count).sum()
    }

    /// Every unit in tick order, as handed to the renderer
    pub fn snapshot(&self) -> Vec<RenderUnit> {
        self.players
            .iter()
            .flat_map(|player| player.units())
            .map(|unit| RenderUnit {
                owner: unit.owner(),
                position: unit.position(),
            })
            .collect()
    }

    /// Advance one tick
    ///
    /// Errors with `SimulationFinished` once the engine is finished. A bot
    /// failure aborts the tick and commits nothing: units that already moved
    /// are put back and the tick counter is not advanced.
    pub fn tick(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> Result<TickOutcome> {
        if self.is_finished() {
            return Err(ArenaError::SimulationFinished);
        }

        if input.poll()?.quit {
            tracing::info!("Stop signal received after {} ticks", self.tick);
            self.state = EngineState::Finished;
            return Ok(TickOutcome::Quit);
        }

        let tick = self.tick + 1;
        let committed: Vec<Vec<Position>> = self
            .players
            .iter()
            .map(|player| player.positions().collect())
            .collect();
        if let Err(e) = self.update_units(tick) {
            for (player, positions) in self.players.iter_mut().zip(&committed) {
                player.restore_positions(positions);
            }
            tracing::warn!("Tick {} aborted, unit moves rolled back: {}", tick, e);
            return Err(e);
        }
        self.tick = tick;

        self.occupied = occupancy::recompute(&self.players);
        debug_assert_eq!(self.occupied.len(), self.unit_count());

        let previous = self.winner;
        self.winner = victory::evaluate(&self.players, previous);
        let outcome = match (previous, self.winner) {
            (None, Some(winner)) => {
                if let Some(player) = self.player(winner) {
                    tracing::info!(
                        "{} ({}) aligned its squad on tick {}",
                        player.name(),
                        player.strategy(),
                        tick
                    );
                }
                TickOutcome::Victory(winner)
            }
            _ => TickOutcome::Continued,
        };

        // Victory is terminal even if presenting the final frame fails
        if let TickOutcome::Victory(_) = outcome {
            self.state = EngineState::Finished;
        }

        renderer.draw(&self.snapshot(), &self.grid)?;
        clock.tick();
        renderer.update_caption(clock.fps(), self.winner_info().as_ref())?;

        tracing::debug!("Tick {} complete: {:?}", tick, outcome);
        Ok(outcome)
    }

    /// Tick until finished
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> Result<RunSummary> {
        self.run_until(None, input, renderer, clock)
    }

    /// Tick until finished or `limit` more ticks have run
    ///
    /// Hitting the limit leaves the engine `Running`.
    pub fn run_for(
        &mut self,
        limit: u64,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> Result<RunSummary> {
        self.run_until(Some(limit), input, renderer, clock)
    }

    fn run_until(
        &mut self,
        limit: Option<u64>,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> Result<RunSummary> {
        let mut executed = 0u64;
        let stop_reason = loop {
            if limit.is_some_and(|limit| executed >= limit) {
                break StopReason::TickLimit;
            }
            match self.tick(input, renderer, clock)? {
                TickOutcome::Continued => executed += 1,
                TickOutcome::Quit => break StopReason::Quit,
                TickOutcome::Victory(_) => break StopReason::Victory,
            }
        };

        Ok(RunSummary {
            ticks: self.tick,
            winner: self.winner_info(),
            stop_reason,
        })
    }

    /// Let every unit act once, player id ascending then roster order
    fn update_units(&mut self, tick: Tick) -> Result<()> {
        for idx in 0..self.players.len() {
            let (earlier, rest) = self.players.split_at_mut(idx);
            let Some((current, later)) = rest.split_first_mut() else {
                break;
            };

            let scope = TickScope {
                tick,
                grid: self.grid,
                occupied: &self.occupied,
                earlier,
                later,
            };

            for unit in 0..current.unit_count() {
                current.act_unit(unit, &scope)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("state", &self.state)
            .field("tick", &self.tick)
            .field("winner", &self.winner)
            .field("players", &self.players)
            .finish()
    }
}
