//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the unit rosters, applies player orders, resolves
//! turns and produces `GameStateSnapshot`s. Completely headless, so whole
//! games can be replayed deterministically in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use gci_core::commands::{parse_orders, Order, OrderError};
use gci_core::config::{ConfigError, GameConfig};
use gci_core::constants::HEADLINE_PLACEHOLDER;
use gci_core::enums::{AlertLevel, GameOutcome};
use gci_core::events::{Alert, TurnEvent};
use gci_core::state::GameStateSnapshot;
use gci_core::types::normalize_heading;

use crate::systems;
use crate::systems::snapshot::TurnSummary;
use crate::world::{ScoreState, World};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine<R: Rng = ChaCha8Rng> {
    config: GameConfig,
    world: World,
    turn: u32,
    outcome: GameOutcome,
    rng: R,
    score: ScoreState,
    /// Alerts raised between turns, delivered with the next snapshot.
    pending_alerts: Vec<Alert>,
    last_snapshot: GameStateSnapshot,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create a new engine seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config.game, ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create a new engine drawing spawns from the given random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = world_setup::setup_world(&config);
        let score = ScoreState::default();
        let last_snapshot = systems::snapshot::build_snapshot(
            &world,
            TurnSummary {
                turn: 0,
                turn_limit: config.turn_limit,
                outcome: GameOutcome::Active,
                headline: HEADLINE_PLACEHOLDER.to_string(),
                events: Vec::new(),
                alerts: Vec::new(),
            },
            &score,
        );

        info!(
            interceptors = world.interceptors.len(),
            targets = world.targets.len(),
            turn_limit = config.turn_limit,
            "New game"
        );

        Ok(Self {
            config,
            world,
            turn: 0,
            outcome: GameOutcome::Active,
            rng,
            score,
            pending_alerts: Vec::new(),
            last_snapshot,
        })
    }

    /// Parse and apply a line of orders such as `f1 150 f2 90`.
    ///
    /// Every rejected pair is returned and also queued as a warning alert.
    pub fn submit_orders(&mut self, line: &str) -> Vec<OrderError> {
        let parsed = parse_orders(line);
        for err in &parsed.errors {
            self.reject(err);
        }
        let mut errors = parsed.errors;
        errors.extend(self.issue_orders(&parsed.orders));
        errors
    }

    /// Set desired headings. Each order stands alone: an order with a
    /// non-finite heading, or for a unit that does not exist (or no longer
    /// flies), is rejected without affecting the rest.
    pub fn issue_orders(&mut self, orders: &[Order]) -> Vec<OrderError> {
        let mut errors = Vec::new();
        for order in orders {
            if !order.heading.is_finite() {
                let err = OrderError::InvalidOrderFormat {
                    token: order.heading.to_string(),
                    reason: "heading must be a number of degrees",
                };
                self.reject(&err);
                errors.push(err);
                continue;
            }
            match self.world.interceptor_mut(order.unit) {
                Some(fighter) => fighter.desired_heading = normalize_heading(order.heading),
                None => {
                    let err = OrderError::UnknownUnitReference { unit: order.unit };
                    self.reject(&err);
                    errors.push(err);
                }
            }
        }
        errors
    }

    /// Resolve one turn and return the resulting snapshot.
    ///
    /// Once the game is over this is a no-op returning the final snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.outcome.is_terminal() {
            return self.last_snapshot.clone();
        }

        self.turn += 1;
        let events = self.run_systems();
        let headline = systems::headline::compose(&events);

        let outcome = systems::outcome::evaluate(
            self.world.targets.len(),
            self.world.interceptors.len(),
            self.turn,
            self.config.turn_limit,
        );
        if outcome != self.outcome {
            info!(turn = self.turn, ?outcome, "Game over");
            self.outcome = outcome;
        }

        self.last_snapshot = systems::snapshot::build_snapshot(
            &self.world,
            TurnSummary {
                turn: self.turn,
                turn_limit: self.config.turn_limit,
                outcome: self.outcome,
                headline,
                events,
                alerts: std::mem::take(&mut self.pending_alerts),
            },
            &self.score,
        );
        self.last_snapshot.clone()
    }

    /// The snapshot produced by the most recent turn (turn 0 before any).
    pub fn snapshot(&self) -> &GameStateSnapshot {
        &self.last_snapshot
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for arranging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Run all systems in order, collecting the turn's events.
    fn run_systems(&mut self) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        // 1. Interceptors: fly, refuel, fuel check
        systems::interceptors::run(&mut self.world, self.turn, &mut events, &mut self.score);
        // 2. Bombers: fly, fuel check, interception, bombing
        systems::bombers::run(
            &mut self.world,
            &self.config,
            self.turn,
            &mut events,
            &mut self.score,
        );
        // 3. Spawner
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            self.turn,
            &mut events,
            &mut self.score,
        );
        events
    }

    fn reject(&mut self, err: &OrderError) {
        warn!(turn = self.turn, %err, "Order rejected");
        self.pending_alerts.push(Alert {
            level: AlertLevel::Warning,
            message: err.to_string(),
            turn: self.turn,
        });
    }
}
