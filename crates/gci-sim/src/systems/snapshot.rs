//! Snapshot system: reads the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use gci_core::components::{Aircraft, Role};
use gci_core::enums::GameOutcome;
use gci_core::events::{Alert, TurnEvent};
use gci_core::state::*;

use crate::world::{ScoreState, World};

/// Per-turn values the world does not carry.
pub struct TurnSummary {
    pub turn: u32,
    pub turn_limit: u32,
    pub outcome: GameOutcome,
    pub headline: String,
    pub events: Vec<TurnEvent>,
    pub alerts: Vec<Alert>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, summary: TurnSummary, score: &ScoreState) -> GameStateSnapshot {
    GameStateSnapshot {
        map: world.bounds,
        turn: summary.turn,
        turn_limit: summary.turn_limit,
        outcome: summary.outcome,
        headline: summary.headline,
        events: summary.events,
        alerts: summary.alerts,
        interceptors: build_aircraft(&world.interceptors),
        bombers: build_aircraft(&world.bombers),
        targets: world
            .targets
            .iter()
            .map(|t| TargetView {
                id: t.id,
                position: t.position,
                cell: t.position.cell(),
            })
            .collect(),
        home_base: BaseView {
            position: world.home_base.position,
            cell: world.home_base.position.cell(),
        },
        wrecks: world
            .wrecks
            .iter()
            .map(|w| WreckView {
                cell: w.cell,
                cause: w.cause,
                turn: w.turn,
            })
            .collect(),
        score: ScoreView {
            bombers_spawned: score.bombers_spawned,
            bombers_intercepted: score.bombers_intercepted,
            bombers_crashed: score.bombers_crashed,
            targets_lost: score.targets_lost,
            interceptors_lost: score.interceptors_lost,
        },
    }
}

fn build_aircraft(roster: &[Aircraft]) -> Vec<AircraftView> {
    roster
        .iter()
        .filter(|a| a.alive)
        .map(|a| AircraftView {
            id: a.id,
            kind: a.kind(),
            position: a.position,
            cell: a.cell(),
            heading: a.heading,
            desired_heading: a.desired_heading,
            fuel: a.fuel,
            max_fuel: a.profile.max_fuel,
            target: match a.role {
                Role::Bomber { target } => Some(target),
                Role::Interceptor => None,
            },
        })
        .collect()
}
