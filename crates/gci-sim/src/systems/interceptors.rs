//! Phase 1: fly, refuel and fuel-check every interceptor.

use gci_core::events::TurnEvent;

use crate::systems::{attrition, headline, kinematics, refuel};
use crate::world::{ScoreState, World};

/// Resolve the interceptor phase and replace the roster with its survivors.
pub fn run(world: &mut World, turn: u32, events: &mut Vec<TurnEvent>, score: &mut ScoreState) {
    let roster = std::mem::take(&mut world.interceptors);
    let mut survivors = Vec::with_capacity(roster.len());

    for mut fighter in roster {
        kinematics::advance(&mut fighter, &world.bounds);
        refuel::run(&mut fighter, &world.home_base, events);
        if !attrition::run(&mut fighter, world, turn, events, score) {
            continue;
        }
        events.push(headline::position_report(&fighter));
        survivors.push(fighter);
    }

    world.interceptors = survivors;
}
