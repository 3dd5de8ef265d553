//! Entity factories for setting up the simulation world.
//!
//! Role-specific spawn behaviour lives here: interceptors start fuelled and
//! facing east, bombers snap straight onto the bearing of their aim point.

use gci_core::components::{Aircraft, FlightProfile, HomeBase, Role, Target};
use gci_core::config::GameConfig;
use gci_core::types::Position;

use crate::world::World;

/// Build the opening world: home base, targets and the interceptor flight.
/// Bombers arrive later through the spawner.
pub fn setup_world(config: &GameConfig) -> World {
    let mut world = World::new(
        config.map,
        HomeBase {
            position: config.home_base,
        },
    );

    world.targets = config
        .targets
        .iter()
        .zip(1..)
        .map(|(&position, id)| Target { id, position })
        .collect();

    world.interceptors = config
        .interceptor_starts
        .iter()
        .zip(1..)
        .map(|(&position, id)| spawn_interceptor(id, position, config.interceptor))
        .collect();

    world
}

/// A fully fuelled interceptor facing east.
pub fn spawn_interceptor(id: u32, position: Position, profile: FlightProfile) -> Aircraft {
    Aircraft {
        id,
        role: Role::Interceptor,
        position,
        heading: 0.0,
        desired_heading: 0.0,
        fuel: profile.max_fuel,
        profile,
        alive: true,
    }
}

/// A fully fuelled bomber already facing its aim point.
///
/// The heading is computed once here and never recomputed, even if the
/// aimed-at target is destroyed before the bomber arrives.
pub fn spawn_bomber(id: u32, position: Position, target: Position, profile: FlightProfile) -> Aircraft {
    let heading = position.heading_to(&target);
    Aircraft {
        id,
        role: Role::Bomber { target },
        position,
        heading,
        desired_heading: heading,
        fuel: profile.max_fuel,
        profile,
        alive: true,
    }
}
