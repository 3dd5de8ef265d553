//! Refuel rule for interceptors over the home base.

use tracing::debug;

use gci_core::components::{Aircraft, HomeBase, Role};
use gci_core::constants::REFUEL_RADIUS;
use gci_core::events::TurnEvent;

/// Top up an interceptor whose cell is within [`REFUEL_RADIUS`] of the base.
///
/// Must run before the fuel-exhaustion check so a unit landing on its last
/// drop of fuel survives. Returns whether fuel was added.
pub fn run(aircraft: &mut Aircraft, base: &HomeBase, events: &mut Vec<TurnEvent>) -> bool {
    if aircraft.role != Role::Interceptor {
        return false;
    }
    if !in_range(aircraft, base) || aircraft.fuel >= aircraft.profile.max_fuel {
        return false;
    }

    debug!(
        interceptor = aircraft.id,
        fuel = aircraft.fuel,
        max_fuel = aircraft.profile.max_fuel,
        "Refuelled at home base"
    );
    aircraft.fuel = aircraft.profile.max_fuel;
    events.push(TurnEvent::Refueled {
        interceptor: aircraft.id,
    });
    true
}

/// Whether the aircraft sits close enough to the base to take on fuel.
pub fn in_range(aircraft: &Aircraft, base: &HomeBase) -> bool {
    aircraft.cell().distance_to(&base.position.cell()) <= REFUEL_RADIUS
}
