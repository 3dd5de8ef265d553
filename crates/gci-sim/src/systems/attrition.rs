//! Fuel exhaustion: aircraft that run dry go down where they are.

use tracing::info;

use gci_core::components::{Aircraft, Role};
use gci_core::enums::WreckCause;
use gci_core::events::TurnEvent;

use crate::world::{ScoreState, World};

/// Check one aircraft after its flight (and refuel) step.
///
/// An aircraft with no fuel is marked dead and leaves a wreck at its cell.
/// Returns whether it is still flying.
pub fn run(
    aircraft: &mut Aircraft,
    world: &mut World,
    turn: u32,
    events: &mut Vec<TurnEvent>,
    score: &mut ScoreState,
) -> bool {
    if aircraft.fuel > 0 {
        return true;
    }

    let cell = aircraft.cell();
    let cause = match aircraft.role {
        Role::Interceptor => {
            score.interceptors_lost += 1;
            WreckCause::InterceptorCrashed
        }
        Role::Bomber { .. } => {
            score.bombers_crashed += 1;
            WreckCause::BomberCrashed
        }
    };
    info!(
        kind = ?aircraft.kind(),
        unit = aircraft.id,
        x = cell.x,
        y = cell.y,
        "Aircraft out of fuel"
    );

    aircraft.alive = false;
    world.add_wreck(cell, cause, turn);
    events.push(TurnEvent::Crashed {
        kind: aircraft.kind(),
        unit: aircraft.id,
        cell,
    });
    false
}
