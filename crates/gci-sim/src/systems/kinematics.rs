//! Flight kinematics shared by every aircraft role.
//!
//! One call to [`advance`] is one turn of flight: turn toward the desired
//! heading (rate-limited, shorter arc), fly `max_speed` cells along the new
//! heading, clamp to the map, burn one unit of fuel.

use glam::DVec2;

use gci_core::components::Aircraft;
use gci_core::types::{heading_delta, normalize_heading, MapBounds, Position};

/// Fly one turn. Aircraft with no fuel left are inert.
pub fn advance(aircraft: &mut Aircraft, bounds: &MapBounds) {
    if aircraft.fuel == 0 {
        return;
    }

    aircraft.heading = turn_toward(
        aircraft.heading,
        aircraft.desired_heading,
        aircraft.profile.max_turn,
    );

    // Rows grow downward, so the y component is subtracted.
    let step = DVec2::from_angle(aircraft.heading.to_radians()) * aircraft.profile.max_speed;
    let moved = Position::new(aircraft.position.x + step.x, aircraft.position.y - step.y);
    aircraft.position = bounds.clamp(moved);

    aircraft.fuel -= 1;
}

/// New heading after turning at most `max_turn` degrees toward `desired`.
pub fn turn_toward(heading: f64, desired: f64, max_turn: f64) -> f64 {
    let delta = heading_delta(heading, desired).clamp(-max_turn, max_turn);
    normalize_heading(heading + delta)
}
