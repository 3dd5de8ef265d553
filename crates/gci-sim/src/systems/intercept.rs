//! Interception: a bomber inside the intercept radius of a fighter is shot down.
//!
//! Ties are broken by interceptor roster order, not by distance: the first
//! interceptor in range gets the kill and the scan stops.

use gci_core::components::Aircraft;

/// First live interceptor, in roster order, within `radius` of the bomber.
pub fn find_interceptor<'a>(
    bomber: &Aircraft,
    interceptors: &'a [Aircraft],
    radius: f64,
) -> Option<&'a Aircraft> {
    let bomber_cell = bomber.cell();
    interceptors
        .iter()
        .filter(|fighter| fighter.alive)
        .find(|fighter| fighter.cell().distance_to(&bomber_cell) <= radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gci_core::components::FlightProfile;
    use gci_core::types::Position;

    use crate::world_setup::{spawn_bomber, spawn_interceptor};

    const PROFILE: FlightProfile = FlightProfile {
        max_fuel: 10,
        max_speed: 1.0,
        max_turn: 30.0,
    };

    fn bomber_at(x: f64, y: f64) -> Aircraft {
        spawn_bomber(1, Position::new(x, y), Position::new(0.0, 0.0), PROFILE)
    }

    #[test]
    fn radius_is_inclusive() {
        let fighters = vec![spawn_interceptor(1, Position::new(10.0, 10.0), PROFILE)];
        assert!(find_interceptor(&bomber_at(13.0, 10.0), &fighters, 3.0).is_some());
        assert!(find_interceptor(&bomber_at(13.0, 11.0), &fighters, 3.0).is_none());
    }

    #[test]
    fn first_in_roster_order_wins_over_closest() {
        let fighters = vec![
            spawn_interceptor(1, Position::new(7.0, 10.0), PROFILE),
            spawn_interceptor(2, Position::new(10.0, 10.0), PROFILE),
        ];
        // Fighter 2 sits on top of the bomber, fighter 1 is exactly at range.
        let credited = find_interceptor(&bomber_at(10.0, 10.0), &fighters, 3.0).unwrap();
        assert_eq!(credited.id, 1);
    }

    #[test]
    fn dead_interceptors_are_skipped() {
        let mut fighters = vec![
            spawn_interceptor(1, Position::new(10.0, 10.0), PROFILE),
            spawn_interceptor(2, Position::new(11.0, 10.0), PROFILE),
        ];
        fighters[0].alive = false;
        let credited = find_interceptor(&bomber_at(10.0, 10.0), &fighters, 3.0).unwrap();
        assert_eq!(credited.id, 2);
    }
}
