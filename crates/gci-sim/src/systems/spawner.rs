//! Bomber spawner: one bomber every `spawn_period` turns while any target
//! is left to aim at.
//!
//! Each spawn draws, in order: the entry edge, the point along that edge,
//! and the aimed-at target. The random source is supplied by the caller.

use rand::Rng;
use tracing::debug;

use gci_core::config::GameConfig;
use gci_core::enums::MapEdge;
use gci_core::events::TurnEvent;
use gci_core::types::{MapBounds, Position};

use crate::world::{ScoreState, World};
use crate::world_setup::spawn_bomber;

/// Spawn a bomber if this turn is due. Returns the new bomber's id.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    config: &GameConfig,
    turn: u32,
    events: &mut Vec<TurnEvent>,
    score: &mut ScoreState,
) -> Option<u32> {
    if !is_due(turn, config.spawn_period) || world.targets.is_empty() {
        return None;
    }

    let edge = MapEdge::ALL[rng.gen_range(0..MapEdge::ALL.len())];
    let entry = edge_point(edge, &world.bounds, rng);
    let pick = rng.gen_range(0..world.targets.len());
    let target = world.targets[pick];
    // Aim at the corner of the target's cell, as drawn on the map.
    let aim = target.position.cell().position();

    let id = world.next_bomber_id;
    world.next_bomber_id += 1;

    let bomber = spawn_bomber(id, entry, aim, config.bomber);
    let cell = bomber.cell();
    debug!(
        bomber = id,
        ?edge,
        x = cell.x,
        y = cell.y,
        target = target.id,
        heading = bomber.heading,
        "Bomber spawned"
    );

    world.bombers.push(bomber);
    score.bombers_spawned += 1;
    events.push(TurnEvent::BomberSighted {
        bomber: id,
        cell,
        edge,
    });
    Some(id)
}

/// Whether a spawn falls on this turn. A zero period never spawns.
pub fn is_due(turn: u32, period: u32) -> bool {
    period != 0 && turn % period == 0
}

/// Uniform integer point along one map edge.
fn edge_point<R: Rng>(edge: MapEdge, bounds: &MapBounds, rng: &mut R) -> Position {
    match edge {
        MapEdge::North => Position::new(f64::from(rng.gen_range(0..bounds.width)), 0.0),
        MapEdge::South => Position::new(f64::from(rng.gen_range(0..bounds.width)), bounds.max_y()),
        MapEdge::West => Position::new(0.0, f64::from(rng.gen_range(0..bounds.height))),
        MapEdge::East => Position::new(bounds.max_x(), f64::from(rng.gen_range(0..bounds.height))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gci_core::components::Target;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::world_setup::setup_world;

    #[test]
    fn spawns_only_on_period_turns() {
        assert!(is_due(3, 3));
        assert!(is_due(6, 3));
        assert!(!is_due(4, 3));
        assert!(!is_due(3, 0));
    }

    #[test]
    fn zero_draws_enter_north_west_corner_aimed_at_first_target() {
        let config = GameConfig::default();
        let mut world = setup_world(&config);
        let mut rng = StepRng::new(0, 0);
        let mut events = Vec::new();
        let mut score = ScoreState::default();

        let id = run(&mut world, &mut rng, &config, 3, &mut events, &mut score);

        assert_eq!(id, Some(1));
        assert_eq!(world.bombers.len(), 1);
        let bomber = &world.bombers[0];
        assert_eq!(bomber.position, Position::new(0.0, 0.0));
        // Target 1 sits at (20, 20): down and to the right.
        assert!((bomber.heading - 315.0).abs() < 1e-9);
        assert_eq!(bomber.heading, bomber.desired_heading);
        assert_eq!(bomber.fuel, config.bomber.max_fuel);
        assert_eq!(score.bombers_spawned, 1);
        assert!(matches!(
            events[0],
            TurnEvent::BomberSighted {
                bomber: 1,
                edge: MapEdge::North,
                ..
            }
        ));
        assert_eq!(world.next_bomber_id, 2);
    }

    #[test]
    fn no_spawn_once_targets_are_gone() {
        let config = GameConfig::default();
        let mut world = setup_world(&config);
        world.targets.clear();
        let mut rng = StepRng::new(0, 0);
        let mut events = Vec::new();
        let mut score = ScoreState::default();

        assert_eq!(run(&mut world, &mut rng, &config, 3, &mut events, &mut score), None);
        assert!(world.bombers.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn spawns_land_on_an_edge_and_aim_at_a_live_target() {
        let config = GameConfig::default();
        let mut world = setup_world(&config);
        world.targets = vec![Target {
            id: 4,
            position: Position::new(28.6, 29.2),
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut events = Vec::new();
        let mut score = ScoreState::default();

        for turn in (3..=60).step_by(3) {
            run(&mut world, &mut rng, &config, turn, &mut events, &mut score);
        }

        assert_eq!(world.bombers.len(), 20);
        for bomber in &world.bombers {
            let p = bomber.position;
            let on_edge = p.x == 0.0 || p.y == 0.0 || p.x == 49.0 || p.y == 49.0;
            assert!(on_edge, "spawned off-edge at {p:?}");
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
            match bomber.role {
                gci_core::components::Role::Bomber { target } => {
                    assert_eq!(target, Position::new(28.0, 29.0));
                }
                _ => panic!("spawned a non-bomber"),
            }
        }
        let ids: Vec<u32> = world.bombers.iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
