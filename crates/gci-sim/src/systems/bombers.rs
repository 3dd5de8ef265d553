//! Phase 2: fly every bomber, then resolve fuel, interception and bombing.
//!
//! Interception is checked against the interceptors that survived phase 1.
//! A bomber that is shot down never reaches the bombing check.

use tracing::info;

use gci_core::config::GameConfig;
use gci_core::enums::WreckCause;
use gci_core::events::TurnEvent;

use crate::systems::{attrition, bombing, headline, intercept, kinematics};
use crate::world::{ScoreState, World};

/// Resolve the bomber phase and replace the roster with its survivors.
pub fn run(
    world: &mut World,
    config: &GameConfig,
    turn: u32,
    events: &mut Vec<TurnEvent>,
    score: &mut ScoreState,
) {
    let roster = std::mem::take(&mut world.bombers);
    let mut survivors = Vec::with_capacity(roster.len());

    for mut bomber in roster {
        kinematics::advance(&mut bomber, &world.bounds);
        if !attrition::run(&mut bomber, world, turn, events, score) {
            continue;
        }

        let cell = bomber.cell();

        if let Some(fighter) =
            intercept::find_interceptor(&bomber, &world.interceptors, config.intercept_radius)
        {
            let interceptor = fighter.id;
            info!(
                bomber = bomber.id,
                interceptor,
                x = cell.x,
                y = cell.y,
                "Bomber intercepted"
            );
            bomber.alive = false;
            world.add_wreck(cell, WreckCause::BomberShotDown, turn);
            score.bombers_intercepted += 1;
            events.push(TurnEvent::Intercepted {
                bomber: bomber.id,
                interceptor,
                cell,
            });
            continue;
        }

        if let Some(index) = bombing::find_target(&bomber, &world.targets, config.bomb_radius) {
            let target = world.targets.remove(index);
            info!(target = target.id, bomber = bomber.id, "Target destroyed");
            bomber.alive = false;
            world.add_wreck(target.position.cell(), WreckCause::TargetDestroyed, turn);
            world.add_wreck(cell, WreckCause::BomberExpended, turn);
            score.targets_lost += 1;
            events.push(TurnEvent::TargetBombed {
                target: target.id,
                bomber: bomber.id,
            });
            continue;
        }

        events.push(headline::position_report(&bomber));
        survivors.push(bomber);
    }

    world.bombers = survivors;
}
