//! Game state machine. Evaluated once per completed turn.

use gci_core::enums::GameOutcome;

/// Outcome after a turn. Target losses take precedence over interceptor
/// losses, and both take precedence over running out the clock.
pub fn evaluate(targets_left: usize, interceptors_left: usize, turn: u32, turn_limit: u32) -> GameOutcome {
    if targets_left == 0 {
        GameOutcome::DefeatAllTargetsLost
    } else if interceptors_left == 0 {
        GameOutcome::DefeatAllInterceptorsLost
    } else if turn > turn_limit {
        GameOutcome::Victory
    } else {
        GameOutcome::Active
    }
}
