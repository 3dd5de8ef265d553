//! Bombing: a bomber inside the bomb radius of a target destroys it and
//! itself. At most one target per bomber per turn; ties go to the first
//! target in roster order.

use gci_core::components::{Aircraft, Target};

/// Roster index of the first target within `radius` of the bomber.
pub fn find_target(bomber: &Aircraft, targets: &[Target], radius: f64) -> Option<usize> {
    let bomber_cell = bomber.cell();
    targets
        .iter()
        .position(|target| target.position.cell().distance_to(&bomber_cell) <= radius)
}
