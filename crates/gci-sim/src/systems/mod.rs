//! Turn systems that operate on the simulation world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in the world rosters and the
//! score/event buffers the engine passes in.

pub mod attrition;
pub mod bombers;
pub mod bombing;
pub mod headline;
pub mod intercept;
pub mod interceptors;
pub mod kinematics;
pub mod outcome;
pub mod refuel;
pub mod snapshot;
pub mod spawner;
