//! Simulation engine for GCI.
//!
//! Owns the unit rosters, resolves one turn at a time, and produces
//! `GameStateSnapshot`s for the front end.

pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use gci_core as core;
