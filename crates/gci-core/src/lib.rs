//! Core types and definitions for the GCI intercept simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, orders, configuration, state snapshots, events, and constants.
//! It has no dependency on the terminal front end or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
