//! Unit rosters and static markers.
//!
//! Roster order is significant: interception and bombing scans resolve ties
//! by taking the first unit in roster order. Phases replace a roster with a
//! freshly built survivor list instead of removing entries in place.

use gci_core::components::{Aircraft, HomeBase, Target, Wreck};
use gci_core::enums::WreckCause;
use gci_core::types::{GridCell, MapBounds};

/// Everything on the map.
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: MapBounds,
    pub interceptors: Vec<Aircraft>,
    pub bombers: Vec<Aircraft>,
    pub targets: Vec<Target>,
    pub home_base: HomeBase,
    pub wrecks: Vec<Wreck>,
    /// Identifier handed to the next spawned bomber.
    pub next_bomber_id: u32,
}

impl World {
    pub fn new(bounds: MapBounds, home_base: HomeBase) -> Self {
        Self {
            bounds,
            interceptors: Vec::new(),
            bombers: Vec::new(),
            targets: Vec::new(),
            home_base,
            wrecks: Vec::new(),
            next_bomber_id: 1,
        }
    }

    /// Leave a permanent wreck marker.
    pub fn add_wreck(&mut self, cell: GridCell, cause: WreckCause, turn: u32) {
        self.wrecks.push(Wreck { cell, cause, turn });
    }

    pub fn interceptor_mut(&mut self, id: u32) -> Option<&mut Aircraft> {
        self.interceptors.iter_mut().find(|a| a.id == id && a.alive)
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub bombers_spawned: u32,
    pub bombers_intercepted: u32,
    pub bombers_crashed: u32,
    pub targets_lost: u32,
    pub interceptors_lost: u32,
}
