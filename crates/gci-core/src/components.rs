//! Simulation entities.
//!
//! Components are plain data structs with no behaviour.
//! Game logic lives in the simulation systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{UnitKind, WreckCause};
use crate::types::{GridCell, Position};

/// Per-role performance envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightProfile {
    /// Fuel capacity in turns of flight.
    pub max_fuel: u32,
    /// Distance flown per turn (cells).
    pub max_speed: f64,
    /// Largest heading change per turn (degrees).
    pub max_turn: f64,
}

/// Role tag for an [`Aircraft`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Role {
    /// Player-controlled; refuels at the home base.
    Interceptor,
    /// Hostile; flies a fixed heading toward the aim point chosen at spawn.
    Bomber { target: Position },
}

impl Role {
    pub fn kind(&self) -> UnitKind {
        match self {
            Role::Interceptor => UnitKind::Interceptor,
            Role::Bomber { .. } => UnitKind::Bomber,
        }
    }
}

/// Any powered unit on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Stable identifier, unique within the unit's kind.
    pub id: u32,
    pub role: Role,
    pub position: Position,
    /// Current heading (degrees, `[0, 360)`).
    pub heading: f64,
    /// Heading the aircraft is turning toward.
    pub desired_heading: f64,
    /// Remaining turns of flight.
    pub fuel: u32,
    pub profile: FlightProfile,
    pub alive: bool,
}

impl Aircraft {
    pub fn kind(&self) -> UnitKind {
        self.role.kind()
    }

    pub fn cell(&self) -> GridCell {
        self.position.cell()
    }
}

/// Destructible ground objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub position: Position,
}

/// Refuelling point for interceptors. Never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomeBase {
    pub position: Position,
}

/// Permanent marker left where something was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wreck {
    pub cell: GridCell,
    pub cause: WreckCause,
    /// Turn on which the wreck appeared.
    pub turn: u32,
}
