//! Game state snapshot: the complete visible state handed to the front end
//! after each turn.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, TurnEvent};
use crate::types::{GridCell, MapBounds, Position};

/// Complete read-only view of the game after a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub map: MapBounds,
    /// Turns resolved so far.
    pub turn: u32,
    pub turn_limit: u32,
    pub outcome: GameOutcome,
    /// Human-readable summary of the last turn.
    pub headline: String,
    pub events: Vec<TurnEvent>,
    pub alerts: Vec<Alert>,
    /// Live interceptors, in roster order.
    pub interceptors: Vec<AircraftView>,
    /// Live bombers, in roster order.
    pub bombers: Vec<AircraftView>,
    /// Surviving targets, in roster order.
    pub targets: Vec<TargetView>,
    pub home_base: BaseView,
    pub wrecks: Vec<WreckView>,
    pub score: ScoreView,
}

/// A live aircraft on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: u32,
    pub kind: UnitKind,
    pub position: Position,
    pub cell: GridCell,
    /// Heading (degrees, `[0, 360)`).
    pub heading: f64,
    pub desired_heading: f64,
    pub fuel: u32,
    pub max_fuel: u32,
    /// Aim point, bombers only.
    pub target: Option<Position>,
}

/// A surviving target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Position,
    pub cell: GridCell,
}

/// Home base marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseView {
    pub position: Position,
    pub cell: GridCell,
}

/// A wreck marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WreckView {
    pub cell: GridCell,
    pub cause: WreckCause,
    pub turn: u32,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub bombers_spawned: u32,
    pub bombers_intercepted: u32,
    pub bombers_crashed: u32,
    pub targets_lost: u32,
    pub interceptors_lost: u32,
}
