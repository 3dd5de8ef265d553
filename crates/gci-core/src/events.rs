//! Events emitted by the simulation for the headline and UI feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCell;

/// Something that happened during a turn, in resolution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnEvent {
    /// Interceptor topped up at the home base.
    Refueled { interceptor: u32 },
    /// Aircraft ran dry and went down.
    Crashed { kind: UnitKind, unit: u32, cell: GridCell },
    /// Bomber shot down; credited to the first interceptor in range.
    Intercepted { bomber: u32, interceptor: u32, cell: GridCell },
    /// Bomber reached a target; both are gone.
    TargetBombed { target: u32, bomber: u32 },
    /// End-of-phase status line for a surviving aircraft.
    Position {
        kind: UnitKind,
        unit: u32,
        cell: GridCell,
        heading: f64,
    },
    /// New bomber entered the map.
    BomberSighted { bomber: u32, cell: GridCell, edge: MapEdge },
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Refueled { interceptor } => {
                write!(f, "Interceptor {interceptor} has been refuelled.")
            }
            TurnEvent::Crashed { kind, unit, .. } => {
                write!(f, "{} {unit} has crashed.", kind.label())
            }
            TurnEvent::Intercepted {
                bomber,
                interceptor,
                ..
            } => write!(
                f,
                "Bomber {bomber} has been intercepted by interceptor {interceptor}."
            ),
            TurnEvent::TargetBombed { target, bomber } => {
                write!(f, "City {target} has been bombed by bomber {bomber}!")
            }
            TurnEvent::Position {
                kind,
                unit,
                cell,
                heading,
            } => write!(
                f,
                "{} {unit} is at ({}, {}), facing {}.",
                kind.label(),
                cell.x,
                cell.y,
                heading.round()
            ),
            TurnEvent::BomberSighted { cell, .. } => {
                write!(f, "Bomber sighted at ({}, {})!", cell.x, cell.y)
            }
        }
    }
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub turn: u32,
}
