//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an aircraft flies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Player-controlled fighter.
    Interceptor,
    /// Hostile aircraft flying at a target.
    Bomber,
}

impl UnitKind {
    /// Name used in headlines.
    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::Interceptor => "Interceptor",
            UnitKind::Bomber => "Bomber",
        }
    }
}

/// Why a wreck marker was left on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WreckCause {
    /// An interceptor ran out of fuel.
    InterceptorCrashed,
    /// A bomber ran out of fuel.
    BomberCrashed,
    /// A bomber was shot down by an interceptor.
    BomberShotDown,
    /// A bomber expended itself on a target.
    BomberExpended,
    /// A target was bombed.
    TargetDestroyed,
}

/// Map edge a bomber enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapEdge {
    /// Row 0.
    North,
    /// Column 0.
    West,
    /// Last row.
    South,
    /// Last column.
    East,
}

impl MapEdge {
    pub const ALL: [MapEdge; 4] = [MapEdge::North, MapEdge::West, MapEdge::South, MapEdge::East];
}

/// Top-level game state. `Active` is the only non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Active,
    /// The turn limit passed with targets and interceptors remaining.
    Victory,
    /// Every target was bombed.
    DefeatAllTargetsLost,
    /// Every interceptor was lost.
    DefeatAllInterceptorsLost,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Active)
    }

    /// Closing message for a finished game. `None` while the game is running.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameOutcome::Active => None,
            GameOutcome::Victory => Some(
                "Congratulations, Commander. Your fighters have repelled the bombardment.\n\
                 Word of your deeds will travel far. Expect a medal, and perhaps a promotion.",
            ),
            GameOutcome::DefeatAllTargetsLost => Some(
                "Every one of our cities has been bombed out, Commander. You have cost us the war.\n\
                 Consider yourself dishonourably dismissed!",
            ),
            GameOutcome::DefeatAllInterceptorsLost => Some(
                "Your fighters have been run into the ground, leaving us defenceless against the onslaught.\n\
                 Consider yourself dishonourably dismissed!",
            ),
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    /// A rejected order; the turn still resolved.
    Warning,
}
