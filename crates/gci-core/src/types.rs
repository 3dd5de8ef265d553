//! Fundamental geometric types.
//!
//! The map is a grid with row 0 at the top. Positions are continuous,
//! cells are the integer squares the renderer draws. Headings are degrees
//! measured counter-clockwise from east, so 90° points at row 0.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Continuous map position (cells). x = column, y = row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Integer grid cell occupied by a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Playable area, `[0, width-1] x [0, height-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width: u32,
    pub height: u32,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Cell containing this position. Positions are clamped non-negative,
    /// so truncation is a floor.
    pub fn cell(&self) -> GridCell {
        GridCell {
            x: self.x as i32,
            y: self.y as i32,
        }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Heading (degrees, `[0, 360)`) that points from this position at `other`.
    /// The y term is negated because rows grow downward.
    pub fn heading_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        normalize_heading((-dy).atan2(dx).to_degrees())
    }
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance between cell corners.
    pub fn distance_to(&self, other: &GridCell) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Position at the cell's origin corner.
    pub fn position(&self) -> Position {
        Position::new(f64::from(self.x), f64::from(self.y))
    }
}

impl MapBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn max_x(&self) -> f64 {
        f64::from(self.width.saturating_sub(1))
    }

    pub fn max_y(&self) -> f64 {
        f64::from(self.height.saturating_sub(1))
    }

    /// Clamp a position into the playable area.
    pub fn clamp(&self, pos: Position) -> Position {
        Position {
            x: pos.x.clamp(0.0, self.max_x()),
            y: pos.y.clamp(0.0, self.max_y()),
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        (0.0..=self.max_x()).contains(&pos.x) && (0.0..=self.max_y()).contains(&pos.y)
    }
}

/// Wrap any finite angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0, which
/// is folded back to 0.
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest turn from `from` to `to`, in `[-180, 180)`.
pub fn heading_delta(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}
