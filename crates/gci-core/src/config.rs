//! Game configuration, fixed at engine construction.
//!
//! The default configuration reproduces the standard 50x50 scenario from
//! [`crate::constants`]. A JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::components::FlightProfile;
use crate::constants::*;
use crate::types::{MapBounds, Position};

/// Everything a game needs before its first turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapBounds,
    pub home_base: Position,
    /// One interceptor is created per entry, numbered from 1 in this order.
    pub interceptor_starts: Vec<Position>,
    /// Targets, numbered from 1 in this order.
    pub targets: Vec<Position>,
    pub interceptor: FlightProfile,
    pub bomber: FlightProfile,
    /// A bomber spawns on every turn divisible by this.
    pub spawn_period: u32,
    pub intercept_radius: f64,
    pub bomb_radius: f64,
    /// The game is won once the turn counter exceeds this.
    pub turn_limit: u32,
}

/// Construction-time configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map must be at least 1x1, got {width}x{height}")]
    EmptyMap { width: u32, height: u32 },
    #[error("bomber spawn period must be at least 1 turn")]
    ZeroSpawnPeriod,
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidMagnitude { field: &'static str, value: f64 },
    #[error("{what} at ({x}, {y}) lies outside the {width}x{height} map")]
    OutOfBounds {
        what: &'static str,
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
    #[error("configuration needs at least one {0}")]
    EmptyRoster(&'static str),
}

impl Default for GameConfig {
    fn default() -> Self {
        let interceptor_starts = (0..INTERCEPTOR_COUNT)
            .map(|i| {
                let offset = INTERCEPTOR_START_SPACING * f64::from(i);
                Position::new(MAP_XMID + offset, MAP_YMID + offset)
            })
            .collect();
        let targets = TARGET_OFFSETS
            .iter()
            .map(|&(dx, dy)| Position::new(MAP_XMID + dx, MAP_YMID + dy))
            .collect();

        Self {
            map: MapBounds::new(MAP_WIDTH, MAP_HEIGHT),
            home_base: Position::new(MAP_XMID, MAP_YMID),
            interceptor_starts,
            targets,
            interceptor: FlightProfile {
                max_fuel: INTERCEPTOR_MAX_FUEL,
                max_speed: INTERCEPTOR_MAX_SPEED,
                max_turn: INTERCEPTOR_MAX_TURN,
            },
            bomber: FlightProfile {
                max_fuel: BOMBER_MAX_FUEL,
                max_speed: BOMBER_MAX_SPEED,
                max_turn: BOMBER_MAX_TURN,
            },
            spawn_period: BOMBER_SPAWN_PERIOD,
            intercept_radius: INTERCEPT_RADIUS,
            bomb_radius: BOMB_RADIUS,
            turn_limit: TURN_LIMIT,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    ///
    /// The document is merged over the defaults object by object, so nested
    /// overrides such as `{"interceptor": {"max_fuel": 20}}` keep the other
    /// profile fields. Arrays replace the default list wholesale.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(GameConfig::default())?;
        merge_over(&mut merged, overrides);
        let config: GameConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ConfigError::EmptyMap {
                width: self.map.width,
                height: self.map.height,
            });
        }
        if self.spawn_period == 0 {
            return Err(ConfigError::ZeroSpawnPeriod);
        }

        let magnitudes = [
            ("intercept_radius", self.intercept_radius),
            ("bomb_radius", self.bomb_radius),
            ("interceptor.max_speed", self.interceptor.max_speed),
            ("interceptor.max_turn", self.interceptor.max_turn),
            ("bomber.max_speed", self.bomber.max_speed),
            ("bomber.max_turn", self.bomber.max_turn),
        ];
        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMagnitude { field, value });
            }
        }

        if self.interceptor_starts.is_empty() {
            return Err(ConfigError::EmptyRoster("interceptor"));
        }
        if self.targets.is_empty() {
            return Err(ConfigError::EmptyRoster("target"));
        }

        self.check_in_bounds("home base", &self.home_base)?;
        for start in &self.interceptor_starts {
            self.check_in_bounds("interceptor start", start)?;
        }
        for target in &self.targets {
            self.check_in_bounds("target", target)?;
        }
        Ok(())
    }

    fn check_in_bounds(&self, what: &'static str, pos: &Position) -> Result<(), ConfigError> {
        if self.map.contains(pos) {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                what,
                x: pos.x,
                y: pos.y,
                width: self.map.width,
                height: self.map.height,
            })
        }
    }
}

fn merge_over(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_over(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
