//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GameConfig::default`].
//! Distances are in grid cells, headings in degrees.

// --- Map ---

/// Map width in cells.
pub const MAP_WIDTH: u32 = 50;

/// Map height in cells.
pub const MAP_HEIGHT: u32 = 50;

/// Horizontal centre of the map.
pub const MAP_XMID: f64 = (MAP_WIDTH / 2) as f64;

/// Vertical centre of the map.
pub const MAP_YMID: f64 = (MAP_HEIGHT / 2) as f64;

/// Default target positions, relative to the map centre.
pub const TARGET_OFFSETS: [(f64, f64); 4] = [(-5.0, -5.0), (10.0, -12.0), (-2.0, -7.0), (3.0, 4.0)];

// --- Interceptors ---

/// Number of interceptors at the start of a game.
pub const INTERCEPTOR_COUNT: u32 = 4;

/// Spacing between interceptor starting cells along the diagonal.
pub const INTERCEPTOR_START_SPACING: f64 = 2.0;

/// Interceptor fuel capacity (turns of flight).
pub const INTERCEPTOR_MAX_FUEL: u32 = 14;

/// Interceptor turn rate (degrees per turn).
pub const INTERCEPTOR_MAX_TURN: f64 = 90.0;

/// Interceptor speed (cells per turn).
pub const INTERCEPTOR_MAX_SPEED: f64 = 2.0;

/// An interceptor this close to the home base is refuelled.
pub const REFUEL_RADIUS: f64 = 1.0;

// --- Bombers ---

/// A bomber is spawned every this many turns.
pub const BOMBER_SPAWN_PERIOD: u32 = 3;

/// Bomber fuel capacity (turns of flight).
pub const BOMBER_MAX_FUEL: u32 = 45;

/// Bomber turn rate (degrees per turn).
pub const BOMBER_MAX_TURN: f64 = 30.0;

/// Bomber speed (cells per turn).
pub const BOMBER_MAX_SPEED: f64 = 1.0;

// --- Resolution ---

/// A bomber this close to a target destroys it.
pub const BOMB_RADIUS: f64 = 1.0;

/// A bomber this close to an interceptor is shot down.
pub const INTERCEPT_RADIUS: f64 = 3.0;

/// The game is won once the turn counter exceeds this value.
pub const TURN_LIMIT: u32 = 51;

/// Headline used when a turn produced no report at all.
pub const HEADLINE_PLACEHOLDER: &str = "Your orders, sir?";
