//! Text rendering of snapshots for the terminal.
//!
//! The map is one character per cell with row 0 at the top. Aircraft carry
//! their id in the row below and their rounded heading in the row above;
//! targets carry their id below. Labels longer than one character run to
//! the right and are clipped at the map edge.

use std::fmt::Write;

use gci_core::config::GameConfig;
use gci_core::state::{AircraftView, GameStateSnapshot};
use gci_core::types::{GridCell, MapBounds};

const INTERCEPTOR_CHAR: char = '^';
const BOMBER_CHAR: char = 'v';
const TARGET_CHAR: char = '#';
const BASE_CHAR: char = 'A';
const WRECK_CHAR: char = '*';

/// Opening briefing.
pub fn title_card(config: &GameConfig) -> String {
    format!(
        "Welcome to GCI, the ground-controlled intercept game!\n\
         \n\
         Enemy bombers are inbound. Guide your fighters onto them before they reach your cities.\n\
         {BOMBER_CHAR} marks bombers and {INTERCEPTOR_CHAR} marks fighters. Each aircraft's number is printed\n\
         below it and its heading above it. {TARGET_CHAR} is a city, {BASE_CHAR} is your home base and {WRECK_CHAR} is a wreck.\n\
         Fighters shoot down any bomber within {} cells and refuel when they pass over the base.\n\
         Hold out for {} turns.\n\
         \n\
         Give orders as fighter/heading pairs, heading in degrees (0 east, 90 north):\n\
         >>> f1 <heading> f2 <heading> ...\n",
        config.intercept_radius, config.turn_limit
    )
}

/// Full turn report: headline, bordered map, fuel states and warnings.
pub fn render(snapshot: &GameStateSnapshot) -> String {
    let mut grid = Grid::new(snapshot.map);

    for target in &snapshot.targets {
        grid.put(target.cell, TARGET_CHAR);
    }
    grid.put(snapshot.home_base.cell, BASE_CHAR);
    for wreck in &snapshot.wrecks {
        grid.put(wreck.cell, WRECK_CHAR);
    }

    for target in &snapshot.targets {
        grid.label(below(target.cell), &target.id.to_string());
    }
    for fighter in &snapshot.interceptors {
        draw_aircraft(&mut grid, fighter, INTERCEPTOR_CHAR);
    }
    for bomber in &snapshot.bombers {
        draw_aircraft(&mut grid, bomber, BOMBER_CHAR);
    }

    let border = "_".repeat(snapshot.map.width as usize);
    let mut out = String::new();
    let _ = writeln!(out, "Turn {} of {}", snapshot.turn, snapshot.turn_limit);
    let _ = writeln!(out, "{}", snapshot.headline);
    let _ = writeln!(out, "{border}");
    for row in &grid.rows {
        let _ = writeln!(out, "{}", row.iter().collect::<String>());
    }
    let _ = writeln!(out, "{border}");
    for fighter in &snapshot.interceptors {
        let _ = writeln!(out, "f{} has {} turns of fuel.", fighter.id, fighter.fuel);
    }
    for alert in &snapshot.alerts {
        let _ = writeln!(out, "{:?}: {}", alert.level, alert.message);
    }
    out
}

fn draw_aircraft(grid: &mut Grid, aircraft: &AircraftView, symbol: char) {
    grid.put(aircraft.cell, symbol);
    grid.label(below(aircraft.cell), &aircraft.id.to_string());
    grid.label(above(aircraft.cell), &format!("{}", aircraft.heading.round()));
}

fn below(cell: GridCell) -> GridCell {
    GridCell::new(cell.x, cell.y + 1)
}

fn above(cell: GridCell) -> GridCell {
    GridCell::new(cell.x, cell.y - 1)
}

struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    fn new(map: MapBounds) -> Self {
        Self {
            rows: vec![vec![' '; map.width as usize]; map.height as usize],
        }
    }

    /// Write one character; off-map cells are ignored.
    fn put(&mut self, cell: GridCell, ch: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
            return;
        };
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = ch;
        }
    }

    fn label(&mut self, start: GridCell, text: &str) {
        for (dx, ch) in (0..).zip(text.chars()) {
            self.put(GridCell::new(start.x + dx, start.y), ch);
        }
    }
}
