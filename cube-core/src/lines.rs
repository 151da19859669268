//! Static table of winning lines
//!
//! The table is built once on first use and shared for the lifetime of the
//! process. Its order is fixed and is the scan order used by the heuristic AI.

use once_cell::sync::Lazy;

use crate::board::Coord;

/// Three cells that score a point when held by one player
pub type Line = [Coord; 3];

/// Number of winning lines on a 3×3×3 board
pub const LINE_COUNT: usize = 49;

static LINES: Lazy<Vec<Line>> = Lazy::new(build);

/// All 49 winning lines in table order
pub fn all() -> &'static [Line] {
    &LINES
}

/// Lines passing through `coord`
pub fn through(coord: Coord) -> impl Iterator<Item = &'static Line> {
    all().iter().filter(move |line| line.contains(&coord))
}

fn build() -> Vec<Line> {
    let c = Coord::from_parts;
    let mut lines = Vec::with_capacity(LINE_COUNT);

    // Axis-aligned: x, then y, then z
    for a in 0..3 {
        for b in 0..3 {
            lines.push([c(0, a, b), c(1, a, b), c(2, a, b)]);
        }
    }
    for a in 0..3 {
        for b in 0..3 {
            lines.push([c(a, 0, b), c(a, 1, b), c(a, 2, b)]);
        }
    }
    for a in 0..3 {
        for b in 0..3 {
            lines.push([c(a, b, 0), c(a, b, 1), c(a, b, 2)]);
        }
    }

    // Planar diagonals, main then anti per layer
    for z in 0..3 {
        lines.push([c(0, 0, z), c(1, 1, z), c(2, 2, z)]);
        lines.push([c(2, 0, z), c(1, 1, z), c(0, 2, z)]);
    }
    for y in 0..3 {
        lines.push([c(0, y, 0), c(1, y, 1), c(2, y, 2)]);
        lines.push([c(2, y, 0), c(1, y, 1), c(0, y, 2)]);
    }
    for x in 0..3 {
        lines.push([c(x, 0, 0), c(x, 1, 1), c(x, 2, 2)]);
        lines.push([c(x, 2, 0), c(x, 1, 1), c(x, 0, 2)]);
    }

    // Space diagonals
    lines.push([c(0, 0, 0), c(1, 1, 1), c(2, 2, 2)]);
    lines.push([c(2, 0, 0), c(1, 1, 1), c(0, 2, 2)]);
    lines.push([c(0, 2, 0), c(1, 1, 1), c(2, 0, 2)]);
    lines.push([c(2, 2, 0), c(1, 1, 1), c(0, 0, 2)]);

    debug_assert_eq!(lines.len(), LINE_COUNT);
    lines
}
