//! Strongly-typed identifiers: tick counters and grid cells.

use std::fmt;

use crate::dims::GridDims;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A grid cell coordinate.
///
/// Coordinates are signed because interaction events arrive from raw
/// pointer math and routinely land outside the grid during fast
/// movement. Interior cells are `[1, W] x [1, H]`; injection treats
/// everything else as a no-op, so out-of-range cells are valid values
/// here, just inert ones.
///
/// # Examples
///
/// ```
/// use rill_core::{Cell, GridDims};
///
/// let dims = GridDims::new(60, 60).unwrap();
/// let cell = Cell::from_normalized(0.5, 0.25, dims);
/// assert_eq!(cell, Cell::new(30, 15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column, 1-based for interior cells.
    pub x: i32,
    /// Row, 1-based for interior cells.
    pub y: i32,
}

impl Cell {
    /// Create a cell from raw coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Map a normalized viewport position in `[0, 1)` to a cell.
    ///
    /// Uses `floor(u * width)` per axis with no clamping, matching how
    /// pointer positions are translated by interactive hosts. Positions
    /// at or past the far edge land outside the interior and are then
    /// ignored by injection.
    pub fn from_normalized(u: f32, v: f32, dims: GridDims) -> Self {
        Self {
            x: (u * dims.width() as f32).floor() as i32,
            y: (v * dims.height() as f32).floor() as i32,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
