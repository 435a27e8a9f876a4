//! Character-art rasterization into a base density field.

use rill_core::GridDims;

use crate::ramp::GlyphRamp;

/// A block of character art shaped to a grid.
///
/// Built from a multi-line string: each row is truncated or
/// space-padded to the grid width, and the row list to the grid
/// height, so ragged or oversized art is always usable. The art is
/// immutable once built; the simulation reads it as the static
/// backdrop the fluid washes over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtGrid {
    dims: GridDims,
    rows: Vec<Vec<char>>,
}

impl ArtGrid {
    /// Shape `art` to `dims`, truncating and padding with spaces.
    pub fn from_text(art: &str, dims: GridDims) -> Self {
        let w = dims.width() as usize;
        let h = dims.height() as usize;
        let lines: Vec<&str> = art.lines().collect();
        let mut rows = Vec::with_capacity(h);
        for y in 0..h {
            let line = lines.get(y).copied().unwrap_or("");
            let mut row: Vec<char> = line.chars().take(w).collect();
            row.resize(w, ' ');
            rows.push(row);
        }
        Self { dims, rows }
    }

    /// An all-space art block (renders as an empty backdrop).
    pub fn blank(dims: GridDims) -> Self {
        Self::from_text("", dims)
    }

    /// Grid dimensions this art is shaped to.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The art character at a 1-based interior cell.
    ///
    /// Cells outside the interior read as a space, mirroring the
    /// padding rule.
    pub fn base_char(&self, x: i32, y: i32) -> char {
        if !self.dims.in_interior(x, y) {
            return ' ';
        }
        self.rows[(y - 1) as usize][(x - 1) as usize]
    }

    /// Rasterize the art into a padded base density field.
    ///
    /// Interior cells take the ramp's inverse lookup of their art
    /// character; the ghost border stays zero. The result feeds
    /// `FluidGrid::set_base_density`.
    pub fn rasterize(&self, ramp: &GlyphRamp) -> Vec<f32> {
        let mut field = vec![0.0; self.dims.padded_len()];
        for y in 1..=self.dims.height() as i32 {
            for x in 1..=self.dims.width() as i32 {
                field[self.dims.index(x, y)] = ramp.density_of(self.base_char(x, y));
            }
        }
        field
    }
}
