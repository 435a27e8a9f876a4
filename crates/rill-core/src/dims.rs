//! Validated grid dimensions and flat-buffer index mapping.

use std::fmt;

use crate::error::GridError;

/// Logical dimensions of a simulation grid, fixed at construction.
///
/// Every field buffer covers the logical `W x H` interior plus a
/// one-cell ghost border on each side, stored as one flat row-major
/// array of `(W+2) * (H+2)` values with x fastest-varying:
/// `index(x, y) = x + y * (W+2)`. Interior cells are `[1, W] x [1, H]`;
/// the border rows/columns (`0` and `W+1`/`H+1`) exist only for
/// boundary conditions.
///
/// # Examples
///
/// ```
/// use rill_core::GridDims;
///
/// let dims = GridDims::new(4, 3).unwrap();
/// assert_eq!(dims.padded_len(), 6 * 5);
/// assert_eq!(dims.index(1, 1), 7);
/// assert!(dims.in_interior(4, 3));
/// assert!(!dims.in_interior(0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Create validated dimensions.
    ///
    /// Rejects zero extents and padded cell counts that do not fit in
    /// `u32`; both are fatal configuration errors per the error design.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = (width as u64 + 2) * (height as u64 + 2);
        if cells > u32::MAX as u64 {
            return Err(GridError::CellCountOverflow { cells });
        }
        Ok(Self { width, height })
    }

    /// Interior width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Interior height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer width including the ghost border.
    pub fn padded_width(&self) -> u32 {
        self.width + 2
    }

    /// Buffer height including the ghost border.
    pub fn padded_height(&self) -> u32 {
        self.height + 2
    }

    /// Total buffer length including the ghost border.
    pub fn padded_len(&self) -> usize {
        self.padded_width() as usize * self.padded_height() as usize
    }

    /// Flat index of `(x, y)`, ghost cells included.
    ///
    /// Callers must pass `x` in `[0, W+1]` and `y` in `[0, H+1]`.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && x as u32 <= self.width + 1, "x out of range: {x}");
        debug_assert!(y >= 0 && y as u32 <= self.height + 1, "y out of range: {y}");
        x as usize + y as usize * self.padded_width() as usize
    }

    /// Whether `(x, y)` is an interior cell (`[1, W] x [1, H]`).
    #[inline]
    pub fn in_interior(&self, x: i32, y: i32) -> bool {
        x >= 1 && y >= 1 && x as u32 <= self.width && y as u32 <= self.height
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_extents() {
        assert_eq!(
            GridDims::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            GridDims::new(5, 0),
            Err(GridError::InvalidDimensions {
                width: 5,
                height: 0
            })
        );
        assert_eq!(
            GridDims::new(0, 0),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn rejects_cell_count_overflow() {
        let err = GridDims::new(u32::MAX - 2, u32::MAX - 2).unwrap_err();
        assert!(matches!(err, GridError::CellCountOverflow { .. }));
    }

    #[test]
    fn index_is_row_major_x_fastest() {
        let dims = GridDims::new(4, 4).unwrap();
        // Stride is W+2 = 6.
        assert_eq!(dims.index(0, 0), 0);
        assert_eq!(dims.index(5, 0), 5);
        assert_eq!(dims.index(0, 1), 6);
        assert_eq!(dims.index(2, 3), 2 + 3 * 6);
        assert_eq!(dims.index(5, 5), dims.padded_len() - 1);
    }

    #[test]
    fn interior_excludes_ghost_border() {
        let dims = GridDims::new(4, 3).unwrap();
        assert!(dims.in_interior(1, 1));
        assert!(dims.in_interior(4, 3));
        assert!(!dims.in_interior(0, 1));
        assert!(!dims.in_interior(5, 1));
        assert!(!dims.in_interior(1, 0));
        assert!(!dims.in_interior(1, 4));
        assert!(!dims.in_interior(-2, 2));
    }

    #[test]
    fn display_formats_extents() {
        let dims = GridDims::new(60, 50).unwrap();
        assert_eq!(dims.to_string(), "60x50");
    }
}
