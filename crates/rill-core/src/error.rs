//! Error types shared across the rill workspace.
//!
//! The simulation core has no recoverable runtime errors: injection
//! treats out-of-range cells as no-ops and stepping is total. What
//! remains is construction-time validation, captured here.

use std::error::Error;
use std::fmt;

/// Errors from grid and field construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid extent was zero.
    InvalidDimensions {
        /// Requested interior width.
        width: u32,
        /// Requested interior height.
        height: u32,
    },
    /// The padded cell count `(W+2) * (H+2)` does not fit in `u32`.
    CellCountOverflow {
        /// The padded cell count that overflowed.
        cells: u64,
    },
    /// An externally supplied field buffer has the wrong length.
    FieldLengthMismatch {
        /// Expected padded length for the grid dimensions.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::CellCountOverflow { cells } => {
                write!(f, "padded cell count {cells} exceeds u32 capacity")
            }
            Self::FieldLengthMismatch { expected, actual } => {
                write!(f, "field buffer length {actual}, expected {expected}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::InvalidDimensions {
            width: 0,
            height: 7,
        };
        assert_eq!(e.to_string(), "invalid grid dimensions 0x7");

        let e = GridError::FieldLengthMismatch {
            expected: 36,
            actual: 4,
        };
        assert_eq!(e.to_string(), "field buffer length 4, expected 36");
    }
}
