//! Interaction commands applied to a simulation session.

use crate::id::Cell;

/// A command submitted to a simulation session.
///
/// Commands are the only way hosts mutate simulation state. Raw
/// injections ([`AddDensity`](Command::AddDensity),
/// [`AddVelocity`](Command::AddVelocity)) add directly into the field
/// buffers; the pointer variants ([`PointerMove`](Command::PointerMove),
/// [`Tap`](Command::Tap)) expand into injections using the session's
/// interaction constants. Cells outside the grid interior make the
/// command a no-op, never an error.
///
/// # Examples
///
/// ```
/// use rill_core::{Cell, Command};
///
/// let splash = Command::Tap {
///     cell: Cell::new(30, 30),
/// };
/// let stir = Command::AddVelocity {
///     cell: Cell::new(30, 30),
///     dx: 1.5,
///     dy: -0.5,
/// };
///
/// assert!(matches!(splash, Command::Tap { .. }));
/// assert!(matches!(stir, Command::AddVelocity { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Add density at one cell.
    AddDensity {
        /// Target cell.
        cell: Cell,
        /// Additive density delta.
        amount: f32,
    },
    /// Add velocity at one cell.
    AddVelocity {
        /// Target cell.
        cell: Cell,
        /// Additive x velocity delta.
        dx: f32,
        /// Additive y velocity delta.
        dy: f32,
    },
    /// Pointer passed over a cell: inject the configured move density
    /// plus a small randomized velocity impulse.
    PointerMove {
        /// Cell under the pointer.
        cell: Cell,
    },
    /// Pointer tapped/clicked a cell: inject the configured tap density
    /// over a disc of cells around it.
    Tap {
        /// Center of the splash.
        cell: Cell,
    },
    /// Zero the simulation and restore the base image.
    Reset,
}
