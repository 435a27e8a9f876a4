//! Ghost-border boundary conditions.
//!
//! Every solver pass works only on interior cells and relies on the
//! ghost border carrying the right values beforehand. [`enforce`] fills
//! the border from the adjacent interior cells: scalars copy
//! (zero-gradient), velocity components are negated at the walls they
//! point through (no-flow-through), and corners average their two edge
//! neighbours.

use rill_core::GridDims;

/// How a field behaves at the grid walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar field: ghost cells copy the adjacent interior value.
    Scalar,
    /// Horizontal velocity component: negated at the left/right walls,
    /// copied at the top/bottom walls.
    VelocityX,
    /// Vertical velocity component: negated at the top/bottom walls,
    /// copied at the left/right walls.
    VelocityY,
}

/// Fill the ghost border of `field` according to `kind`.
///
/// Runs after every relaxation sweep and after every advection pass.
/// Idempotent: a second application reads only interior cells, which
/// it never writes, so it reproduces the same border.
pub fn enforce(kind: FieldKind, field: &mut [f32], dims: GridDims) {
    debug_assert_eq!(field.len(), dims.padded_len());
    let w = dims.width() as i32;
    let h = dims.height() as i32;

    // Left/right walls: x velocity reflects, everything else copies.
    for y in 1..=h {
        let left = field[dims.index(1, y)];
        let right = field[dims.index(w, y)];
        let flip = if kind == FieldKind::VelocityX { -1.0 } else { 1.0 };
        field[dims.index(0, y)] = flip * left;
        field[dims.index(w + 1, y)] = flip * right;
    }

    // Top/bottom walls: y velocity reflects, everything else copies.
    for x in 1..=w {
        let top = field[dims.index(x, 1)];
        let bottom = field[dims.index(x, h)];
        let flip = if kind == FieldKind::VelocityY { -1.0 } else { 1.0 };
        field[dims.index(x, 0)] = flip * top;
        field[dims.index(x, h + 1)] = flip * bottom;
    }

    // Corners average their two wall neighbours.
    field[dims.index(0, 0)] = 0.5 * (field[dims.index(1, 0)] + field[dims.index(0, 1)]);
    field[dims.index(0, h + 1)] = 0.5 * (field[dims.index(1, h + 1)] + field[dims.index(0, h)]);
    field[dims.index(w + 1, 0)] = 0.5 * (field[dims.index(w, 0)] + field[dims.index(w + 1, 1)]);
    field[dims.index(w + 1, h + 1)] =
        0.5 * (field[dims.index(w, h + 1)] + field[dims.index(w + 1, h)]);
}
