//! Implicit diffusion via fixed-sweep Gauss-Seidel relaxation.

use rill_core::GridDims;

use crate::boundary::{enforce, FieldKind};

/// Number of Gauss-Seidel sweeps per linear solve.
///
/// Both diffusion and the pressure Poisson solve run exactly this many
/// sweeps. The count is a fixed accuracy/cost trade-off for interactive
/// frame rates, not an adaptive convergence criterion; changing it
/// changes the visual result.
pub const LIN_SOLVE_SWEEPS: usize = 20;

/// Solve `target = (source + a * sum4(target)) / c` by Gauss-Seidel
/// relaxation over the interior, [`LIN_SOLVE_SWEEPS`] times.
///
/// Sweeps update `target` in place, so later cells in a sweep read
/// already-updated neighbours. Boundaries are re-enforced after every
/// sweep so the border stays consistent with the interior the next
/// sweep reads.
pub fn lin_solve(
    kind: FieldKind,
    target: &mut [f32],
    source: &[f32],
    a: f32,
    c: f32,
    dims: GridDims,
) {
    debug_assert_eq!(target.len(), dims.padded_len());
    debug_assert_eq!(source.len(), dims.padded_len());
    let w = dims.width() as i32;
    let h = dims.height() as i32;
    let c_recip = 1.0 / c;

    for _ in 0..LIN_SOLVE_SWEEPS {
        for y in 1..=h {
            for x in 1..=w {
                let i = dims.index(x, y);
                target[i] = (source[i]
                    + a * (target[dims.index(x + 1, y)]
                        + target[dims.index(x - 1, y)]
                        + target[dims.index(x, y + 1)]
                        + target[dims.index(x, y - 1)]))
                    * c_recip;
            }
        }
        enforce(kind, target, dims);
    }
}

/// Implicit diffusion: relax `target` toward the diffused `source`.
///
/// `a = dt * rate * W * H` couples each cell to its four neighbours;
/// the implicit form `(1 + 4a) x - a * sum4(x) = x0` stays stable for
/// any rate and time step. With `rate = 0` the solve collapses to
/// copying `source` into `target`.
pub fn diffuse(
    kind: FieldKind,
    target: &mut [f32],
    source: &[f32],
    rate: f32,
    dt: f32,
    dims: GridDims,
) {
    let a = dt * rate * dims.width() as f32 * dims.height() as f32;
    lin_solve(kind, target, source, a, 1.0 + 4.0 * a, dims);
}
