//! Semi-Lagrangian advection.

use rill_core::GridDims;

use crate::boundary::{enforce, FieldKind};

/// Transport `source` along `(vel_x, vel_y)` into `dest`.
///
/// For each interior cell the sample position is backtraced by
/// `dt * W` times the local velocity, clamped to the valid sample
/// range (`[0.5, W+0.5]` horizontally, `[0.5, H+0.5]` vertically, so
/// the bilinear footprint stays inside the padded buffer), and the
/// source field is bilinearly interpolated there. Backward tracing
/// keeps the scheme stable for arbitrarily large velocities; the cost
/// is extra numerical smearing, acceptable for a decorative flow.
pub fn advect(
    kind: FieldKind,
    dest: &mut [f32],
    source: &[f32],
    vel_x: &[f32],
    vel_y: &[f32],
    dt: f32,
    dims: GridDims,
) {
    debug_assert_eq!(dest.len(), dims.padded_len());
    debug_assert_eq!(source.len(), dims.padded_len());
    debug_assert_eq!(vel_x.len(), dims.padded_len());
    debug_assert_eq!(vel_y.len(), dims.padded_len());
    let w = dims.width() as i32;
    let h = dims.height() as i32;
    // One grid-cell step per unit velocity per 1/W of simulated time,
    // on both axes, keeps the trace distance resolution-independent.
    let dt0 = dt * dims.width() as f32;

    for cell_y in 1..=h {
        for cell_x in 1..=w {
            let i = dims.index(cell_x, cell_y);
            let mut x = cell_x as f32 - dt0 * vel_x[i];
            let mut y = cell_y as f32 - dt0 * vel_y[i];

            x = x.clamp(0.5, w as f32 + 0.5);
            y = y.clamp(0.5, h as f32 + 0.5);

            let x0 = x.floor();
            let y0 = y.floor();
            let i0 = x0 as i32;
            let i1 = i0 + 1;
            let j0 = y0 as i32;
            let j1 = j0 + 1;

            let s1 = x - x0;
            let s0 = 1.0 - s1;
            let t1 = y - y0;
            let t0 = 1.0 - t1;

            dest[i] = s0
                * (t0 * source[dims.index(i0, j0)] + t1 * source[dims.index(i0, j1)])
                + s1 * (t0 * source[dims.index(i1, j0)] + t1 * source[dims.index(i1, j1)]);
        }
    }
    enforce(kind, dest, dims);
}
