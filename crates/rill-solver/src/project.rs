//! Pressure projection toward a divergence-free velocity field.

use rill_core::GridDims;

use crate::boundary::{enforce, FieldKind};
use crate::diffuse::lin_solve;

/// Project `(vel_x, vel_y)` toward zero divergence.
///
/// Three stages: measure per-cell divergence with central differences,
/// solve the pressure Poisson equation `sum4(p) - 4p = -div` with the
/// shared fixed-sweep relaxation, then subtract the pressure gradient
/// from the velocity. One pass removes most of the divergence a
/// relaxed solve can see; the stepper runs it before and after
/// advection, which keeps the field approximately incompressible and
/// gives the flow its characteristic swirl.
///
/// `pressure` and `divergence` are caller-provided workspace buffers;
/// their prior contents are overwritten.
pub fn project(
    vel_x: &mut [f32],
    vel_y: &mut [f32],
    pressure: &mut [f32],
    divergence: &mut [f32],
    dims: GridDims,
) {
    debug_assert_eq!(vel_x.len(), dims.padded_len());
    debug_assert_eq!(vel_y.len(), dims.padded_len());
    debug_assert_eq!(pressure.len(), dims.padded_len());
    debug_assert_eq!(divergence.len(), dims.padded_len());
    let w = dims.width() as i32;
    let h = dims.height() as i32;
    let scale = dims.width() as f32;

    for y in 1..=h {
        for x in 1..=w {
            divergence[dims.index(x, y)] = -0.5
                * (vel_x[dims.index(x + 1, y)] - vel_x[dims.index(x - 1, y)]
                    + vel_y[dims.index(x, y + 1)]
                    - vel_y[dims.index(x, y - 1)])
                / scale;
            pressure[dims.index(x, y)] = 0.0;
        }
    }
    enforce(FieldKind::Scalar, divergence, dims);
    enforce(FieldKind::Scalar, pressure, dims);

    lin_solve(FieldKind::Scalar, pressure, divergence, 1.0, 4.0, dims);

    for y in 1..=h {
        for x in 1..=w {
            vel_x[dims.index(x, y)] -=
                0.5 * scale * (pressure[dims.index(x + 1, y)] - pressure[dims.index(x - 1, y)]);
            vel_y[dims.index(x, y)] -=
                0.5 * scale * (pressure[dims.index(x, y + 1)] - pressure[dims.index(x, y - 1)]);
        }
    }
    enforce(FieldKind::VelocityX, vel_x, dims);
    enforce(FieldKind::VelocityY, vel_y, dims);
}
