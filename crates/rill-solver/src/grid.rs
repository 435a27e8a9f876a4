//! Fluid grid state and the per-tick simulation step.

use rill_core::{GridDims, GridError};

use crate::advect::advect;
use crate::boundary::FieldKind;
use crate::diffuse::diffuse;
use crate::params::FluidParams;
use crate::project::project;

/// Fraction of the decayed density kept by the restore blend.
pub const RESTORE_KEEP: f32 = 0.92;

/// Fraction of the base density pulled in by the restore blend.
///
/// Together with [`RESTORE_KEEP`] this forms an exponential pull back
/// toward the static base image, so the artwork re-emerges a few ticks
/// after the flow has washed over it.
pub const RESTORE_PULL: f32 = 0.08;

/// Simulation state for one animation session.
///
/// Owns seven equally-sized field buffers over the padded grid: the
/// live density and velocity fields, their previous-iteration scratch
/// counterparts, and the write-once base density. The scratch buffers
/// double as the pressure/divergence workspace during projection;
/// every solver call receives disjoint `&mut` borrows, so no buffer is
/// ever aliased within a single operation.
///
/// Lifecycle: construct once per session, [`step`](Self::step) once
/// per tick, [`reset`](Self::reset) on demand, drop when the session
/// ends. Nothing is persisted.
#[derive(Clone, Debug)]
pub struct FluidGrid {
    dims: GridDims,
    params: FluidParams,
    density: Vec<f32>,
    density_scratch: Vec<f32>,
    base_density: Vec<f32>,
    velocity_x: Vec<f32>,
    velocity_y: Vec<f32>,
    velocity_scratch_x: Vec<f32>,
    velocity_scratch_y: Vec<f32>,
}

impl FluidGrid {
    /// Create a grid with all fields zeroed.
    ///
    /// [`GridDims`] is already validated, so construction cannot fail.
    pub fn new(dims: GridDims, params: FluidParams) -> Self {
        let len = dims.padded_len();
        Self {
            dims,
            params,
            density: vec![0.0; len],
            density_scratch: vec![0.0; len],
            base_density: vec![0.0; len],
            velocity_x: vec![0.0; len],
            velocity_y: vec![0.0; len],
            velocity_scratch_x: vec![0.0; len],
            velocity_scratch_y: vec![0.0; len],
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Solver parameters.
    pub fn params(&self) -> FluidParams {
        self.params
    }

    /// The live density field, padded.
    pub fn density(&self) -> &[f32] {
        &self.density
    }

    /// The static base density field, padded.
    pub fn base_density(&self) -> &[f32] {
        &self.base_density
    }

    /// The live horizontal velocity field, padded.
    pub fn velocity_x(&self) -> &[f32] {
        &self.velocity_x
    }

    /// The live vertical velocity field, padded.
    pub fn velocity_y(&self) -> &[f32] {
        &self.velocity_y
    }

    /// Add density at an interior cell; out-of-range cells are a no-op.
    ///
    /// Pointer coordinates routinely overshoot the grid during fast
    /// movement, so this is defined behavior, not an error.
    pub fn add_density(&mut self, x: i32, y: i32, amount: f32) {
        if !self.dims.in_interior(x, y) {
            return;
        }
        self.density[self.dims.index(x, y)] += amount;
    }

    /// Add velocity at an interior cell; out-of-range cells are a no-op.
    pub fn add_velocity(&mut self, x: i32, y: i32, dx: f32, dy: f32) {
        if !self.dims.in_interior(x, y) {
            return;
        }
        let i = self.dims.index(x, y);
        self.velocity_x[i] += dx;
        self.velocity_y[i] += dy;
    }

    /// Install the base density field, copying it into both the base
    /// and the live density buffer.
    ///
    /// Called once at session start with the rasterized art image. The
    /// supplied buffer must have the padded length.
    pub fn set_base_density(&mut self, field: &[f32]) -> Result<(), GridError> {
        if field.len() != self.dims.padded_len() {
            return Err(GridError::FieldLengthMismatch {
                expected: self.dims.padded_len(),
                actual: field.len(),
            });
        }
        self.base_density.copy_from_slice(field);
        self.density.copy_from_slice(field);
        Ok(())
    }

    /// Zero all mutable fields and restore the base image.
    ///
    /// The base density itself is write-once and survives resets.
    pub fn reset(&mut self) {
        self.density_scratch.fill(0.0);
        self.velocity_x.fill(0.0);
        self.velocity_y.fill(0.0);
        self.velocity_scratch_x.fill(0.0);
        self.velocity_scratch_y.fill(0.0);
        self.density.copy_from_slice(&self.base_density);
    }

    /// Advance the simulation by one tick.
    ///
    /// Runs the fixed stable-fluids pass: diffuse the velocity field
    /// into the scratch pair, project it, self-advect it back into the
    /// live pair, project again, then diffuse and advect density along
    /// the final velocity. Each projection borrows the velocity pair
    /// not being projected as its pressure/divergence workspace; those
    /// values are dead at that point and fully rewritten afterwards.
    ///
    /// `decay` scales density once per tick (nominally in `(0, 1]`)
    /// before the restore blend pulls every cell toward the base
    /// image.
    pub fn step(&mut self, decay: f32) {
        let dims = self.dims;
        let FluidParams {
            diffusion,
            viscosity,
            dt,
        } = self.params;

        diffuse(
            FieldKind::VelocityX,
            &mut self.velocity_scratch_x,
            &self.velocity_x,
            viscosity,
            dt,
            dims,
        );
        diffuse(
            FieldKind::VelocityY,
            &mut self.velocity_scratch_y,
            &self.velocity_y,
            viscosity,
            dt,
            dims,
        );
        project(
            &mut self.velocity_scratch_x,
            &mut self.velocity_scratch_y,
            &mut self.velocity_x,
            &mut self.velocity_y,
            dims,
        );

        advect(
            FieldKind::VelocityX,
            &mut self.velocity_x,
            &self.velocity_scratch_x,
            &self.velocity_scratch_x,
            &self.velocity_scratch_y,
            dt,
            dims,
        );
        advect(
            FieldKind::VelocityY,
            &mut self.velocity_y,
            &self.velocity_scratch_y,
            &self.velocity_scratch_x,
            &self.velocity_scratch_y,
            dt,
            dims,
        );
        project(
            &mut self.velocity_x,
            &mut self.velocity_y,
            &mut self.velocity_scratch_x,
            &mut self.velocity_scratch_y,
            dims,
        );

        diffuse(
            FieldKind::Scalar,
            &mut self.density_scratch,
            &self.density,
            diffusion,
            dt,
            dims,
        );
        advect(
            FieldKind::Scalar,
            &mut self.density,
            &self.density_scratch,
            &self.velocity_x,
            &self.velocity_y,
            dt,
            dims,
        );

        for (d, base) in self.density.iter_mut().zip(&self.base_density) {
            *d *= decay;
            *d = *d * RESTORE_KEEP + *base * RESTORE_PULL;
        }
    }
}
