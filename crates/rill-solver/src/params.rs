//! Scalar solver parameters.

/// Solver parameters, fixed for the lifetime of a grid.
///
/// All three are dimensionless tuning knobs rather than physical
/// quantities; the defaults are the interactive-rate values the solver
/// was tuned with (gentle spreading, slightly viscous motion, ten
/// ticks per simulated unit of time).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidParams {
    /// Diffusion rate of the density field.
    pub diffusion: f32,
    /// Viscosity: diffusion rate applied to the velocity field.
    pub viscosity: f32,
    /// Time step advanced per tick.
    pub dt: f32,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            diffusion: 1e-4,
            viscosity: 1e-4,
            dt: 0.1,
        }
    }
}
