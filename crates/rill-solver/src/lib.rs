//! Stable-fluids solver core for the rill workspace.
//!
//! Implements the classic semi-Lagrangian "stable fluids" scheme on a
//! fixed 2D grid with a one-cell ghost border: implicit diffusion and
//! pressure projection via fixed-sweep Gauss-Seidel relaxation, and
//! backward-characteristic advection with bilinear resampling. The
//! scheme is unconditionally stable at any time step, trading physical
//! accuracy for bounded per-tick cost at interactive rates.
//!
//! [`FluidGrid`] owns the field buffers and orchestrates one
//! [`step`](FluidGrid::step) per tick; the operator modules
//! ([`boundary`], [`diffuse`], [`project`], [`advect`]) are free
//! functions over flat `f32` slices so they can run on any disjoint
//! pair of buffers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod boundary;
pub mod diffuse;
pub mod grid;
pub mod params;
pub mod project;

pub use advect::advect;
pub use boundary::{enforce, FieldKind};
pub use diffuse::{diffuse, lin_solve, LIN_SOLVE_SWEEPS};
pub use grid::FluidGrid;
pub use params::FluidParams;
pub use project::project;
