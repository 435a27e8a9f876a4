//! Core types for the rill fluid simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the solver, glyph, and engine crates:
//! grid dimensions, tick and cell identifiers, interaction commands,
//! and construction-time error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod dims;
pub mod error;
pub mod id;

pub use command::Command;
pub use dims::GridDims;
pub use error::GridError;
pub use id::{Cell, TickId};
