//! Rill: a stable-fluids ASCII animation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all rill sub-crates. For most users, adding `rill` as a
//! single dependency is sufficient.
//!
//! A rill animation is a small incompressible-fluid simulation whose
//! density field is rendered as text once per tick. Character art can
//! be installed as the backdrop: it rasterizes into a base density
//! field the fluid washes over and settles back onto.
//!
//! # Quick start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! // A 12x4 grid with a character-art backdrop.
//! let dims = GridDims::new(12, 4).unwrap();
//! let mut config = SessionConfig::new(dims);
//! config.art = Some("~~~ rill ~~~".into());
//! config.style = RenderStyle::art_overlay();
//!
//! let mut session = Session::new(config).unwrap();
//! session.apply(Command::Tap { cell: Cell::new(6, 2) });
//! let frame = session.tick();
//! assert_eq!(frame.tick, TickId(1));
//! assert_eq!(frame.height(), 4);
//! println!("{frame}");
//! ```
//!
//! For an animation that advances on its own, spawn a
//! [`engine::RealtimeSession`] instead and poll
//! [`latest_frame()`](engine::RealtimeSession::latest_frame) whenever
//! the host redraws.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rill-core` | Grid dimensions, cells, ticks, commands, errors |
//! | [`solver`] | `rill-solver` | Stable-fluids solver: diffusion, advection, projection |
//! | [`glyph`] | `rill-glyph` | Character ramps, art rasterization, frame rendering |
//! | [`engine`] | `rill-engine` | Lockstep sessions and the realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`rill-core`).
///
/// Contains [`types::GridDims`] with the padded-field indexing rule,
/// the [`types::Command`] vocabulary, and the grid error type.
pub use rill_core as types;

/// The stable-fluids solver (`rill-solver`).
///
/// [`solver::FluidGrid`] owns the density and velocity fields and
/// advances them one [`step()`](solver::FluidGrid::step) at a time;
/// the diffusion, advection, and projection passes are also exported
/// as free functions over padded buffers.
pub use rill_solver as solver;

/// Density-to-glyph mapping and frame rendering (`rill-glyph`).
///
/// [`glyph::GlyphRamp`] quantizes densities into character ramps,
/// [`glyph::ArtGrid`] rasterizes backdrop art, and
/// [`glyph::FrameRenderer`] produces per-tick [`glyph::GlyphFrame`]s.
pub use rill_glyph as glyph;

/// Session orchestration (`rill-engine`).
///
/// [`engine::Session`] for lockstep stepping driven by the host,
/// [`engine::RealtimeSession`] for autonomous background ticking.
pub use rill_engine as engine;

/// Common imports for typical rill usage.
///
/// ```rust
/// use rill::prelude::*;
/// ```
///
/// This imports the most frequently used types: grid geometry,
/// commands, the solver grid, render styles, and the session types.
pub mod prelude {
    // Core types
    pub use rill_core::{Cell, Command, GridDims, GridError, TickId};

    // Solver
    pub use rill_solver::{FluidGrid, FluidParams};

    // Glyphs and frames
    pub use rill_glyph::{ArtGrid, FrameRenderer, GlyphFrame, GlyphRamp, RenderStyle};

    // Sessions
    pub use rill_engine::{
        ConfigError, InteractionConfig, RealtimeSession, Session, SessionConfig, SubmitError,
        TickMetrics,
    };
}
