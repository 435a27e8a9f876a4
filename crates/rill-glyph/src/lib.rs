//! Density-to-glyph mapping and ASCII frame rendering.
//!
//! The solver side of rill produces scalar density fields; this crate
//! turns them into text. [`GlyphRamp`] quantizes a density into an
//! ordered character ramp (and back), [`ArtGrid`] rasterizes a block
//! of character art into a base density field, and [`FrameRenderer`]
//! samples a padded density buffer into per-row strings once per tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod art;
pub mod frame;
pub mod ramp;

pub use art::ArtGrid;
pub use frame::{FrameRenderer, GlyphFrame, RenderStyle};
pub use ramp::{GlyphRamp, ART_RAMP_CHARS, RENDER_RAMP_CHARS};
