//! Benchmark profiles and utilities for the rill animation engine.
//!
//! Provides pre-built [`SessionConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: 60x60 grid (3.6K cells), plain rendering
//! - [`art_profile`]: 50x50 grid with a generated art backdrop
//! - [`ripple_art`]: deterministic concentric-ring art at any size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rill_core::GridDims;
use rill_engine::SessionConfig;
use rill_glyph::{RenderStyle, ART_RAMP_CHARS};

/// Build the reference benchmark profile: 60x60 grid (3.6K cells),
/// plain rendering, default solver parameters.
///
/// Each tick runs two 20-sweep diffusion solves, two projections, and
/// three advections over the padded field, so this profile exercises
/// the full solver at the size interactive hosts typically use.
pub fn reference_profile(seed: u64) -> SessionConfig {
    let mut config = SessionConfig::new(dims(60, 60));
    config.seed = seed;
    config
}

/// Build the art benchmark profile: 50x50 grid with a generated
/// ripple backdrop rendered in overlay style.
pub fn art_profile(seed: u64) -> SessionConfig {
    let mut config = SessionConfig::new(dims(50, 50));
    config.art = Some(ripple_art(50, 50));
    config.style = RenderStyle::art_overlay();
    config.seed = seed;
    config
}

/// Generate concentric-ring art from the art ramp.
///
/// The glyph at each cell is picked by distance from the grid center,
/// cycling through the ramp, so the output is deterministic and uses
/// only characters with exact inverse densities.
pub fn ripple_art(width: u32, height: u32) -> String {
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let mut art = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height {
        if y > 0 {
            art.push('\n');
        }
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let ring = (dx * dx + dy * dy).sqrt() as usize;
            art.push(ART_RAMP_CHARS[ring % ART_RAMP_CHARS.len()]);
        }
    }
    art
}

fn dims(width: u32, height: u32) -> GridDims {
    GridDims::new(width, height).unwrap()
}
