//! Reusable character-art fixtures.
//!
//! Both fixtures use only characters from the art ramp, so their
//! rasterized base densities stay at or below 1 and an untouched
//! session renders them verbatim under the overlay style.

/// An 8x4 ripple ramping from blank edges to a dense center.
pub const WAVE_ART: &str = "  ..::  \n .:;+;: \n.:;+x+;:\n :;+x+; ";

/// A 4x2 block of the densest art glyphs.
pub const BADGE_ART: &str = "@##@\n@%%@";

/// Interior width and height of [`WAVE_ART`].
pub const WAVE_DIMS: (u32, u32) = (8, 4);

/// Interior width and height of [`BADGE_ART`].
pub const BADGE_DIMS: (u32, u32) = (4, 2);
