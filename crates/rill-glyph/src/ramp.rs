//! Character ramps: ordered glyph sets quantizing density.

use indexmap::IndexMap;

/// The 10-level ramp used for generic rendering.
pub const RENDER_RAMP_CHARS: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// The 12-level ramp used for art-overlay rendering.
///
/// Richer than [`RENDER_RAMP_CHARS`] so art drawn with it survives the
/// inverse lookup; the two ramps have different cardinalities and
/// independent glyph-to-density mappings.
pub const ART_RAMP_CHARS: [char; 12] = [
    ' ', '.', ':', ';', '+', 'x', 'X', '$', '&', '@', '#', '%',
];

/// An ordered low-to-high density character ramp.
///
/// Quantizes a density into a glyph with
/// `index = floor(density * (levels - 1))` clamped to the ramp, and
/// inverts known glyphs back to their normalized density
/// `position / (levels - 1)`. Unknown glyphs invert to exactly `1.0`,
/// treating unrecognized art characters as maximally dense.
///
/// Construct one per session and reuse it; the inverse lookup table is
/// built once at construction.
///
/// # Examples
///
/// ```
/// use rill_glyph::GlyphRamp;
///
/// let ramp = GlyphRamp::render();
/// assert_eq!(ramp.glyph_for(0.0), ' ');
/// assert_eq!(ramp.glyph_for(1.0), '@');
/// assert_eq!(ramp.density_of('?'), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct GlyphRamp {
    chars: Vec<char>,
    positions: IndexMap<char, usize>,
}

impl GlyphRamp {
    /// The generic 10-level rendering ramp.
    pub fn render() -> Self {
        Self::from_chars(&RENDER_RAMP_CHARS)
    }

    /// The 12-level art-overlay ramp.
    pub fn art() -> Self {
        Self::from_chars(&ART_RAMP_CHARS)
    }

    /// Build a ramp from an explicit character list, ordered low to
    /// high density. Duplicate characters invert to their first
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `chars` is empty.
    pub fn from_chars(chars: &[char]) -> Self {
        assert!(!chars.is_empty(), "a glyph ramp needs at least one character");
        let mut positions = IndexMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            positions.entry(c).or_insert(i);
        }
        Self {
            chars: chars.to_vec(),
            positions,
        }
    }

    /// Number of levels in the ramp.
    pub fn levels(&self) -> usize {
        self.chars.len()
    }

    /// The ramp characters, low to high.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Quantize a density into a glyph.
    ///
    /// Densities at or below zero map to the first glyph, at or above
    /// one to the last; everything in between buckets uniformly.
    pub fn glyph_for(&self, density: f32) -> char {
        let max = (self.chars.len() - 1) as i32;
        let index = (density * max as f32).floor() as i32;
        self.chars[index.clamp(0, max) as usize]
    }

    /// Normalized density of a glyph: its ramp position over
    /// `levels - 1`, or exactly `1.0` for a glyph not in the ramp.
    pub fn density_of(&self, glyph: char) -> f32 {
        match self.positions.get(&glyph) {
            Some(&i) => i as f32 / (self.chars.len() - 1).max(1) as f32,
            None => 1.0,
        }
    }

    /// Crossfade between a base glyph and a fluid glyph.
    ///
    /// Interpolates the two glyph densities by `min(density, 1)` and
    /// re-quantizes through this ramp, so a cell fades from the static
    /// base toward the live fluid glyph as density rises.
    pub fn blend(&self, base: char, fluid: char, density: f32) -> char {
        let base_d = self.density_of(base);
        let fluid_d = self.density_of(fluid);
        let blended = base_d + (fluid_d - base_d) * density.min(1.0);
        self.glyph_for(blended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ramp_levels() {
        assert_eq!(GlyphRamp::render().levels(), 10);
        assert_eq!(GlyphRamp::art().levels(), 12);
    }

    #[test]
    fn round_trip_is_exact_for_every_ramp_glyph() {
        for ramp in [GlyphRamp::render(), GlyphRamp::art()] {
            for &c in ramp.chars() {
                assert_eq!(ramp.glyph_for(ramp.density_of(c)), c, "glyph {c:?}");
            }
        }
    }

    #[test]
    fn unknown_glyph_inverts_to_exactly_one() {
        let ramp = GlyphRamp::art();
        assert_eq!(ramp.density_of('Z'), 1.0);
        assert_eq!(ramp.density_of('~'), 1.0);
        assert_eq!(ramp.density_of('\n'), 1.0);
        // '-' is a render-ramp glyph but not an art-ramp glyph.
        assert_eq!(ramp.density_of('-'), 1.0);
        assert_eq!(GlyphRamp::render().density_of('-'), 3.0 / 9.0);
    }

    #[test]
    fn extremes_clamp_to_ramp_ends() {
        let ramp = GlyphRamp::render();
        assert_eq!(ramp.glyph_for(-3.0), ' ');
        assert_eq!(ramp.glyph_for(0.0), ' ');
        assert_eq!(ramp.glyph_for(1.0), '@');
        assert_eq!(ramp.glyph_for(250.0), '@');
        assert_eq!(ramp.glyph_for(f32::NAN), ' ');
    }

    #[test]
    fn blend_endpoints_return_the_inputs() {
        let ramp = GlyphRamp::art();
        assert_eq!(ramp.blend('.', '#', 0.0), '.');
        assert_eq!(ramp.blend('.', '#', 1.0), '#');
        // Density past one clamps to the fluid glyph.
        assert_eq!(ramp.blend('.', '#', 7.5), '#');
    }

    #[test]
    fn blend_midpoint_lands_between() {
        let ramp = GlyphRamp::art();
        // ' ' is 0.0 and '%' is 1.0; halfway is position 5.5, which
        // floors to 'x'.
        assert_eq!(ramp.blend(' ', '%', 0.5), 'x');
    }

    #[test]
    fn blend_treats_unknown_base_as_dense() {
        let ramp = GlyphRamp::art();
        // Unknown base starts at density 1.0 and fades toward ' '.
        assert_eq!(ramp.blend('?', ' ', 1.0), ' ');
        assert_eq!(ramp.blend('?', ' ', 0.0), '%');
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn quantization_is_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for ramp in [GlyphRamp::render(), GlyphRamp::art()] {
                let pos = |c| ramp.chars().iter().position(|&r| r == c).unwrap();
                prop_assert!(pos(ramp.glyph_for(lo)) <= pos(ramp.glyph_for(hi)));
            }
        }

        #[test]
        fn quantization_stays_on_the_ramp(d in -10.0f32..10.0) {
            for ramp in [GlyphRamp::render(), GlyphRamp::art()] {
                let glyph = ramp.glyph_for(d);
                prop_assert!(ramp.chars().contains(&glyph));
            }
        }
    }
}
