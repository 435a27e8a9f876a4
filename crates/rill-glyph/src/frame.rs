//! Frame rendering: density fields to rows of glyphs.

use std::fmt;

use rill_core::{GridDims, TickId};

use crate::art::ArtGrid;
use crate::ramp::GlyphRamp;

/// Default density divisor for plain rendering.
pub const PLAIN_SCALE: f32 = 50.0;
/// Default density divisor for art rendering.
pub const ART_SCALE: f32 = 40.0;
/// Default density above which fluid covers the art backdrop.
pub const ART_THRESHOLD: f32 = 1.0;

/// How a density field turns into glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderStyle {
    /// Every cell maps through the render ramp at `density / scale`.
    Plain {
        /// Density divisor applied before the ramp lookup.
        scale: f32,
    },
    /// Cells above `threshold` map through the art ramp; the rest
    /// show the art backdrop.
    ArtOverlay {
        /// Density divisor applied before the ramp lookup.
        scale: f32,
        /// Density at or below which the backdrop shows through.
        threshold: f32,
    },
    /// Cells interpolate between the backdrop glyph and the fluid
    /// glyph by `density / scale`.
    ArtBlend {
        /// Density divisor applied before the ramp lookup and blend.
        scale: f32,
    },
}

impl RenderStyle {
    /// Plain rendering at the default scale.
    pub fn plain() -> Self {
        Self::Plain { scale: PLAIN_SCALE }
    }

    /// Art overlay at the default scale and threshold.
    pub fn art_overlay() -> Self {
        Self::ArtOverlay { scale: ART_SCALE, threshold: ART_THRESHOLD }
    }

    /// Art blend at the default scale.
    pub fn art_blend() -> Self {
        Self::ArtBlend { scale: ART_SCALE }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::plain()
    }
}

/// One rendered frame: a tick stamp and one string per grid row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphFrame {
    /// Tick the frame was rendered at.
    pub tick: TickId,
    /// Interior rows, top to bottom, each `width` glyphs long.
    pub rows: Vec<String>,
}

impl GlyphFrame {
    /// Number of rows in the frame.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for GlyphFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Renders density fields into [`GlyphFrame`]s under a fixed style.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    style: RenderStyle,
    render_ramp: GlyphRamp,
    art_ramp: GlyphRamp,
}

impl FrameRenderer {
    /// A renderer with the standard ramps and the given style.
    pub fn new(style: RenderStyle) -> Self {
        Self { style, render_ramp: GlyphRamp::render(), art_ramp: GlyphRamp::art() }
    }

    /// The style this renderer applies.
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// The ramp used by art styles; art backdrops rasterize with it.
    pub fn art_ramp(&self) -> &GlyphRamp {
        &self.art_ramp
    }

    /// Render the interior of `density` into a frame.
    ///
    /// `density` must be the padded field for `dims`; the ghost
    /// border never renders. Art styles read `art` for backdrop
    /// glyphs and fall back to spaces when it is absent.
    pub fn render(
        &self,
        density: &[f32],
        dims: GridDims,
        art: Option<&ArtGrid>,
        tick: TickId,
    ) -> GlyphFrame {
        let w = dims.width() as i32;
        let h = dims.height() as i32;
        let mut rows = Vec::with_capacity(h as usize);
        for y in 1..=h {
            let mut row = String::with_capacity(w as usize);
            for x in 1..=w {
                let d = density[dims.index(x, y)];
                row.push(self.glyph_at(d, x, y, art));
            }
            rows.push(row);
        }
        GlyphFrame { tick, rows }
    }

    fn glyph_at(&self, d: f32, x: i32, y: i32, art: Option<&ArtGrid>) -> char {
        match self.style {
            RenderStyle::Plain { scale } => self.render_ramp.glyph_for(d / scale),
            RenderStyle::ArtOverlay { scale, threshold } => {
                if d > threshold {
                    self.art_ramp.glyph_for(d / scale)
                } else {
                    base_char(art, x, y)
                }
            }
            RenderStyle::ArtBlend { scale } => {
                let base = base_char(art, x, y);
                let fluid = self.art_ramp.glyph_for(d / scale);
                self.art_ramp.blend(base, fluid, d / scale)
            }
        }
    }
}

fn base_char(art: Option<&ArtGrid>, x: i32, y: i32) -> char {
    art.map_or(' ', |a| a.base_char(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u32, h: u32) -> GridDims {
        GridDims::new(w, h).unwrap()
    }

    fn field_with(dims: GridDims, cells: &[(i32, i32, f32)]) -> Vec<f32> {
        let mut field = vec![0.0; dims.padded_len()];
        for &(x, y, d) in cells {
            field[dims.index(x, y)] = d;
        }
        field
    }

    #[test]
    fn plain_style_maps_density_through_the_render_ramp() {
        let dims = dims(3, 1);
        let field = field_with(dims, &[(1, 1, 0.0), (2, 1, 25.0), (3, 1, 75.0)]);
        let frame = FrameRenderer::new(RenderStyle::plain())
            .render(&field, dims, None, TickId(4));

        // 25 / 50 = 0.5 lands on '='; 75 / 50 clamps to '@'.
        assert_eq!(frame.rows, vec![" =@".to_string()]);
        assert_eq!(frame.tick, TickId(4));
    }

    #[test]
    fn overlay_shows_art_below_the_threshold_and_fluid_above() {
        let dims = dims(3, 1);
        let art = ArtGrid::from_text("abc", dims);
        let field = field_with(dims, &[(1, 1, 0.5), (2, 1, 1.0), (3, 1, 20.0)]);
        let frame = FrameRenderer::new(RenderStyle::art_overlay())
            .render(&field, dims, Some(&art), TickId(0));

        // Exactly at the threshold still shows the backdrop; 20 / 40
        // lands on 'x' through the art ramp.
        assert_eq!(frame.rows, vec!["abx".to_string()]);
    }

    #[test]
    fn overlay_without_art_falls_back_to_spaces() {
        let dims = dims(2, 2);
        let field = field_with(dims, &[(2, 2, 50.0)]);
        let frame = FrameRenderer::new(RenderStyle::art_overlay())
            .render(&field, dims, None, TickId(0));

        assert_eq!(frame.rows, vec!["  ".to_string(), " %".to_string()]);
    }

    #[test]
    fn blend_returns_the_backdrop_at_zero_density() {
        let dims = dims(2, 1);
        let art = ArtGrid::from_text("@.", dims);
        let field = field_with(dims, &[]);
        let frame = FrameRenderer::new(RenderStyle::art_blend())
            .render(&field, dims, Some(&art), TickId(0));

        assert_eq!(frame.rows, vec!["@.".to_string()]);
    }

    #[test]
    fn blend_saturates_to_the_fluid_glyph() {
        let dims = dims(1, 1);
        let art = ArtGrid::from_text(".", dims);
        // 80 / 40 = 2.0: blend factor caps at one, glyph clamps to
        // the top of the art ramp.
        let field = field_with(dims, &[(1, 1, 80.0)]);
        let frame = FrameRenderer::new(RenderStyle::art_blend())
            .render(&field, dims, Some(&art), TickId(0));

        assert_eq!(frame.rows, vec!["%".to_string()]);
    }

    #[test]
    fn frames_cover_the_interior_only() {
        let dims = dims(4, 3);
        let mut field = vec![99.0; dims.padded_len()];
        for y in 1..=3 {
            for x in 1..=4 {
                field[dims.index(x, y)] = 0.0;
            }
        }
        let frame = FrameRenderer::new(RenderStyle::plain())
            .render(&field, dims, None, TickId(0));

        assert_eq!(frame.height(), 3);
        assert!(frame.rows.iter().all(|r| r == "    "));
    }

    #[test]
    fn display_joins_rows_with_newlines() {
        let frame = GlyphFrame { tick: TickId(1), rows: vec!["ab".into(), "cd".into()] };
        assert_eq!(frame.to_string(), "ab\ncd");
    }
}
