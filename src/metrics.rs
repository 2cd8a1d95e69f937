//! The capability layout needs from a font.
//!
//! The line breaker and positioner never touch font files directly; they go
//! through [`FontMetrics`]. [`Font`](crate::Font) implements it for
//! TrueType/OpenType faces, but any font engine can be placed behind it.

use crate::{FontMeasurementError, Pt, Rect};

/// Inter-glyph spacing flags passed along with every measurement
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct SpacingOptions {
    /// Apply the font's pair kerning between adjacent glyphs
    pub kerning: bool,
    /// Extra space between glyphs, in thousandths of an em
    pub tracking: f32,
    /// Extra space between glyphs, in ems. When non-zero, this is used instead of `tracking`
    pub letter_spacing: f32,
}

impl SpacingOptions {
    /// The extra advance inserted between two adjacent glyphs (kerning aside)
    /// at the given font size
    pub fn gap(&self, size: Pt) -> Pt {
        if self.letter_spacing != 0.0 {
            size * self.letter_spacing
        } else {
            size * (self.tracking / 1000.0)
        }
    }
}

/// The outline of one line of text, positioned on its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun<P> {
    /// Provider-specific outline geometry
    pub path: P,
    /// Ink bounds of the outline, in the same space as the origin it was
    /// drawn at. `None` when nothing visible was drawn
    pub bounding_box: Option<Rect>,
}

/// Font measurement and outlining, as needed by the layout functions.
///
/// Coordinates handed to and returned from the provider are in a y-down
/// space: a larger `y` is further down the block.
pub trait FontMetrics {
    /// Outline geometry produced for a line. Layout treats it as opaque
    type Path;

    /// Total horizontal advance of `text` at `size`, including whatever
    /// spacing `spacing` asks for
    fn advance_width(
        &self,
        text: &str,
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<Pt, FontMeasurementError>;

    /// Outline `text` so that `origin` is the left end of its baseline
    fn glyph_run(
        &self,
        text: &str,
        origin: (Pt, Pt),
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<GlyphRun<Self::Path>, FontMeasurementError>;

    /// Distance from the baseline to the top of the font at `size`
    fn ascent(&self, size: Pt) -> Pt;
}
