use crate::{
    metrics::{FontMetrics, GlyphRun, SpacingOptions},
    path::{GlyphPath, PathCommand},
    FontMeasurementError, Pt, TextLayoutError,
};
use log::warn;
use owned_ttf_parser::{
    gpos::{PairAdjustment, PositioningSubtable},
    AsFaceRef, Face, GlyphId, OutlineBuilder, OwnedFace, Tag,
};

const KERN: Tag = Tag::from_bytes(b"kern");

/// A parsed TrueType / OpenType font, usable as a [`FontMetrics`] provider.
///
/// By default, characters the font has no glyph for are drawn with a
/// replacement glyph (U+FFFD, then `?`, then the font's `.notdef` glyph) and
/// a warning is logged. Use [`Font::strict`] to fail instead.
pub struct Font {
    pub face: OwnedFace,
    strict: bool,
    /// `GPOS` lookups referenced by the `kern` feature, in lookup order
    kern_lookups: Vec<u16>,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextLayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let kern_lookups = kern_feature_lookups(face.as_face_ref());

        Ok(Font {
            face,
            strict: false,
            kern_lookups,
        })
    }

    /// Fail measurement with [`FontMeasurementError::MissingGlyph`] instead of
    /// substituting a replacement glyph
    pub fn strict(mut self) -> Font {
        self.strict = true;
        self
    }

    fn face_ref(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Look up the glyph to draw `ch` with, applying the missing glyph policy
    fn resolve_glyph(&self, ch: char) -> Result<GlyphId, FontMeasurementError> {
        if let Some(gid) = self.face_ref().glyph_index(ch) {
            return Ok(gid);
        }
        if self.strict {
            return Err(FontMeasurementError::MissingGlyph { ch });
        }

        let gid = self
            .face_ref()
            .glyph_index('\u{FFFD}')
            .or_else(|| self.face_ref().glyph_index('?'))
            .unwrap_or(GlyphId(0));
        warn!("no glyph for {ch:?}, drawing glyph {} instead", gid.0);
        Ok(gid)
    }

    fn glyphs(&self, text: &str) -> Result<Vec<GlyphId>, FontMeasurementError> {
        text.chars().map(|ch| self.resolve_glyph(ch)).collect()
    }

    /// Horizontal kerning between two glyphs, in font units. Pair adjustments
    /// from the `GPOS` `kern` feature are used first, then the legacy `kern` table
    pub fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        self.gpos_kerning(left, right)
            .or_else(|| self.legacy_kerning(left, right))
            .unwrap_or_default()
    }

    fn gpos_kerning(&self, left: GlyphId, right: GlyphId) -> Option<i16> {
        let gpos = self.face_ref().tables().gpos?;
        self.kern_lookups
            .iter()
            .filter_map(|&index| gpos.lookups.get(index))
            .flat_map(|lookup| lookup.subtables.into_iter::<PositioningSubtable>())
            .find_map(|subtable| match subtable {
                PositioningSubtable::Pair(pair) => pair_kerning(&pair, left, right),
                _ => None,
            })
    }

    fn legacy_kerning(&self, left: GlyphId, right: GlyphId) -> Option<i16> {
        self.face_ref()
            .tables()
            .kern?
            .subtables
            .into_iter()
            .filter(|st| st.horizontal && !st.variable)
            .find_map(|st| st.glyphs_kerning(left, right))
    }

    /// Walk the pen across `glyphs`, calling `f` with each glyph and the x
    /// position of its origin. Returns the total advance
    fn walk<F>(&self, glyphs: &[GlyphId], size: Pt, spacing: &SpacingOptions, mut f: F) -> Pt
    where
        F: FnMut(GlyphId, Pt),
    {
        let scaling = self.scaling(size);
        let gap = spacing.gap(size);

        let mut x = Pt(0.0);
        for (i, &gid) in glyphs.iter().enumerate() {
            f(gid, x);
            x += scaling * self.face_ref().glyph_hor_advance(gid).unwrap_or_default() as f32;

            if let Some(&next) = glyphs.get(i + 1) {
                if spacing.kerning {
                    x += scaling * self.kerning(gid, next) as f32;
                }
                x += gap;
            }
        }
        x
    }
}

impl FontMetrics for Font {
    type Path = GlyphPath;

    fn advance_width(
        &self,
        text: &str,
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<Pt, FontMeasurementError> {
        let glyphs = self.glyphs(text)?;
        Ok(self.walk(&glyphs, size, spacing, |_, _| {}))
    }

    fn glyph_run(
        &self,
        text: &str,
        origin: (Pt, Pt),
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<GlyphRun<GlyphPath>, FontMeasurementError> {
        let glyphs = self.glyphs(text)?;
        let scale = *self.scaling(size);

        let mut path = GlyphPath::new();
        self.walk(&glyphs, size, spacing, |gid, x| {
            let mut outliner = Outliner {
                path: &mut path,
                origin: (*(origin.0 + x), *origin.1),
                scale,
            };
            // glyphs without an outline (such as spaces) simply draw nothing
            self.face_ref().outline_glyph(gid, &mut outliner);
        });

        let bounding_box = path.bounding_box();
        Ok(GlyphRun { path, bounding_box })
    }

    fn ascent(&self, size: Pt) -> Pt {
        Font::ascent(self, size)
    }
}

fn kern_feature_lookups(face: &Face<'_>) -> Vec<u16> {
    let Some(gpos) = face.tables().gpos else {
        return Vec::new();
    };
    let mut lookups: Vec<u16> = gpos
        .features
        .into_iter()
        .filter(|feature| feature.tag == KERN)
        .flat_map(|feature| feature.lookup_indices)
        .collect();
    // several scripts usually share the same lookups
    lookups.sort_unstable();
    lookups.dedup();
    lookups
}

/// The x advance adjustment of the first glyph of a pair, if this subtable
/// covers `left`
fn pair_kerning(pair: &PairAdjustment<'_>, left: GlyphId, right: GlyphId) -> Option<i16> {
    match pair {
        PairAdjustment::Format1 { coverage, sets } => {
            let set = sets.get(coverage.get(left)?)?;
            set.get(right).map(|(first, _)| first.x_advance)
        }
        PairAdjustment::Format2 {
            coverage,
            classes,
            matrix,
        } => {
            if !coverage.contains(left) {
                return None;
            }
            let pair_classes = (classes.0.get(left), classes.1.get(right));
            matrix.get(pair_classes).map(|(first, _)| first.x_advance)
        }
    }
}

/// Converts font-unit, y-up outlines into scaled, y-down path commands
struct Outliner<'p> {
    path: &'p mut GlyphPath,
    origin: (f32, f32),
    scale: f32,
}

impl Outliner<'_> {
    fn point(&self, x: f32, y: f32) -> (Pt, Pt) {
        (
            Pt(self.origin.0 + x * self.scale),
            Pt(self.origin.1 - y * self.scale),
        )
    }
}

impl OutlineBuilder for Outliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::LineTo { x, y });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::QuadTo { x1, y1, x, y });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.path.push(PathCommand::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.path.push(PathCommand::Close);
    }
}
