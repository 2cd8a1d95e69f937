//! A font metrics provider with trivially predictable numbers, for tests

use crate::{
    metrics::{FontMetrics, GlyphRun, SpacingOptions},
    FontMeasurementError, Pt, Rect,
};

/// Every character, spaces included, advances `advance` ems. The ascent is
/// 0.8em and the descent 0.2em
pub(crate) struct FixedAdvance {
    pub advance: f32,
    kerning: Vec<((char, char), f32)>,
    missing: Vec<char>,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        FixedAdvance {
            advance: 0.5,
            kerning: Vec::new(),
            missing: Vec::new(),
        }
    }
}

/// What [`FixedAdvance`] "draws": the text and where it was placed
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FixedRun {
    pub text: String,
    pub origin: (Pt, Pt),
}

impl FixedAdvance {
    /// Kern the given pair by `ems` when kerning is turned on
    pub fn with_kerning(mut self, pair: (char, char), ems: f32) -> Self {
        self.kerning.push((pair, ems));
        self
    }

    /// Pretend the font has no glyph for `ch`
    pub fn without_glyph(mut self, ch: char) -> Self {
        self.missing.push(ch);
        self
    }

    fn kern(&self, left: char, right: char) -> f32 {
        self.kerning
            .iter()
            .find(|(pair, _)| *pair == (left, right))
            .map(|(_, ems)| *ems)
            .unwrap_or_default()
    }
}

impl FontMetrics for FixedAdvance {
    type Path = FixedRun;

    fn advance_width(
        &self,
        text: &str,
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<Pt, FontMeasurementError> {
        let chars: Vec<char> = text.chars().collect();
        let mut x = Pt(0.0);
        for (i, &ch) in chars.iter().enumerate() {
            if self.missing.contains(&ch) {
                return Err(FontMeasurementError::MissingGlyph { ch });
            }
            x += size * self.advance;
            if let Some(&next) = chars.get(i + 1) {
                if spacing.kerning {
                    x += size * self.kern(ch, next);
                }
                x += spacing.gap(size);
            }
        }
        Ok(x)
    }

    fn glyph_run(
        &self,
        text: &str,
        origin: (Pt, Pt),
        size: Pt,
        spacing: &SpacingOptions,
    ) -> Result<GlyphRun<FixedRun>, FontMeasurementError> {
        let width = self.advance_width(text, size, spacing)?;
        let bounding_box = if text.trim().is_empty() {
            None
        } else {
            Some(Rect {
                x1: origin.0,
                y1: origin.1 - self.ascent(size),
                x2: origin.0 + width,
                y2: origin.1 + size * 0.2,
            })
        };
        Ok(GlyphRun {
            path: FixedRun {
                text: text.to_string(),
                origin,
            },
            bounding_box,
        })
    }

    fn ascent(&self, size: Pt) -> Pt {
        size * 0.8
    }
}
