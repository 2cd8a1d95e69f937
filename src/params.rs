use crate::{metrics::SpacingOptions, Pt, TextLayoutError};
use std::str::FromStr;

/// Unit multiplier the SVG renderer was calibrated with
pub const SVG_UNIT_SCALE: f32 = 1.33;

/// Implicit top inset the SVG renderer was calibrated with
pub const SVG_TOP_INSET: Pt = Pt(3.0);

/// Horizontal alignment of each line within the laid out block
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = TextLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(TextLayoutError::invalid(
                "alignment",
                format!("`{other}` is not one of left, center, right"),
            )),
        }
    }
}

/// Decides where the baseline of each line sits, measured down from the top
/// of the block.
///
/// Every policy follows the same shape:
///
/// ```text
/// y(i) = (font_size + line_spacing) * scale * (i + 1) - correction
/// ```
///
/// and only differs in `scale` and `correction`. Renderers disagree on where
/// a glyph's origin sits relative to the top of its line box, so the
/// correction is a calibration value for the target rather than a property of
/// the font.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum BaselinePolicy {
    /// Fixed calibration for a particular renderer: sizes are multiplied by
    /// `unit_scale` and every baseline is lifted by `top_inset`
    Calibrated { unit_scale: f32, top_inset: Pt },
    /// Lift every baseline by half of the font size
    HalfEm,
    /// The first baseline sits exactly one ascent below the top of the block;
    /// subsequent lines follow every `font_size + line_spacing`
    #[default]
    Ascender,
}

impl BaselinePolicy {
    /// Calibration matching SVG output with px-sized fonts placed in pt space
    pub fn svg_calibrated() -> BaselinePolicy {
        BaselinePolicy::Calibrated {
            unit_scale: SVG_UNIT_SCALE,
            top_inset: SVG_TOP_INSET,
        }
    }

    fn validate(&self) -> Result<(), TextLayoutError> {
        if let BaselinePolicy::Calibrated {
            unit_scale,
            top_inset,
        } = self
        {
            if !(unit_scale.is_finite() && *unit_scale > 0.0) {
                return Err(TextLayoutError::invalid(
                    "baseline.unit_scale",
                    format!("must be a positive number, got {unit_scale}"),
                ));
            }
            if !top_inset.is_finite() {
                return Err(TextLayoutError::invalid(
                    "baseline.top_inset",
                    format!("must be finite, got {top_inset}"),
                ));
            }
        }
        Ok(())
    }
}

/// Everything that controls how a run of text is wrapped and positioned.
/// Values are checked once by [`LayoutParametersBuilder::build`], so anything
/// holding a `LayoutParameters` can rely on them being in range.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    max_width: Pt,
    font_size: Pt,
    tracking: f32,
    letter_spacing: f32,
    kerning: bool,
    line_spacing: Pt,
    alignment: Alignment,
    baseline: BaselinePolicy,
}

impl LayoutParameters {
    /// Start building parameters for lines at most `max_width` wide, set in
    /// `font_size`
    pub fn builder(max_width: Pt, font_size: Pt) -> LayoutParametersBuilder {
        LayoutParametersBuilder {
            params: LayoutParameters {
                max_width,
                font_size,
                tracking: 0.0,
                letter_spacing: 0.0,
                kerning: false,
                line_spacing: Pt(0.0),
                alignment: Alignment::Left,
                baseline: BaselinePolicy::default(),
            },
        }
    }

    pub fn max_width(&self) -> Pt {
        self.max_width
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    /// Extra space between glyphs, in thousandths of an em
    pub fn tracking(&self) -> f32 {
        self.tracking
    }

    /// Extra space between glyphs, in ems. Takes precedence over tracking
    pub fn letter_spacing(&self) -> f32 {
        self.letter_spacing
    }

    pub fn kerning(&self) -> bool {
        self.kerning
    }

    /// Extra vertical space between consecutive lines
    pub fn line_spacing(&self) -> Pt {
        self.line_spacing
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn baseline(&self) -> BaselinePolicy {
        self.baseline
    }

    /// The spacing flags handed to the font metrics provider
    pub fn spacing(&self) -> SpacingOptions {
        SpacingOptions {
            kerning: self.kerning,
            tracking: self.tracking,
            letter_spacing: self.letter_spacing,
        }
    }
}

/// Builder for [`LayoutParameters`]
#[derive(Debug, Clone)]
pub struct LayoutParametersBuilder {
    params: LayoutParameters,
}

impl LayoutParametersBuilder {
    pub fn tracking(mut self, tracking: f32) -> Self {
        self.params.tracking = tracking;
        self
    }

    pub fn letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.params.letter_spacing = letter_spacing;
        self
    }

    pub fn kerning(mut self, kerning: bool) -> Self {
        self.params.kerning = kerning;
        self
    }

    pub fn line_spacing(mut self, line_spacing: Pt) -> Self {
        self.params.line_spacing = line_spacing;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.params.alignment = alignment;
        self
    }

    pub fn baseline(mut self, baseline: BaselinePolicy) -> Self {
        self.params.baseline = baseline;
        self
    }

    /// Validate and freeze the parameters
    pub fn build(self) -> Result<LayoutParameters, TextLayoutError> {
        let p = self.params;

        if !(p.max_width.is_finite() && p.max_width > Pt(0.0)) {
            return Err(TextLayoutError::invalid(
                "max_width",
                format!("must be a positive number, got {}", p.max_width),
            ));
        }
        if !(p.font_size.is_finite() && p.font_size > Pt(0.0)) {
            return Err(TextLayoutError::invalid(
                "font_size",
                format!("must be a positive number, got {}", p.font_size),
            ));
        }
        if !(p.line_spacing.is_finite() && p.line_spacing >= Pt(0.0)) {
            return Err(TextLayoutError::invalid(
                "line_spacing",
                format!("must be zero or more, got {}", p.line_spacing),
            ));
        }
        if !p.tracking.is_finite() {
            return Err(TextLayoutError::invalid("tracking", "must be finite"));
        }
        if !p.letter_spacing.is_finite() {
            return Err(TextLayoutError::invalid("letter_spacing", "must be finite"));
        }
        p.baseline.validate()?;

        Ok(p)
    }
}
