use super::breaker::{break_lines, Line};
use crate::{
    metrics::{FontMetrics, GlyphRun},
    Alignment, BaselinePolicy, LayoutParameters, Pt, Rect, TextLayoutError,
};
use log::debug;

/// A wrapped line, placed within the block and outlined
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine<P> {
    pub line: Line,
    /// Left end of the line's baseline
    pub baseline_origin: (Pt, Pt),
    /// Measured advance width of the line
    pub width: Pt,
    pub glyphs: GlyphRun<P>,
}

impl<P> PositionedLine<P> {
    /// How far down the line's ink reaches. Lines without ink end at their
    /// baseline
    pub fn bottom(&self) -> Pt {
        self.glyphs
            .bounding_box
            .map(|bbox| bbox.y2)
            .unwrap_or(self.baseline_origin.1)
    }
}

/// The outcome of laying out a run of text
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult<P> {
    pub lines: Vec<PositionedLine<P>>,
    /// Width of the widest line
    pub width: Pt,
    /// Distance from the top of the block to the bottom of the last line's ink
    pub height: Pt,
}

impl<P> LayoutResult<P> {
    /// A result with no lines and no size
    pub fn empty() -> LayoutResult<P> {
        LayoutResult {
            lines: Vec::new(),
            width: Pt(0.0),
            height: Pt(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The block's bounds, anchored at the origin
    pub fn bounding_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.width,
            y2: self.height,
        }
    }
}

/// Where the baseline of line `index` (counting from 0) sits, measured down
/// from the top of the block. Always strictly increasing in `index`
pub fn baseline_y<M: FontMetrics>(params: &LayoutParameters, metrics: &M, index: usize) -> Pt {
    let font_size = params.font_size();
    let step = font_size + params.line_spacing();
    let nth = (index + 1) as f32;

    match params.baseline() {
        BaselinePolicy::Calibrated {
            unit_scale,
            top_inset,
        } => step * unit_scale * nth - top_inset,
        BaselinePolicy::HalfEm => step * nth - font_size / 2.0,
        BaselinePolicy::Ascender => metrics.ascent(font_size) + step * index as f32,
    }
}

/// Horizontal offset of a line `line_width` wide within a block `block_width` wide
pub fn alignment_offset(alignment: Alignment, block_width: Pt, line_width: Pt) -> Pt {
    match alignment {
        Alignment::Left => Pt(0.0),
        Alignment::Center => (block_width - line_width) / 2.0,
        Alignment::Right => block_width - line_width,
    }
}

/// Place already-broken lines one under the other, aligned within the width
/// of the widest line, and outline each of them.
///
/// Each line is measured on its own. If measuring or outlining any line
/// fails, the whole layout fails and nothing is returned.
pub fn position_lines<M: FontMetrics>(
    lines: Vec<Line>,
    params: &LayoutParameters,
    metrics: &M,
) -> Result<LayoutResult<M::Path>, TextLayoutError> {
    if lines.is_empty() {
        return Ok(LayoutResult::empty());
    }

    let spacing = params.spacing();
    let font_size = params.font_size();

    let texts: Vec<String> = lines.iter().map(Line::text).collect();
    let widths = texts
        .iter()
        .map(|text| metrics.advance_width(text, font_size, &spacing))
        .collect::<Result<Vec<Pt>, _>>()?;
    let block_width = widths.iter().copied().fold(Pt(0.0), Pt::max);

    let mut positioned: Vec<PositionedLine<M::Path>> = Vec::with_capacity(lines.len());
    for (index, ((line, text), width)) in lines.into_iter().zip(texts).zip(widths).enumerate() {
        let x = alignment_offset(params.alignment(), block_width, width);
        let y = baseline_y(params, metrics, index);
        let glyphs = metrics.glyph_run(&text, (x, y), font_size, &spacing)?;

        positioned.push(PositionedLine {
            line,
            baseline_origin: (x, y),
            width,
            glyphs,
        });
    }

    let height = positioned
        .last()
        .map(PositionedLine::bottom)
        .unwrap_or_default();

    debug!(
        "positioned {} lines in a {} x {} block",
        positioned.len(),
        block_width,
        height
    );

    Ok(LayoutResult {
        lines: positioned,
        width: block_width,
        height,
    })
}

/// Wrap `text` with [`break_lines`] and place the result with
/// [`position_lines`]
pub fn layout_text<M: FontMetrics>(
    text: &str,
    params: &LayoutParameters,
    metrics: &M,
) -> Result<LayoutResult<M::Path>, TextLayoutError> {
    let lines = break_lines(text, params, metrics)?;
    position_lines(lines, params, metrics)
}
