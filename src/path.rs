use crate::{Pt, Rect};
use std::fmt;

/// A single drawing command of a glyph outline
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo { x: Pt, y: Pt },
    LineTo { x: Pt, y: Pt },
    QuadTo { x1: Pt, y1: Pt, x: Pt, y: Pt },
    CurveTo { x1: Pt, y1: Pt, x2: Pt, y2: Pt, x: Pt, y: Pt },
    Close,
}

/// Vector outline of a run of glyphs, in y-down output space
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlyphPath {
    pub commands: Vec<PathCommand>,
}

impl GlyphPath {
    pub fn new() -> GlyphPath {
        GlyphPath::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Bounds of every point of the path, control points included. `None`
    /// for a path with no points
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        let mut include = |x: Pt, y: Pt| {
            bbox = Some(match bbox {
                Some(mut b) => {
                    b.include(x, y);
                    b
                }
                None => Rect::at(x, y),
            });
        };

        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => include(x, y),
                PathCommand::QuadTo { x1, y1, x, y } => {
                    include(x1, y1);
                    include(x, y);
                }
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    include(x1, y1);
                    include(x2, y2);
                    include(x, y);
                }
                PathCommand::Close => {}
            }
        }

        bbox
    }

    /// Render the path as SVG path data (the contents of a `d` attribute),
    /// rounding coordinates to at most `decimals` decimal places
    pub fn to_svg_data(&self, decimals: usize) -> String {
        let num = |v: Pt| format_number(*v, decimals);
        let mut d = String::new();
        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo { x, y } => {
                    d.push_str(&format!("M{} {}", num(x), num(y)));
                }
                PathCommand::LineTo { x, y } => {
                    d.push_str(&format!("L{} {}", num(x), num(y)));
                }
                PathCommand::QuadTo { x1, y1, x, y } => {
                    d.push_str(&format!("Q{} {} {} {}", num(x1), num(y1), num(x), num(y)));
                }
                PathCommand::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    d.push_str(&format!(
                        "C{} {} {} {} {} {}",
                        num(x1),
                        num(y1),
                        num(x2),
                        num(y2),
                        num(x),
                        num(y)
                    ));
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

impl fmt::Display for GlyphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_data(2))
    }
}

fn format_number(v: f32, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    // "-0" after rounding
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
