use crate::units::*;

/// A rectangle, specified by two opposite corners. Layout output lives in a
/// y-down space (like SVG), so `(x1, y1)` is the top-left corner and
/// `(x2, y2)` the bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (top) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (bottom) corner.
    pub y2: Pt,
}

impl Rect {
    /// A zero-sized rectangle sitting on a single point
    pub fn at(x: Pt, y: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Grow the rectangle so that it contains the given point
    pub fn include(&mut self, x: Pt, y: Pt) {
        self.x1 = self.x1.min(x);
        self.y1 = self.y1.min(y);
        self.x2 = self.x2.max(x);
        self.y2 = self.y2.max(y);
    }
}
