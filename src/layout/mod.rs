//! Greedy word wrapping and line placement.
//!
//! Layout happens in two passes, which can be run separately or together:
//!
//! - [`break_lines`](crate::layout::break_lines) - splits text into lines that fit within the
//!   maximum width, measuring every candidate line with the font
//! - [`position_lines`](crate::layout::position_lines) - places each line on its baseline,
//!   aligns it horizontally, and outlines it
//! - [`layout_text`](crate::layout::layout_text) - both of the above in one go
//!
//! Nothing here reads font files or writes output; all font knowledge comes in
//! through a [`FontMetrics`](crate::FontMetrics) provider, such as [`Font`](crate::Font).
//!
//! # Example
//!
//! ```
//! use glyph_wrap::{Alignment, Font, LayoutParameters, Pt};
//! use glyph_wrap::layout::layout_text;
//!
//! let font_data = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf"));
//! let font = Font::load(font_data.to_vec()).expect("can load font");
//!
//! let params = LayoutParameters::builder(Pt(300.0), Pt(15.0))
//!     .line_spacing(Pt(5.0))
//!     .alignment(Alignment::Center)
//!     .build()
//!     .expect("valid parameters");
//!
//! let result = layout_text("Hello, world! This is a longer run of text.", &params, &font)
//!     .expect("can lay out text");
//!
//! for line in result.lines.iter() {
//!     println!("<path d=\"{}\"/>", line.glyphs.path);
//! }
//! println!("{} x {}", result.width, result.height);
//! ```

mod breaker;
mod positioner;

#[cfg(test)]
pub(crate) mod testing;

pub use breaker::*;
pub use positioner::*;
