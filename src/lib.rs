mod error;
pub use error::*;

mod font;
pub use font::*;

/// Greedy line breaking and placement of the broken lines
pub mod layout;

/// The font capability that layout is built on
pub mod metrics;
pub use metrics::{FontMetrics, GlyphRun, SpacingOptions};

mod params;
pub use params::*;

mod path;
pub use path::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

/// Re-export the font parser, for access to the underlying face of a [Font]
pub use owned_ttf_parser;
