use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextLayoutError {
    #[error("invalid layout parameter `{name}`: {reason}")]
    /// A [`LayoutParameters`](crate::LayoutParameters) value was out of range. Only raised
    /// while building parameters, never during layout
    InvalidParameters { name: &'static str, reason: String },

    #[error(transparent)]
    /// The font metrics provider failed to measure or outline some text
    FontMeasurement(#[from] FontMeasurementError),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

impl TextLayoutError {
    pub(crate) fn invalid<S: ToString>(name: &'static str, reason: S) -> TextLayoutError {
        TextLayoutError::InvalidParameters {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Errors raised by a [`FontMetrics`](crate::FontMetrics) provider. Layout passes these
/// through untouched
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontMeasurementError {
    #[error("font has no glyph for {ch:?}")]
    /// The text contains a character the font cannot draw
    MissingGlyph { ch: char },

    #[error("font metrics provider failed: {0}")]
    /// Any other provider-specific failure
    Provider(String),
}
