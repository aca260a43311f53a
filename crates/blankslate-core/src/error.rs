use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("font size {0} is outside range [{min}, {max}]", min = crate::FontSize::MIN, max = crate::FontSize::MAX)]
    FontSizeOutOfRange(i64),

    #[error("invalid font weight: {0}")]
    InvalidFontWeight(String),

    #[error("invalid horizontal position: {0} (expected left, center or right)")]
    InvalidHorizontalPosition(String),

    #[error("invalid vertical position: {0} (expected top, center or bottom)")]
    InvalidVerticalPosition(String),

    #[error("unknown template field: {0}")]
    UnknownField(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
