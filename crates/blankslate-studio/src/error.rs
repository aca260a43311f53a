use thiserror::Error;

use blankslate_core::CoreError;
use blankslate_export::ExportError;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("invalid value for {field}: {reason}")]
    Input { field: String, reason: String },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("export cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    pub fn input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        StudioError::Input {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
