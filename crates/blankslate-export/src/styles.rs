use serde::{Deserialize, Serialize};

/// Fixed document styling that is not part of the user-editable template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Generic family appended after the configured font (e.g. "sans-serif").
    pub fallback_family: String,

    /// CSS height of the body flex container.
    pub body_height: String,

    /// Padding around the header text, in pixels.
    pub padding_px: u16,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            fallback_family: "sans-serif".to_string(),
            body_height: "100vh".to_string(),
            padding_px: 20,
        }
    }
}
