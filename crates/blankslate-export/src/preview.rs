//! Live preview projection.
//!
//! A renderer applies [`ContainerStyle`] to the preview canvas and
//! [`TextStyle`] to the header node. Alignment comes from the same lookup
//! the compiler uses.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use blankslate_core::TemplateConfig;

use crate::layout::{self, FlexAlign, TextAlign};
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PreviewStyle {
    /// Changes whenever the header text or its position changes; renderers
    /// replay their entrance animation on a new key.
    pub key: String,
    pub container: ContainerStyle,
    pub text: TextStyle,
    pub stats: TemplateStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContainerStyle {
    pub justify_content: FlexAlign,
    pub align_items: FlexAlign,
    pub text_align: TextAlign,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TextStyle {
    pub color: String,
    /// With unit, e.g. `"24px"`.
    pub font_size: String,
    pub font_weight: String,
    pub font_family: String,
    /// Generic family the document falls back to, e.g. `"sans-serif"`.
    pub fallback_family: String,
}

/// Summary shown next to the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TemplateStats {
    /// Length of the header text in characters.
    pub characters: usize,
    pub font_size_px: u8,
    /// The position as `x-y`, e.g. `"center-bottom"`.
    pub badge: String,
}

impl ContainerStyle {
    /// Inline CSS declarations for the preview canvas.
    pub fn to_css(&self) -> String {
        format!(
            "display: flex; justify-content: {}; align-items: {}; text-align: {}; background-color: {};",
            self.justify_content, self.align_items, self.text_align, self.background_color
        )
    }
}

impl TextStyle {
    /// The `font-family` value, in the same form the compiled document uses.
    pub fn font_stack(&self) -> String {
        format!("'{}', {}", self.font_family, self.fallback_family)
    }

    /// Inline CSS declarations for the header text node.
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; font-size: {}; font-weight: {}; font-family: {};",
            self.color,
            self.font_size,
            self.font_weight,
            self.font_stack()
        )
    }
}

pub fn project_preview(config: &TemplateConfig) -> PreviewStyle {
    let alignment = layout::resolve(config.position);
    let styles = DocumentStyles::default();

    PreviewStyle {
        key: format!("{}-{}", config.header_text, config.position),
        container: ContainerStyle {
            justify_content: alignment.justify_content,
            align_items: alignment.align_items,
            text_align: alignment.text_align,
            background_color: config.background_color.clone(),
        },
        text: TextStyle {
            color: config.text_color.clone(),
            font_size: format!("{}px", config.font_size),
            font_weight: config.font_weight.as_css().to_string(),
            font_family: config.font_family.clone(),
            fallback_family: styles.fallback_family,
        },
        stats: TemplateStats {
            characters: config.header_text.chars().count(),
            font_size_px: config.font_size.px(),
            badge: config.position.to_string(),
        },
    }
}
