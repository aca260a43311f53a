use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::position::Position;

/// The configuration record for one header template.
///
/// Value-like: a session holds exactly one current revision, edits replace
/// single fields and a reset swaps in [`TemplateConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TemplateConfig {
    /// Display name. Only used to suggest the export filename.
    pub name: String,
    pub header_text: String,
    /// CSS color, hex or named.
    pub text_color: String,
    /// CSS color, hex or named.
    pub background_color: String,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub position: Position,
    pub font_family: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            name: "My Template".to_string(),
            header_text: "Apper Blank Template".to_string(),
            text_color: "#ef4444".to_string(),
            background_color: "#ffffff".to_string(),
            font_size: FontSize::DEFAULT,
            font_weight: FontWeight::Semibold,
            position: Position::default(),
            font_family: "Inter".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Parse a template from its camelCase JSON form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the constraints serde cannot express on its own.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        Ok(())
    }
}

/// Header font size in pixels, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: u8 = 12;
    pub const MAX: u8 = 72;
    pub const DEFAULT: FontSize = FontSize(24);

    /// Strict constructor: out-of-range values are rejected.
    pub fn new(px: i64) -> Result<Self, CoreError> {
        if px < i64::from(Self::MIN) || px > i64::from(Self::MAX) {
            return Err(CoreError::FontSizeOutOfRange(px));
        }
        Ok(Self(px as u8))
    }

    /// Range-input constructor: out-of-range values snap to the nearest bound.
    pub fn clamped(px: i64) -> Self {
        Self(px.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn px(self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for FontSize {
    type Error = CoreError;

    fn try_from(px: i64) -> Result<Self, Self::Error> {
        Self::new(px)
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five selectable font weights. Serialized as the CSS numeric keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FontWeight {
    #[serde(rename = "300")]
    Light,
    #[serde(rename = "400")]
    Normal,
    #[serde(rename = "500")]
    Medium,
    #[default]
    #[serde(rename = "600")]
    Semibold,
    #[serde(rename = "700")]
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 5] = [
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    /// The CSS `font-weight` value.
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "700",
        }
    }

    /// Label shown next to the option in the weight selector.
    pub fn label(self) -> &'static str {
        match self {
            FontWeight::Light => "Light",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Accepts either the numeric keyword (`"600"`) or the label (`"semibold"`).
impl FromStr for FontWeight {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FontWeight::ALL
            .into_iter()
            .find(|w| w.as_css() == trimmed || w.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidFontWeight(s.to_string()))
    }
}
