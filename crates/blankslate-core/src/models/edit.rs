use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::position::{HorizontalPosition, Position, VerticalPosition};
use crate::models::template::{FontSize, FontWeight, TemplateConfig};

/// A replacement value for exactly one top-level template field.
///
/// Position is edited through [`AxisValue`] instead, one axis at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum TemplateField {
    Name(String),
    HeaderText(String),
    TextColor(String),
    BackgroundColor(String),
    FontSize(FontSize),
    FontWeight(FontWeight),
    FontFamily(String),
}

impl TemplateField {
    /// The camelCase key of the field this edit targets.
    pub fn key(&self) -> &'static str {
        match self {
            TemplateField::Name(_) => "name",
            TemplateField::HeaderText(_) => "headerText",
            TemplateField::TextColor(_) => "textColor",
            TemplateField::BackgroundColor(_) => "backgroundColor",
            TemplateField::FontSize(_) => "fontSize",
            TemplateField::FontWeight(_) => "fontWeight",
            TemplateField::FontFamily(_) => "fontFamily",
        }
    }
}

/// A replacement value for one axis of [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "axis", content = "value", rename_all = "lowercase")]
#[ts(export)]
pub enum AxisValue {
    X(HorizontalPosition),
    Y(VerticalPosition),
}

impl TemplateConfig {
    /// Return a copy with exactly the targeted field replaced.
    pub fn with_field(&self, field: TemplateField) -> TemplateConfig {
        let mut next = self.clone();
        match field {
            TemplateField::Name(v) => next.name = v,
            TemplateField::HeaderText(v) => next.header_text = v,
            TemplateField::TextColor(v) => next.text_color = v,
            TemplateField::BackgroundColor(v) => next.background_color = v,
            TemplateField::FontSize(v) => next.font_size = v,
            TemplateField::FontWeight(v) => next.font_weight = v,
            TemplateField::FontFamily(v) => next.font_family = v,
        }
        next
    }

    /// Return a copy with one position axis replaced.
    pub fn with_axis(&self, axis: AxisValue) -> TemplateConfig {
        let mut next = self.clone();
        match axis {
            AxisValue::X(x) => next.position.x = x,
            AxisValue::Y(y) => next.position.y = y,
        }
        next
    }

    /// Return a copy placed at `position` (both axes at once).
    pub fn with_position(&self, position: Position) -> TemplateConfig {
        let mut next = self.clone();
        next.position = position;
        next
    }
}
