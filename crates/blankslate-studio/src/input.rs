//! Sanitization of raw UI input before it reaches the template model.
//!
//! The model itself never sees an out-of-range font size or an unknown
//! position: anything a form control can produce is either clamped or
//! rejected here.

use tracing::warn;

use blankslate_core::{AxisValue, CoreError, FontSize, FontWeight, TemplateField};

use crate::error::StudioError;

/// One change requested by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Field(TemplateField),
    Axis(AxisValue),
}

/// Range-input semantics: snap to the nearest bound instead of failing.
pub fn font_size_input(px: i64) -> FontSize {
    let size = FontSize::clamped(px);
    if i64::from(size.px()) != px {
        warn!(requested = px, applied = size.px(), "font size clamped to range");
    }
    size
}

/// Parse a `key=value` pair as typed into a generic field editor.
pub fn parse_assignment(assignment: &str) -> Result<Edit, StudioError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| StudioError::input(assignment, "expected KEY=VALUE"))?;
    parse_edit(key.trim(), value)
}

/// Parse a raw value for the field called `key`.
///
/// Keys are matched ignoring case, `-` and `_`, so `headerText`,
/// `header_text` and `header-text` all work. `x` and `y` target the position
/// axes.
pub fn parse_edit(key: &str, raw: &str) -> Result<Edit, StudioError> {
    let normalized: String = key
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    let edit = match normalized.as_str() {
        "name" => Edit::Field(TemplateField::Name(name_input(raw)?)),
        "headertext" => Edit::Field(TemplateField::HeaderText(raw.to_string())),
        "textcolor" => Edit::Field(TemplateField::TextColor(color_input("textColor", raw)?)),
        "backgroundcolor" => Edit::Field(TemplateField::BackgroundColor(color_input(
            "backgroundColor",
            raw,
        )?)),
        "fontsize" => {
            let px = raw
                .trim()
                .trim_end_matches("px")
                .parse::<i64>()
                .map_err(|e| StudioError::input("fontSize", e.to_string()))?;
            Edit::Field(TemplateField::FontSize(font_size_input(px)))
        }
        "fontweight" => Edit::Field(TemplateField::FontWeight(raw.parse::<FontWeight>()?)),
        "fontfamily" => Edit::Field(TemplateField::FontFamily(raw.trim().to_string())),
        "x" | "positionx" => Edit::Axis(AxisValue::X(raw.parse()?)),
        "y" | "positiony" => Edit::Axis(AxisValue::Y(raw.parse()?)),
        _ => return Err(CoreError::UnknownField(key.to_string()).into()),
    };

    Ok(edit)
}

/// The template name must stay non-empty; it becomes the export filename.
pub fn name_input(raw: &str) -> Result<String, StudioError> {
    if raw.trim().is_empty() {
        return Err(StudioError::input("name", "must not be empty"));
    }
    Ok(raw.to_string())
}

/// Colors are passed through to CSS as typed; only blank input is refused.
pub fn color_input(field: &str, raw: &str) -> Result<String, StudioError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StudioError::input(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}
