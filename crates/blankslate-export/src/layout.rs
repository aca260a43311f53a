//! Position → flexbox alignment lookup.
//!
//! The compiled document and the live preview both resolve alignment here,
//! so the two can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use blankslate_core::{HorizontalPosition, Position, VerticalPosition};

/// A value for `justify-content` / `align-items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FlexAlign {
    #[serde(rename = "flex-start")]
    Start,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "flex-end")]
    End,
}

impl FlexAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
        }
    }
}

impl fmt::Display for FlexAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// A value for `text-align`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// The resolved alignment of the header inside its flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Alignment {
    /// Main axis (row): horizontal placement.
    pub justify_content: FlexAlign,
    /// Cross axis: vertical placement.
    pub align_items: FlexAlign,
    pub text_align: TextAlign,
}

pub fn horizontal(x: HorizontalPosition) -> (FlexAlign, TextAlign) {
    match x {
        HorizontalPosition::Left => (FlexAlign::Start, TextAlign::Left),
        HorizontalPosition::Center => (FlexAlign::Center, TextAlign::Center),
        HorizontalPosition::Right => (FlexAlign::End, TextAlign::Right),
    }
}

pub fn vertical(y: VerticalPosition) -> FlexAlign {
    match y {
        VerticalPosition::Top => FlexAlign::Start,
        VerticalPosition::Center => FlexAlign::Center,
        VerticalPosition::Bottom => FlexAlign::End,
    }
}

pub fn resolve(position: Position) -> Alignment {
    let (justify_content, text_align) = horizontal(position.x);
    Alignment {
        justify_content,
        align_items: vertical(position.y),
        text_align,
    }
}
