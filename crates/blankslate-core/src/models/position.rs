use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Where the header text sits inside the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Position {
    pub x: HorizontalPosition,
    pub y: VerticalPosition,
}

impl Position {
    pub fn new(x: HorizontalPosition, y: VerticalPosition) -> Self {
        Self { x, y }
    }

    /// All nine placements, row by row from top-left to bottom-right.
    pub fn all() -> impl Iterator<Item = Position> {
        VerticalPosition::ALL
            .into_iter()
            .flat_map(|y| HorizontalPosition::ALL.into_iter().map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HorizontalPosition {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalPosition {
    pub const ALL: [HorizontalPosition; 3] = [
        HorizontalPosition::Left,
        HorizontalPosition::Center,
        HorizontalPosition::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HorizontalPosition::Left => "left",
            HorizontalPosition::Center => "center",
            HorizontalPosition::Right => "right",
        }
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalPosition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HorizontalPosition::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidHorizontalPosition(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VerticalPosition {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalPosition {
    pub const ALL: [VerticalPosition; 3] = [
        VerticalPosition::Top,
        VerticalPosition::Center,
        VerticalPosition::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VerticalPosition::Top => "top",
            VerticalPosition::Center => "center",
            VerticalPosition::Bottom => "bottom",
        }
    }
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalPosition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VerticalPosition::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidVerticalPosition(s.to_string()))
    }
}

/// One cell of the 3×3 visual position guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridCell {
    pub position: Position,
    /// True for the cell matching the current placement.
    pub active: bool,
}

/// Lay out the position guide for `current`: three rows (top, center,
/// bottom) of three cells (left, center, right). Exactly one cell is active.
pub fn position_grid(current: Position) -> Vec<GridCell> {
    Position::all()
        .map(|position| GridCell {
            position,
            active: position == current,
        })
        .collect()
}
