//! The in-session holder of the current template revision.

use crate::models::edit::{AxisValue, TemplateField};
use crate::models::position::Position;
use crate::models::template::TemplateConfig;

/// Holds "the current configuration". Every operation swaps in a whole new
/// revision; nothing is kept once the model is dropped.
#[derive(Debug, Clone, Default)]
pub struct TemplateModel {
    current: TemplateConfig,
}

impl TemplateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: TemplateConfig) -> Self {
        Self { current: config }
    }

    pub fn get(&self) -> &TemplateConfig {
        &self.current
    }

    pub fn set_field(&mut self, field: TemplateField) -> &TemplateConfig {
        self.current = self.current.with_field(field);
        &self.current
    }

    pub fn set_position(&mut self, axis: AxisValue) -> &TemplateConfig {
        self.current = self.current.with_axis(axis);
        &self.current
    }

    /// Used by the position grid, which sets both axes in one click.
    pub fn place(&mut self, position: Position) -> &TemplateConfig {
        self.current = self.current.with_position(position);
        &self.current
    }

    pub fn reset(&mut self) -> &TemplateConfig {
        self.current = TemplateConfig::default();
        &self.current
    }

    pub fn into_config(self) -> TemplateConfig {
        self.current
    }
}
