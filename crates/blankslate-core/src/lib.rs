//! blankslate-core
//!
//! Pure domain types for the header template editor: the template
//! configuration record, field-level edits and the in-session model that
//! holds the current revision. No I/O lives here.

pub mod error;
pub mod model;
pub mod models;

pub use error::CoreError;
pub use model::TemplateModel;
pub use models::edit::{AxisValue, TemplateField};
pub use models::position::{GridCell, HorizontalPosition, Position, VerticalPosition, position_grid};
pub use models::template::{FontSize, FontWeight, TemplateConfig};
