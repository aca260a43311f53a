//! blankslate-export
//!
//! Turns a [`TemplateConfig`](blankslate_core::TemplateConfig) into either a
//! standalone HTML document (via Tera) or the style directives a live
//! preview needs. Both go through the same alignment lookup in [`layout`].

pub mod error;
pub mod filename;
pub mod layout;
pub mod preview;
pub mod render;
pub mod styles;

pub use error::ExportError;
pub use filename::{slugify, suggested_filename};
pub use preview::{PreviewStyle, project_preview};
pub use render::compile;
