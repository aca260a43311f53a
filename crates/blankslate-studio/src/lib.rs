//! blankslate-studio library root.
//!
//! The editor session and its adapters (file export, clipboard).
//! The `blankslate` binary is a thin command-line front end over these, and
//! integration tests exercise them directly.

pub mod clipboard;
pub mod error;
pub mod export;
pub mod input;
pub mod notify;
pub mod session;

pub use error::StudioError;
pub use session::EditorSession;
