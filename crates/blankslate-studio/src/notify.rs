use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, user-visible message about the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Emit this notice via tracing.
    pub fn emit(&self) {
        match self.level {
            NoticeLevel::Success => info!(notice = %self.message, "notification"),
            NoticeLevel::Error => warn!(notice = %self.message, "notification"),
        }
    }
}

pub const EXPORTED: &str = "Template exported successfully!";
pub const EXPORT_FAILED: &str = "Failed to export template";
pub const COPIED: &str = "Code copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy code";
pub const RESET: &str = "Template reset to defaults";

/// Receives notices from the session. The front end decides how to show them.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Keeps every notice; handy for front ends that render a toast list.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
