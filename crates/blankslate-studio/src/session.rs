//! The editor session: one template model plus the actions a front end
//! can trigger on it.

use std::path::PathBuf;

use tracing::{info, warn};

use blankslate_core::{
    AxisValue, GridCell, Position, TemplateConfig, TemplateField, TemplateModel, position_grid,
};
use blankslate_export::{PreviewStyle, compile, project_preview, suggested_filename};

use crate::clipboard::Clipboard;
use crate::error::StudioError;
use crate::export::ExportTarget;
use crate::input::Edit;
use crate::notify::{self, Notice, Notifier};

/// Every mutation returns the re-derived preview so the front end can
/// re-render immediately. Export and copy never touch the model; their
/// outcome is reported through the notifier.
pub struct EditorSession<N: Notifier> {
    model: TemplateModel,
    notifier: N,
}

impl<N: Notifier> EditorSession<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_config(TemplateConfig::default(), notifier)
    }

    pub fn with_config(config: TemplateConfig, notifier: N) -> Self {
        Self {
            model: TemplateModel::from_config(config),
            notifier,
        }
    }

    pub fn template(&self) -> &TemplateConfig {
        self.model.get()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn set_field(&mut self, field: TemplateField) -> PreviewStyle {
        project_preview(self.model.set_field(field))
    }

    pub fn set_position(&mut self, axis: AxisValue) -> PreviewStyle {
        project_preview(self.model.set_position(axis))
    }

    /// A click on the position grid sets both axes.
    pub fn place(&mut self, position: Position) -> PreviewStyle {
        project_preview(self.model.place(position))
    }

    pub fn apply(&mut self, edit: Edit) -> PreviewStyle {
        match edit {
            Edit::Field(field) => self.set_field(field),
            Edit::Axis(axis) => self.set_position(axis),
        }
    }

    pub fn reset(&mut self) -> PreviewStyle {
        let preview = project_preview(self.model.reset());
        self.send(Notice::success(notify::RESET));
        preview
    }

    pub fn preview(&self) -> PreviewStyle {
        project_preview(self.model.get())
    }

    pub fn grid(&self) -> Vec<GridCell> {
        position_grid(self.model.get().position)
    }

    /// The compiled document, as shown in the code preview.
    pub fn code(&self) -> Result<String, StudioError> {
        Ok(compile(self.model.get())?)
    }

    pub fn suggested_filename(&self) -> String {
        suggested_filename(&self.model.get().name)
    }

    /// Compile and save the document through `target`.
    pub fn export(&mut self, target: &dyn ExportTarget) -> Result<PathBuf, StudioError> {
        let result = self
            .code()
            .and_then(|html| target.save(&self.suggested_filename(), &html));

        match &result {
            Ok(path) => {
                info!(path = %path.display(), "template exported");
                self.send(Notice::success(notify::EXPORTED));
            }
            Err(e) => {
                warn!(error = %e, "template export failed");
                self.send(Notice::error(notify::EXPORT_FAILED));
            }
        }
        result
    }

    /// Compile the document and put it on `clipboard`.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), StudioError> {
        let result = self.code().and_then(|html| clipboard.write_text(&html));

        match &result {
            Ok(()) => self.send(Notice::success(notify::COPIED)),
            Err(e) => {
                warn!(error = %e, "copy to clipboard failed");
                self.send(Notice::error(notify::COPY_FAILED));
            }
        }
        result
    }

    fn send(&mut self, notice: Notice) {
        notice.emit();
        self.notifier.notify(notice);
    }
}
