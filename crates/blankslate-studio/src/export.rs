//! File export adapters.

use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::error::StudioError;

/// Somewhere a compiled document can be saved.
pub trait ExportTarget {
    /// Save `html` under the suggested `filename`, returning where it landed.
    fn save(&self, filename: &str, html: &str) -> Result<PathBuf, StudioError>;
}

/// Writes into a fixed directory, overwriting any file of the same name.
///
/// `filename` must be a single plain path component; anything that would
/// resolve outside `dir` is refused before touching the filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportTarget for DirectoryTarget {
    fn save(&self, filename: &str, html: &str) -> Result<PathBuf, StudioError> {
        if !is_plain_file_name(filename) {
            return Err(StudioError::input(
                "name",
                format!("{filename:?} is not a plain file name"),
            ));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        write_atomic(&path, html)?;
        Ok(path)
    }
}

fn is_plain_file_name(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Asks the user where to save through the native save dialog.
#[cfg(feature = "dialog")]
#[derive(Debug, Clone, Default)]
pub struct DialogTarget {
    pub start_dir: Option<PathBuf>,
}

#[cfg(feature = "dialog")]
impl ExportTarget for DialogTarget {
    fn save(&self, filename: &str, html: &str) -> Result<PathBuf, StudioError> {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(filename)
            .add_filter("HTML", &["html"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.save_file().ok_or(StudioError::Cancelled)?;
        write_atomic(&path, html)?;
        Ok(path)
    }
}

/// Write to a temp file next to `path`, then rename over it.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), StudioError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StudioError::input("path", format!("{} has no file name", path.display())))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, contents.as_bytes())?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    info!(path = %path.display(), bytes = contents.len(), "document written");
    Ok(())
}
