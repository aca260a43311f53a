use std::io::{self, Write};
use std::path::Path;

use eyre::{Result, WrapErr};

use blankslate_core::TemplateConfig;
use blankslate_studio::EditorSession;
use blankslate_studio::clipboard::SystemClipboard;
use blankslate_studio::export::DirectoryTarget;
use blankslate_studio::notify::{Notice, NoticeLevel, Notifier};

use crate::cli::TemplateArgs;

/// Prints notices to stderr so stdout only carries command output.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notice: Notice) {
        let marker = match notice.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✗",
        };
        eprintln!("{marker} {}", notice.message);
    }
}

fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

fn open_session(args: &TemplateArgs) -> Result<EditorSession<StderrNotifier>> {
    let config = match &args.config {
        Some(path) => load_template(path)?,
        None => TemplateConfig::default(),
    };

    let mut session = EditorSession::with_config(config, StderrNotifier);
    for edit in args.edits()? {
        session.apply(edit);
    }
    Ok(session)
}

fn load_template(path: &Path) -> Result<TemplateConfig> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read template at {}", path.display()))?;
    TemplateConfig::from_json(&contents)
        .wrap_err_with(|| format!("invalid template in {}", path.display()))
}

pub fn defaults() -> Result<()> {
    print_text(&TemplateConfig::default().to_json_pretty()?)?;
    Ok(())
}

pub fn compile(args: &TemplateArgs) -> Result<()> {
    let session = open_session(args)?;
    let html = session.code()?;
    // The document already ends with a newline.
    io::stdout().lock().write_all(html.as_bytes())?;
    Ok(())
}

pub fn preview(args: &TemplateArgs) -> Result<()> {
    let session = open_session(args)?;
    print_text(&serde_json::to_string_pretty(&session.preview())?)?;
    Ok(())
}

pub fn grid(args: &TemplateArgs) -> Result<()> {
    let session = open_session(args)?;
    let cells = session.grid();

    for row in cells.chunks(3) {
        let line: Vec<&str> = row
            .iter()
            .map(|cell| if cell.active { "[●]" } else { "[ ]" })
            .collect();
        print_text(&format!("{}   {}", line.join(" "), row[0].position.y))?;
    }
    print_text(&format!("current: {}", session.template().position))?;
    Ok(())
}

pub fn export(args: &TemplateArgs, out_dir: &Path) -> Result<()> {
    let target = DirectoryTarget::new(out_dir);

    let mut session = open_session(args)?;
    let path = session.export(&target)?;
    print_text(&path.display().to_string())?;
    Ok(())
}

#[cfg(feature = "dialog")]
pub fn export_with_dialog(args: &TemplateArgs, start_dir: &Path) -> Result<()> {
    let target = blankslate_studio::export::DialogTarget {
        start_dir: Some(start_dir.to_path_buf()),
    };

    let mut session = open_session(args)?;
    let path = session.export(&target)?;
    print_text(&path.display().to_string())?;
    Ok(())
}

pub fn copy(args: &TemplateArgs, clipboard_command: Option<Vec<String>>) -> Result<()> {
    let mut clipboard = SystemClipboard::new(clipboard_command);

    let mut session = open_session(args)?;
    session.copy(&mut clipboard)?;
    Ok(())
}
