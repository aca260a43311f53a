//! Clipboard adapters.
//!
//! The system clipboard is reached through the platform's copy utility
//! (`pbcopy`, `clip`, `wl-copy`, `xclip`, `xsel`), fed on stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::StudioError;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), StudioError>;
}

/// Pipes text into an external copy program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a user override such as `["xclip", "-selection", "clipboard"]`.
    pub fn from_command_line(command: &[String]) -> Result<Self, StudioError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| StudioError::Clipboard("empty clipboard command".to_string()))?;
        Ok(Self::new(program, args.to_vec()))
    }

    /// Pick the first copy utility found on `PATH` for this platform.
    pub fn detect() -> Result<Self, StudioError> {
        for &(program, args) in candidates() {
            if let Ok(path) = which::which(program) {
                debug!(program = %path.display(), "using clipboard command");
                return Ok(Self::new(
                    path,
                    args.iter().map(|a| a.to_string()).collect(),
                ));
            }
        }
        Err(StudioError::Clipboard(
            "no clipboard utility found on PATH".to_string(),
        ))
    }
}

type Candidate = (&'static str, &'static [&'static str]);

const MACOS: &[Candidate] = &[("pbcopy", &[])];
const WINDOWS: &[Candidate] = &[("clip", &[])];
const WAYLAND: &[Candidate] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];
const X11: &[Candidate] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];

fn candidates() -> &'static [Candidate] {
    if cfg!(target_os = "macos") {
        MACOS
    } else if cfg!(windows) {
        WINDOWS
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        WAYLAND
    } else {
        X11
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), StudioError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                StudioError::Clipboard(format!("failed to run {}: {e}", self.program.display()))
            })?;

        // Reap the child even when the pipe breaks; stdin is closed first.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;

        if let Err(e) = written {
            return Err(StudioError::Clipboard(format!(
                "failed to write to {}: {e}",
                self.program.display()
            )));
        }
        if !status.success() {
            return Err(StudioError::Clipboard(format!(
                "{} exited with {status}",
                self.program.display()
            )));
        }
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), StudioError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The user's clipboard: the given command if any, otherwise whatever
/// copy utility is detected at the moment of copying.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self { command }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), StudioError> {
        let mut inner = match &self.command {
            Some(command) => CommandClipboard::from_command_line(command)?,
            None => CommandClipboard::detect()?,
        };
        inner.write_text(text)
    }
}
