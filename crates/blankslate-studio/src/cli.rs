//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use blankslate_core::{AxisValue, FontWeight, HorizontalPosition, TemplateField, VerticalPosition};
use blankslate_studio::StudioError;
use blankslate_studio::input::{self, Edit};

#[derive(Parser)]
#[command(name = "blankslate")]
#[command(version, about = "Design a page header and export it as a standalone HTML file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the default template as JSON
    Defaults,

    /// Print the compiled HTML document
    Compile {
        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Print the live-preview styles as JSON
    Preview {
        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Show the 3x3 position guide with the current cell marked
    Grid {
        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Write the document to <name>.html
    Export {
        #[command(flatten)]
        template: TemplateArgs,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Choose the destination with the native save dialog
        #[cfg(feature = "dialog")]
        #[arg(long, conflicts_with = "out_dir")]
        dialog: bool,
    },

    /// Copy the document to the system clipboard
    Copy {
        #[command(flatten)]
        template: TemplateArgs,

        /// Clipboard program and arguments, e.g. `--clipboard-command xclip -selection clipboard`
        #[arg(long, num_args = 1.., allow_hyphen_values = true)]
        clipboard_command: Option<Vec<String>>,
    },
}

/// The template to operate on: defaults, optionally a JSON file, then edits.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Start from a template JSON file instead of the defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set a field by key, e.g. `--set headerText=Hello` (repeatable, applied in order)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub header_text: Option<String>,

    #[arg(long)]
    pub text_color: Option<String>,

    #[arg(long)]
    pub background_color: Option<String>,

    /// Header size in px; values outside 12..=72 are clamped
    #[arg(long, allow_negative_numbers = true)]
    pub font_size: Option<i64>,

    /// 300, 400, 500, 600, 700 or light, normal, medium, semibold, bold
    #[arg(long)]
    pub font_weight: Option<FontWeight>,

    #[arg(long)]
    pub font_family: Option<String>,

    /// Horizontal position: left, center or right
    #[arg(long)]
    pub x: Option<HorizontalPosition>,

    /// Vertical position: top, center or bottom
    #[arg(long)]
    pub y: Option<VerticalPosition>,
}

impl TemplateArgs {
    /// `--set` assignments first, then the dedicated flags.
    pub fn edits(&self) -> Result<Vec<Edit>, StudioError> {
        let mut edits = self
            .assignments
            .iter()
            .map(|a| input::parse_assignment(a))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(name) = &self.name {
            edits.push(Edit::Field(TemplateField::Name(input::name_input(name)?)));
        }
        if let Some(text) = &self.header_text {
            edits.push(Edit::Field(TemplateField::HeaderText(text.clone())));
        }
        if let Some(color) = &self.text_color {
            edits.push(Edit::Field(TemplateField::TextColor(input::color_input(
                "textColor",
                color,
            )?)));
        }
        if let Some(color) = &self.background_color {
            edits.push(Edit::Field(TemplateField::BackgroundColor(
                input::color_input("backgroundColor", color)?,
            )));
        }
        if let Some(px) = self.font_size {
            edits.push(Edit::Field(TemplateField::FontSize(input::font_size_input(px))));
        }
        if let Some(weight) = self.font_weight {
            edits.push(Edit::Field(TemplateField::FontWeight(weight)));
        }
        if let Some(family) = &self.font_family {
            edits.push(Edit::Field(TemplateField::FontFamily(family.trim().to_string())));
        }
        if let Some(x) = self.x {
            edits.push(Edit::Axis(AxisValue::X(x)));
        }
        if let Some(y) = self.y {
            edits.push(Edit::Axis(AxisValue::Y(y)));
        }

        Ok(edits)
    }
}
