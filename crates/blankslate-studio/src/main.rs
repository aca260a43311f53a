use clap::Parser;
use eyre::Result;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Defaults => commands::defaults(),
        Commands::Compile { template } => commands::compile(&template),
        Commands::Preview { template } => commands::preview(&template),
        Commands::Grid { template } => commands::grid(&template),
        #[cfg(not(feature = "dialog"))]
        Commands::Export { template, out_dir } => commands::export(&template, &out_dir),
        #[cfg(feature = "dialog")]
        Commands::Export {
            template,
            out_dir,
            dialog,
        } => {
            if dialog {
                commands::export_with_dialog(&template, &out_dir)
            } else {
                commands::export(&template, &out_dir)
            }
        }
        Commands::Copy {
            template,
            clipboard_command,
        } => commands::copy(&template, clipboard_command),
    }
}
