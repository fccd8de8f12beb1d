use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::{Commands, DraftArgs, ShowArgs};

/// Top-level CLI parser for the `kosei` binary.
#[derive(Debug, Parser)]
#[command(name = "kosei", version, about = "kosei - article draft review client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress bar: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,

    /// Review endpoint (overrides configuration)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
            endpoint: self.endpoint.clone(),
        }
    }
}
