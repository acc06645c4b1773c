use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sls` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sls",
    version,
    about = "SLS session tracker - projects, sessions, feedback and impact"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Color output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read environment from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            env_file: self.env_file.clone(),
        }
    }
}
