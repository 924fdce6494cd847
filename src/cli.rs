// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `umaskd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "umaskd",
    about = "Maintain separate per-directory umasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Run as a daemon.
    #[arg(short = 'd', long)]
    pub daemon: bool,

    /// Load configuration from a specific file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        default_value = "/etc/umaskd.toml"
    )]
    pub file: String,

    /// Print informational messages (each applied mode).
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print version information.
    ///
    /// The short flag is `-v` so that `-V` stays free for `--verbose`.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `UMASKD_LOG`, then `--verbose`, then a quiet default
    /// decide the level.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the watch table, but don't start watching.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
