// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ioclaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ioclaunch",
    version,
    about = "Start the NIKONKS-SYNC worker under procServ, or directly if procServ is not installed.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a launcher config file (TOML).
    ///
    /// If omitted, `ioclaunch.toml` in the current directory is used when it
    /// exists; otherwise the built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `IOCLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Decide which program would be started and print it, without starting it.
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
