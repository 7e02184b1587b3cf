//! Command-line argument definitions for the Liuyao CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`].

use clap::Parser;

/// Command-line arguments for the Liuyao chart reader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the casting-sheet text file
    #[arg(help = "Path to the input file, or `-` for stdin")]
    pub input: String,

    /// Path to the output JSON file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the record JSON when the chart is invalid
    #[arg(long)]
    pub debug: bool,
}
