//! Command-line argument parsing.

use crate::format::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Computer club day simulator.
#[derive(Parser, Debug, Clone)]
#[command(name = "computer-club")]
#[command(about = "Replays a day of computer club events and prints the resulting log")]
#[command(version)]
pub struct Cli {
    /// Input file: header and event lines.
    pub input: PathBuf,

    /// Output format, overrides `CLUB_OUTPUT_FORMAT`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level or filter directive, overrides `CLUB_LOG_LEVEL`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
