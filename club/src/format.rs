//! Rendering of the output log.
//!
//! The text format prints one line per event with 1-based table numbers:
//!
//! ```text
//! 09:00
//! 08:48 1 client1
//! 08:48 13 NotOpenYet
//! 19:00 11 client1
//! 19:00
//! 1 70 05:58
//! ```
//!
//! The JSON format prints one object per line for machine consumers.

use crate::events::{IncomingEvent, OutgoingEvent};
use crate::types::format_duration;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// How the output log is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other:?}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl fmt::Display for IncomingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time(), self.code(), self.client())?;
        if let Self::Sat { table, .. } = self {
            write!(f, " {}", table + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for OutgoingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened { time } | Self::Closed { time } => write!(f, "{time}"),
            Self::Echo { event } => write!(f, "{event}"),
            Self::ClientLeft { time, client } => write!(f, "{time} 11 {client}"),
            Self::ClientSeated {
                time,
                client,
                table,
            } => write!(f, "{time} 12 {client} {}", table + 1),
            Self::Error { time, error, .. } => write!(f, "{time} 13 {error}"),
            Self::TableReport { report } => write!(
                f,
                "{} {} {}",
                report.table + 1,
                report.revenue,
                format_duration(report.occupied)
            ),
        }
    }
}

/// Writes the whole log, one line per event
///
/// # Errors
///
/// Returns any error from the writer or from JSON serialization.
pub fn write_log<W: Write>(
    writer: &mut W,
    log: &[OutgoingEvent],
    format: OutputFormat,
) -> io::Result<()> {
    for event in log {
        match format {
            OutputFormat::Text => writeln!(writer, "{event}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, event)?;
                writeln!(writer)?;
            },
        }
    }
    writer.flush()
}
