//! Runtime configuration of the simulator.
//!
//! Loads settings from environment variables with defaults; command-line
//! flags override them.

use crate::format::OutputFormat;
use std::env;

/// Default `tracing` filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level or `tracing` filter directive (`CLUB_LOG_LEVEL`)
    pub log_level: String,
    /// Output log format (`CLUB_OUTPUT_FORMAT`: text or json)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("CLUB_LOG_LEVEL")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            output_format: lookup("CLUB_OUTPUT_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Apply values given on the command line
    #[must_use]
    pub fn with_overrides(mut self, log_level: Option<String>, format: Option<OutputFormat>) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        if let Some(format) = format {
            self.output_format = format;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output_format: OutputFormat::default(),
        }
    }
}
