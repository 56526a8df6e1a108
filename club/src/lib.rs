//! Computer club day simulation.
//!
//! Clients arrive, take one of a fixed number of tables, wait in a bounded
//! queue when every table is taken, and leave. A chronologically ordered
//! event log drives the club through one day and produces an output log
//! with every decision, the end-of-day evictions and per-table revenue.
//!
//! # Architecture
//!
//! ```text
//! input file ──► parse_input ──► IncomingEvent ──┐
//!                                                ▼
//!                                  ┌──────────────────────────┐
//!                                  │  Store<Dispatcher>       │
//!                                  │    Dispatcher (reducer)  │
//!                                  │    Club (state)          │
//!                                  │     ├─ ClientRegistry    │
//!                                  │     ├─ WaitingQueue      │
//!                                  │     └─ Table × N         │
//!                                  └────────────┬─────────────┘
//!                                               ▼
//!                               OutgoingEvent ──► write_log ──► stdout
//! ```
//!
//! # Quick Start
//!
//! ```
//! use computer_club::{parse_input, run_day, write_log, OutputFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = parse_input("1\n09:00 19:00\n10\n09:00 1 alice\n09:00 2 alice 1\n")?;
//! let log = run_day(input.config, input.events)?;
//!
//! let mut out = Vec::new();
//! write_log(&mut out, &log, OutputFormat::Text)?;
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "09:00\n09:00 1 alice\n09:00 2 alice 1\n19:00 11 alice\n19:00\n1 100 10:00\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod club;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod format;
pub mod parse;
pub mod queue;
pub mod registry;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use club::{Club, LeaveOutcome, WaitOutcome};
pub use config::Config;
pub use dispatcher::{run_day, ClubAction, ClubEffect, Dispatcher};
pub use error::{ClubError, ConfigError, InvalidClientName, ParseError};
pub use events::{IncomingEvent, OutgoingEvent};
pub use format::{write_log, OutputFormat};
pub use parse::{parse_input, ClubInput};
pub use queue::WaitingQueue;
pub use registry::ClientRegistry;
pub use table::{Table, TableStats};
pub use types::{format_duration, ClientId, ClientStatus, ClubConfig, ClubTime, TableReport};
