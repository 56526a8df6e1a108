//! Reader for the day's input file.
//!
//! ```text
//! 3
//! 09:00 19:00
//! 10
//! 08:48 1 client1
//! 09:54 2 client1 1
//! ```
//!
//! The header holds the table count, opening and closing time, and the
//! hourly price. Every following line is an event: time, code, client and,
//! for code 2, a 1-based table number. Fields are separated by single
//! spaces and event times never go backwards.

use crate::error::{ConfigError, ParseError};
use crate::events::IncomingEvent;
use crate::types::{ClientId, ClubConfig, ClubTime};

/// Everything needed to simulate one day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubInput {
    /// Club configuration from the header
    pub config: ClubConfig,
    /// Events in input order
    pub events: Vec<IncomingEvent>,
}

/// Parses a whole input file
///
/// # Errors
///
/// Stops at the first line that cannot be accepted and returns it as
/// [`ParseError::InvalidLine`]; a missing header line gives the matching
/// `Missing*` variant.
pub fn parse_input(input: &str) -> Result<ClubInput, ParseError> {
    let mut lines = input.lines().enumerate().map(|(index, line)| (index + 1, line));

    let tables_line = lines.next().ok_or(ParseError::MissingTableCount)?;
    let tables: usize = tables_line
        .1
        .parse()
        .map_err(|_| ParseError::invalid(tables_line.0, tables_line.1))?;

    let hours_line = lines.next().ok_or(ParseError::MissingOpeningHours)?;
    let (opening, closing) =
        parse_hours(hours_line.1).ok_or_else(|| ParseError::invalid(hours_line.0, hours_line.1))?;

    let price_line = lines.next().ok_or(ParseError::MissingPrice)?;
    let price: u32 = price_line
        .1
        .parse()
        .map_err(|_| ParseError::invalid(price_line.0, price_line.1))?;

    let config = ClubConfig::new(tables, opening, closing, price).map_err(|error| {
        let (number, line) = match error {
            ConfigError::NoTables => tables_line,
            ConfigError::FreeOfCharge => price_line,
            ConfigError::ClosesBeforeOpening { .. } => hours_line,
        };
        ParseError::invalid(number, line)
    })?;

    let mut events = Vec::new();
    let mut previous = ClubTime::midnight();
    for (number, line) in lines {
        let event =
            parse_event(line, tables, previous).ok_or_else(|| ParseError::invalid(number, line))?;
        previous = event.time();
        events.push(event);
    }

    tracing::debug!(tables, events = events.len(), "Input parsed");
    Ok(ClubInput { config, events })
}

fn parse_hours(line: &str) -> Option<(ClubTime, ClubTime)> {
    let (opening, closing) = line.split_once(' ')?;
    Some((ClubTime::parse(opening)?, ClubTime::parse(closing)?))
}

/// Parses one event line, `None` if anything about it is off
fn parse_event(line: &str, tables: usize, previous: ClubTime) -> Option<IncomingEvent> {
    let fields: Vec<&str> = line.split(' ').collect();
    let [time, code, client, rest @ ..] = fields.as_slice() else {
        return None;
    };

    let time = ClubTime::parse(time).filter(|time| *time >= previous)?;
    let code: u8 = code.parse().ok()?;
    let client = ClientId::parse(client).ok()?;

    match (code, rest) {
        (1, []) => Some(IncomingEvent::Arrived { time, client }),
        (2, [table]) => {
            let table: usize = table.parse().ok()?;
            if !(1..=tables).contains(&table) {
                return None;
            }
            Some(IncomingEvent::Sat {
                time,
                client,
                table: table - 1,
            })
        },
        (3, []) => Some(IncomingEvent::Waits { time, client }),
        (4, []) => Some(IncomingEvent::Left { time, client }),
        _ => None,
    }
}
