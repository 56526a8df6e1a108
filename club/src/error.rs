//! Error types for the club.
//!
//! [`ClubError`] is the closed set of domain rejections. They are expected,
//! recoverable and leave the club untouched; the dispatcher turns each one
//! into an outgoing error event. Their `Display` output is the stable wire
//! message.

use crate::types::ClubTime;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Rejection of a single club operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubError {
    /// The client is already inside the club
    #[error("YouShallNotPass")]
    AlreadyPresent,

    /// Arrival before opening or after closing
    #[error("NotOpenYet")]
    OutsideBusinessHours,

    /// The client is not inside the club
    #[error("ClientUnknown")]
    UnknownClient,

    /// The requested table is taken
    #[error("PlaceIsBusy")]
    TableOccupied,

    /// Waiting was requested while a table is free
    #[error("ICanWaitNoLonger!")]
    SeatAvailable,
}

impl ClubError {
    /// Stable identifier of the error kind
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::AlreadyPresent => "AlreadyPresent",
            Self::OutsideBusinessHours => "OutsideBusinessHours",
            Self::UnknownClient => "UnknownClient",
            Self::TableOccupied => "TableOccupied",
            Self::SeatAvailable => "SeatAvailable",
        }
    }
}

impl Serialize for ClubError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A client name with a forbidden shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid client name: {0:?}")]
pub struct InvalidClientName(pub String);

/// Invalid club configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A club needs at least one table
    #[error("club must have at least one table")]
    NoTables,

    /// Hourly price must be positive
    #[error("price per hour must be positive")]
    FreeOfCharge,

    /// Closing time earlier than opening time
    #[error("closing time {closing} is before opening time {opening}")]
    ClosesBeforeOpening {
        /// Configured opening time
        opening: ClubTime,
        /// Configured closing time
        closing: ClubTime,
    },
}

/// Failure to read the day's input
///
/// `Display` is exactly what gets reported to the user: either a short
/// description of a missing header line, or the offending line verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The table count line is missing
    #[error("table amount not found")]
    MissingTableCount,

    /// The opening hours line is missing
    #[error("open hours not found")]
    MissingOpeningHours,

    /// The price line is missing
    #[error("price not found")]
    MissingPrice,

    /// A line that could not be accepted
    #[error("{line}")]
    InvalidLine {
        /// 1-based line number
        number: usize,
        /// The line as it appeared in the input
        line: String,
    },
}

impl ParseError {
    pub(crate) fn invalid(number: usize, line: &str) -> Self {
        Self::InvalidLine {
            number,
            line: line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_messages_are_stable() {
        assert_eq!(ClubError::AlreadyPresent.to_string(), "YouShallNotPass");
        assert_eq!(ClubError::OutsideBusinessHours.to_string(), "NotOpenYet");
        assert_eq!(ClubError::UnknownClient.to_string(), "ClientUnknown");
        assert_eq!(ClubError::TableOccupied.to_string(), "PlaceIsBusy");
        assert_eq!(ClubError::SeatAvailable.to_string(), "ICanWaitNoLonger!");
    }

    #[test]
    fn kinds_match_variant_names() {
        assert_eq!(ClubError::AlreadyPresent.kind(), "AlreadyPresent");
        assert_eq!(ClubError::SeatAvailable.kind(), "SeatAvailable");
    }

    #[test]
    fn parse_error_shows_offending_line() {
        let err = ParseError::invalid(5, "08:48 7 client1");
        assert_eq!(err.to_string(), "08:48 7 client1");
        assert_eq!(ParseError::MissingPrice.to_string(), "price not found");
    }
}
