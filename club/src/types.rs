//! Domain types for the computer club.
//!
//! - Client identities and symbolic clock times
//! - Per-client status as tracked by the registry
//! - Club configuration and end-of-day table reports

use crate::error::{ConfigError, InvalidClientName};
use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque client identity
///
/// Equal tokens denote the same client. Ordering is lexicographic, which is
/// the order evicted clients are reported in at closing time.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a `ClientId` without checking its shape
    ///
    /// Input coming from outside should go through [`ClientId::parse`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parses a client name: non-empty, only `a-z`, `0-9`, `_` and `-`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidClientName`] if the name is empty or contains any
    /// other character.
    pub fn parse(raw: &str) -> Result<Self, InvalidClientName> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidClientName(raw.to_string()))
        }
    }

    /// Returns the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minute-resolution time of day with no date attached
///
/// Only used for ordering events and measuring durations between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClubTime(NaiveTime);

impl ClubTime {
    /// `00:00`
    #[must_use]
    pub fn midnight() -> Self {
        Self(NaiveTime::default())
    }

    /// Creates a time from hours and minutes, `None` if out of range
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses strict `HH:MM` (two digits each, 24-hour clock)
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (hours, minutes) = raw.split_once(':')?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return None;
        }
        Self::from_hm(hours.parse().ok()?, minutes.parse().ok()?)
    }

    /// Time elapsed since `earlier`, never negative
    #[must_use]
    pub fn since(self, earlier: Self) -> TimeDelta {
        self.0.signed_duration_since(earlier.0).max(TimeDelta::zero())
    }

    /// Minutes since midnight
    #[must_use]
    pub fn minutes_from_midnight(self) -> u32 {
        self.0.num_seconds_from_midnight() / 60
    }
}

impl fmt::Display for ClubTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for ClubTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Formats a duration as `HH:MM`, as if it were a time since midnight
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Serde helper writing a duration in [`format_duration`] form
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize_duration<S: Serializer>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}

/// Hours billed for one occupancy session: the duration rounded up to whole hours
///
/// One minute bills an hour, exactly sixty minutes bill one hour.
#[must_use]
pub fn billed_hours(session: TimeDelta) -> u64 {
    let seconds = u64::try_from(session.num_seconds()).unwrap_or(0);
    seconds.div_ceil(3600)
}

/// Where a client currently is
///
/// Clients that are not in the club have no status at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "table", rename_all = "snake_case")]
pub enum ClientStatus {
    /// Inside, not at a table and not waiting
    InsideUnseated,
    /// Inside, waiting in the queue
    Queued,
    /// Inside, occupying the table with this 0-based index
    SeatedAt(usize),
}

impl ClientStatus {
    /// Returns the occupied table, if any
    #[must_use]
    pub const fn table(self) -> Option<usize> {
        match self {
            Self::SeatedAt(table) => Some(table),
            Self::InsideUnseated | Self::Queued => None,
        }
    }
}

/// Fixed configuration of a club for one day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClubConfig {
    tables: usize,
    opening: ClubTime,
    closing: ClubTime,
    price_per_hour: u32,
}

impl ClubConfig {
    /// Creates a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are no tables, the price is zero, or
    /// closing comes before opening.
    pub fn new(
        tables: usize,
        opening: ClubTime,
        closing: ClubTime,
        price_per_hour: u32,
    ) -> Result<Self, ConfigError> {
        if tables == 0 {
            return Err(ConfigError::NoTables);
        }
        if price_per_hour == 0 {
            return Err(ConfigError::FreeOfCharge);
        }
        if closing < opening {
            return Err(ConfigError::ClosesBeforeOpening { opening, closing });
        }
        Ok(Self {
            tables,
            opening,
            closing,
            price_per_hour,
        })
    }

    /// Number of tables, also the queue capacity
    #[must_use]
    pub const fn tables(&self) -> usize {
        self.tables
    }

    /// Opening time
    #[must_use]
    pub const fn opening(&self) -> ClubTime {
        self.opening
    }

    /// Closing time
    #[must_use]
    pub const fn closing(&self) -> ClubTime {
        self.closing
    }

    /// Price of one billed hour
    #[must_use]
    pub const fn price_per_hour(&self) -> u32 {
        self.price_per_hour
    }
}

/// Statistics of one table for the day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// 0-based table index
    pub table: usize,
    /// Billed hours times the hourly price
    pub revenue: u64,
    /// Total time the table was occupied
    #[serde(serialize_with = "serialize_duration")]
    pub occupied: TimeDelta,
}
