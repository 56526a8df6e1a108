//! A single physical table and its usage statistics.

use crate::types::{billed_hours, ClubTime};
use chrono::TimeDelta;

/// Accumulated statistics of a table, see [`Table::take_stats`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStats {
    /// Sum of all session durations
    pub occupied: TimeDelta,
    /// Sum of per-session billed hours
    pub billed_hours: u64,
}

/// One table in the club
///
/// Occupancy is tracked by the time the current session started. Each
/// session adds its duration and its rounded-up hours when it ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    occupied_since: Option<ClubTime>,
    occupied: TimeDelta,
    billed_hours: u64,
}

impl Table {
    /// Creates a free table with empty statistics
    #[must_use]
    pub fn new() -> Self {
        Self {
            occupied_since: None,
            occupied: TimeDelta::zero(),
            billed_hours: 0,
        }
    }

    /// Whether a session is in progress
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupied_since.is_some()
    }

    /// Start of the current session, if any
    #[must_use]
    pub const fn occupied_since(&self) -> Option<ClubTime> {
        self.occupied_since
    }

    /// Starts a session
    ///
    /// # Panics
    ///
    /// Panics if the table is already occupied. Callers check occupancy
    /// first, so this only fires on a broken invariant.
    pub fn occupy(&mut self, time: ClubTime) {
        assert!(
            self.occupied_since.is_none(),
            "table is already occupied since {:?}",
            self.occupied_since
        );
        self.occupied_since = Some(time);
    }

    /// Ends the current session and accrues its statistics
    ///
    /// Returns the session duration.
    ///
    /// # Panics
    ///
    /// Panics if the table is not occupied.
    pub fn vacate(&mut self, time: ClubTime) -> TimeDelta {
        let since = self.occupied_since.take();
        assert!(since.is_some(), "table is not occupied");
        let session = since.map_or_else(TimeDelta::zero, |since| time.since(since));
        self.occupied += session;
        self.billed_hours += billed_hours(session);
        session
    }

    /// Total occupied time so far
    #[must_use]
    pub const fn occupied(&self) -> TimeDelta {
        self.occupied
    }

    /// Total billed hours so far
    #[must_use]
    pub const fn billed_hours(&self) -> u64 {
        self.billed_hours
    }

    /// Returns the accumulated statistics and zeroes them
    ///
    /// A session in progress is left running.
    pub fn take_stats(&mut self) -> TableStats {
        let stats = TableStats {
            occupied: self.occupied,
            billed_hours: self.billed_hours,
        };
        self.occupied = TimeDelta::zero();
        self.billed_hours = 0;
        stats
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
