//! Incoming and outgoing events of a club day.

use crate::error::ClubError;
use crate::types::{ClientId, ClubTime, TableReport};
use serde::Serialize;

/// One line of the external event log
///
/// Table indices are 0-based here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncomingEvent {
    /// A client came in
    Arrived {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
    },
    /// A client took a table
    Sat {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
        /// Requested table
        table: usize,
    },
    /// A client asked to wait for a table
    Waits {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
    },
    /// A client went home
    Left {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
    },
}

impl IncomingEvent {
    /// Time the event happened
    #[must_use]
    pub const fn time(&self) -> ClubTime {
        match self {
            Self::Arrived { time, .. }
            | Self::Sat { time, .. }
            | Self::Waits { time, .. }
            | Self::Left { time, .. } => *time,
        }
    }

    /// Client the event is about
    #[must_use]
    pub const fn client(&self) -> &ClientId {
        match self {
            Self::Arrived { client, .. }
            | Self::Sat { client, .. }
            | Self::Waits { client, .. }
            | Self::Left { client, .. } => client,
        }
    }

    /// Numeric event code of the log format
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Arrived { .. } => 1,
            Self::Sat { .. } => 2,
            Self::Waits { .. } => 3,
            Self::Left { .. } => 4,
        }
    }
}

/// One line of the output log
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutgoingEvent {
    /// The club opened
    Opened {
        /// Opening time
        time: ClubTime,
    },
    /// An incoming event, repeated as received
    Echo {
        /// The incoming event
        event: IncomingEvent,
    },
    /// The club sent a client away
    ClientLeft {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
    },
    /// The club seated a client from the queue
    ClientSeated {
        /// Event time
        time: ClubTime,
        /// Who
        client: ClientId,
        /// Assigned table, 0-based
        table: usize,
    },
    /// An incoming event was rejected
    Error {
        /// Time of the rejected event
        time: ClubTime,
        /// Client of the rejected event
        #[serde(skip_serializing_if = "Option::is_none")]
        client: Option<ClientId>,
        /// Reason, rendered as its wire message
        error: ClubError,
    },
    /// The club closed
    Closed {
        /// Closing time
        time: ClubTime,
    },
    /// Day statistics of one table
    TableReport {
        /// The statistics
        report: TableReport,
    },
}

impl OutgoingEvent {
    /// Outgoing code of the log format, `None` for markers, echoes and reports
    #[must_use]
    pub const fn code(&self) -> Option<u8> {
        match self {
            Self::ClientLeft { .. } => Some(11),
            Self::ClientSeated { .. } => Some(12),
            Self::Error { .. } => Some(13),
            Self::Opened { .. } | Self::Echo { .. } | Self::Closed { .. } | Self::TableReport { .. } => None,
        }
    }
}
