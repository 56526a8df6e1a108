//! Dispatcher reducer: turns incoming events into club operations and
//! outgoing events.
//!
//! Each incoming event is echoed first, followed by its consequences. A
//! table freed by a leaving client feeds a [`ClubAction::Promote`] back into
//! the store, so the promoted client's seating lands right after the
//! departure in the output log.

use crate::club::{Club, LeaveOutcome, WaitOutcome};
use crate::error::ClubError;
use crate::events::{IncomingEvent, OutgoingEvent};
use crate::types::{ClientId, ClubConfig, ClubTime};
use club_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use club_runtime::{Store, StoreError};

/// Actions processed by the [`Dispatcher`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClubAction {
    /// Start of the day
    Open,
    /// An event from the input log
    Incoming(IncomingEvent),
    /// Give a freed table to the head of the queue
    Promote {
        /// Time the table was freed
        time: ClubTime,
        /// The freed table
        table: usize,
    },
    /// End of the day
    Close,
}

/// Effect produced by the [`Dispatcher`]
pub type ClubEffect = Effect<ClubAction, OutgoingEvent>;

/// Reducer driving a [`Club`] through one day
#[derive(Clone, Copy, Debug, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Creates a new `Dispatcher`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn rejected(time: ClubTime, client: &ClientId, error: ClubError) -> ClubEffect {
        tracing::debug!(%time, %client, kind = error.kind(), "Event rejected");
        Effect::Emit(OutgoingEvent::Error {
            time,
            client: Some(client.clone()),
            error,
        })
    }

    fn on_incoming(club: &mut Club, event: &IncomingEvent) -> ClubEffect {
        let time = event.time();
        let client = event.client();

        let result = match *event {
            IncomingEvent::Arrived { .. } => club
                .client_arrives(time, client.clone())
                .map(|()| Effect::None),
            IncomingEvent::Sat { table, .. } => {
                club.client_sits(time, client, table).map(|()| Effect::None)
            },
            IncomingEvent::Waits { .. } => club.client_waits(client).and_then(|outcome| {
                if outcome != WaitOutcome::MustLeave {
                    return Ok(Effect::None);
                }
                tracing::debug!(%time, %client, "Queue is full, sending client away");
                club.client_leaves(time, client).map(|_| {
                    Effect::Emit(OutgoingEvent::ClientLeft {
                        time,
                        client: client.clone(),
                    })
                })
            }),
            IncomingEvent::Left { .. } => club.client_leaves(time, client).map(|outcome| {
                match outcome {
                    LeaveOutcome::WasSeated(table) => Effect::Send(ClubAction::Promote { time, table }),
                    LeaveOutcome::WasQueued | LeaveOutcome::WasUnseated => Effect::None,
                }
            }),
        };

        result.unwrap_or_else(|error| Self::rejected(time, client, error))
    }

    fn on_promote(club: &mut Club, time: ClubTime, table: usize) -> ClubEffect {
        if club.table(table).is_none_or(crate::table::Table::is_occupied) {
            tracing::debug!(table, "Table is not free, nothing to promote");
            return Effect::None;
        }
        let Some(client) = club.promote_from_queue() else {
            return Effect::None;
        };

        tracing::debug!(%time, %client, table, "Seating client from the queue");
        club.seat(time, client.clone(), table);
        Effect::Emit(OutgoingEvent::ClientSeated { time, client, table })
    }

    fn on_close(club: &mut Club) -> SmallVec<[ClubEffect; 4]> {
        let closing = club.config().closing();

        let mut evicted = club.close_day(closing);
        evicted.sort();
        let departures = evicted
            .into_iter()
            .map(|client| Effect::Emit(OutgoingEvent::ClientLeft { time: closing, client }))
            .collect();

        let reports = club
            .finalize_tables()
            .into_iter()
            .map(|report| Effect::Emit(OutgoingEvent::TableReport { report }))
            .collect();

        smallvec![
            Effect::chain(departures),
            Effect::Emit(OutgoingEvent::Closed { time: closing }),
            Effect::chain(reports),
        ]
    }
}

impl Reducer for Dispatcher {
    type State = Club;
    type Action = ClubAction;
    type Output = OutgoingEvent;

    fn reduce(&self, club: &mut Club, action: ClubAction) -> SmallVec<[ClubEffect; 4]> {
        match action {
            ClubAction::Open => {
                smallvec![Effect::Emit(OutgoingEvent::Opened {
                    time: club.config().opening(),
                })]
            },
            ClubAction::Incoming(event) => {
                tracing::debug!(code = event.code(), client = %event.client(), "Processing event");
                let consequence = Self::on_incoming(club, &event);
                smallvec![Effect::Emit(OutgoingEvent::Echo { event }), consequence]
            },
            ClubAction::Promote { time, table } => smallvec![Self::on_promote(club, time, table)],
            ClubAction::Close => Self::on_close(club),
        }
    }
}

/// Simulates a whole day and returns the output log
///
/// The log starts with the opening marker, continues with every incoming
/// event followed by its consequences, and ends with the closing evictions,
/// the closing marker and one report per table.
///
/// # Errors
///
/// Returns [`StoreError`] if the store gives up on a runaway feedback loop.
#[tracing::instrument(skip_all, fields(tables = config.tables()))]
pub fn run_day<I>(config: ClubConfig, events: I) -> Result<Vec<OutgoingEvent>, StoreError>
where
    I: IntoIterator<Item = IncomingEvent>,
{
    let mut store = Store::new(Club::new(config), Dispatcher::new());
    let mut log = Vec::new();

    store.send_into(ClubAction::Open, &mut log)?;
    let mut processed = 0_usize;
    for event in events {
        store.send_into(ClubAction::Incoming(event), &mut log)?;
        debug_assert_eq!(store.state(Club::check_invariants), Ok(()));
        processed += 1;
    }
    store.send_into(ClubAction::Close, &mut log)?;

    tracing::info!(events = processed, outputs = log.len(), "Club day simulated");
    Ok(log)
}
