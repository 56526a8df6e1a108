//! The club aggregate: admission control and table allocation.
//!
//! Every operation either succeeds and updates the registry, the tables and
//! the queue together, or fails with a [`ClubError`] and changes nothing.
//! The registry status of a client is the source of truth; table occupancy
//! and queue membership always agree with it.

use crate::error::ClubError;
use crate::queue::WaitingQueue;
use crate::registry::ClientRegistry;
use crate::table::Table;
use crate::types::{ClientId, ClientStatus, ClubConfig, ClubTime, TableReport};

/// Result of a successful [`Club::client_waits`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The client joined the tail of the queue
    Queued,
    /// The client was already waiting; its position is unchanged
    AlreadyQueued,
    /// The client already occupies a table and keeps it
    AlreadySeated(usize),
    /// The queue is full; the caller must send the client away
    MustLeave,
}

/// Where a client was when it left, see [`Club::client_leaves`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Inside, neither seated nor waiting
    WasUnseated,
    /// Waiting in the queue
    WasQueued,
    /// At this table, which is now free
    WasSeated(usize),
}

/// State of the club during one day
#[derive(Clone, Debug)]
pub struct Club {
    config: ClubConfig,
    registry: ClientRegistry,
    queue: WaitingQueue,
    tables: Vec<Table>,
    tables_in_use: usize,
}

impl Club {
    /// Creates an empty club with all tables free
    #[must_use]
    pub fn new(config: ClubConfig) -> Self {
        Self {
            config,
            registry: ClientRegistry::new(),
            queue: WaitingQueue::new(config.tables()),
            tables: vec![Table::new(); config.tables()],
            tables_in_use: 0,
        }
    }

    /// The club's configuration
    #[must_use]
    pub const fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// Status of a client, `None` if not inside
    #[must_use]
    pub fn status(&self, client: &ClientId) -> Option<ClientStatus> {
        self.registry.status(client)
    }

    /// Whether the client is inside
    #[must_use]
    pub fn is_present(&self, client: &ClientId) -> bool {
        self.registry.contains(client)
    }

    /// Everyone inside
    #[must_use]
    pub const fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// Clients waiting for a table
    #[must_use]
    pub const fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    /// Number of waiting clients
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// All tables, by index
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// A single table, `None` if the index is out of range
    #[must_use]
    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    /// Number of occupied tables
    #[must_use]
    pub const fn tables_in_use(&self) -> usize {
        self.tables_in_use
    }

    /// Whether at least one table is free
    #[must_use]
    pub fn has_free_table(&self) -> bool {
        self.tables_in_use < self.tables.len()
    }

    /// A client comes in
    ///
    /// # Errors
    ///
    /// - [`ClubError::AlreadyPresent`] if the client is already inside
    /// - [`ClubError::OutsideBusinessHours`] before opening or after closing
    pub fn client_arrives(&mut self, time: ClubTime, client: ClientId) -> Result<(), ClubError> {
        if self.registry.contains(&client) {
            return Err(ClubError::AlreadyPresent);
        }
        if time < self.config.opening() || time > self.config.closing() {
            return Err(ClubError::OutsideBusinessHours);
        }
        self.registry.set(client, ClientStatus::InsideUnseated);
        Ok(())
    }

    /// A client takes a table, moving from its current one if needed
    ///
    /// # Errors
    ///
    /// - [`ClubError::UnknownClient`] if the client is not inside
    /// - [`ClubError::TableOccupied`] if anyone, the client included, holds
    ///   the table
    ///
    /// # Panics
    ///
    /// Panics if `table` is not a valid table index.
    pub fn client_sits(
        &mut self,
        time: ClubTime,
        client: &ClientId,
        table: usize,
    ) -> Result<(), ClubError> {
        let status = self.registry.status(client).ok_or(ClubError::UnknownClient)?;
        if self.tables[table].is_occupied() {
            return Err(ClubError::TableOccupied);
        }

        match status {
            ClientStatus::SeatedAt(previous) => self.leave_table(time, previous),
            ClientStatus::Queued => {
                self.queue.remove(client);
            },
            ClientStatus::InsideUnseated => {},
        }
        self.take_table(time, client.clone(), table);
        Ok(())
    }

    /// A client asks to wait for a table
    ///
    /// # Errors
    ///
    /// - [`ClubError::UnknownClient`] if the client is not inside
    /// - [`ClubError::SeatAvailable`] if any table is free
    pub fn client_waits(&mut self, client: &ClientId) -> Result<WaitOutcome, ClubError> {
        let status = self.registry.status(client).ok_or(ClubError::UnknownClient)?;
        if self.has_free_table() {
            return Err(ClubError::SeatAvailable);
        }

        match status {
            ClientStatus::SeatedAt(table) => Ok(WaitOutcome::AlreadySeated(table)),
            ClientStatus::Queued => Ok(WaitOutcome::AlreadyQueued),
            ClientStatus::InsideUnseated => {
                if self.queue.push(client.clone()).is_err() {
                    return Ok(WaitOutcome::MustLeave);
                }
                self.registry.set(client.clone(), ClientStatus::Queued);
                Ok(WaitOutcome::Queued)
            },
        }
    }

    /// A client goes home
    ///
    /// A freed table is left empty; promoting the next waiting client is up
    /// to the caller.
    ///
    /// # Errors
    ///
    /// - [`ClubError::UnknownClient`] if the client is not inside
    pub fn client_leaves(
        &mut self,
        time: ClubTime,
        client: &ClientId,
    ) -> Result<LeaveOutcome, ClubError> {
        let status = self.registry.status(client).ok_or(ClubError::UnknownClient)?;

        let outcome = match status {
            ClientStatus::InsideUnseated => LeaveOutcome::WasUnseated,
            ClientStatus::Queued => {
                self.queue.remove(client);
                LeaveOutcome::WasQueued
            },
            ClientStatus::SeatedAt(table) => {
                self.leave_table(time, table);
                LeaveOutcome::WasSeated(table)
            },
        };
        self.registry.remove(client);
        Ok(outcome)
    }

    /// Takes the head of the queue, if anyone is waiting
    ///
    /// The client is not seated; follow up with [`Club::seat`].
    pub fn promote_from_queue(&mut self) -> Option<ClientId> {
        self.queue.pop()
    }

    /// Seats a present client at a free table
    ///
    /// Used to place a client returned by [`Club::promote_from_queue`].
    ///
    /// # Panics
    ///
    /// Panics if the client is not inside, is already seated, or the table
    /// is taken.
    pub fn seat(&mut self, time: ClubTime, client: ClientId, table: usize) {
        let status = self.registry.status(&client);
        assert!(
            matches!(status, Some(ClientStatus::Queued | ClientStatus::InsideUnseated)),
            "cannot seat {client} with status {status:?}"
        );
        self.queue.remove(&client);
        self.take_table(time, client, table);
    }

    /// Sends everyone home at the end of the day
    ///
    /// Occupied tables are vacated at `time`, the queue and the registry are
    /// emptied. The evicted clients are returned in no particular order.
    pub fn close_day(&mut self, time: ClubTime) -> Vec<ClientId> {
        let evicted: Vec<(ClientId, ClientStatus)> = self.registry.drain().collect();
        for (_, status) in &evicted {
            if let Some(table) = status.table() {
                self.leave_table(time, table);
            }
        }
        self.queue.clear();

        tracing::debug!(evicted = evicted.len(), %time, "Closed for the day");
        evicted.into_iter().map(|(client, _)| client).collect()
    }

    /// Reports revenue and occupied time per table, then zeroes the statistics
    #[must_use]
    pub fn finalize_tables(&mut self) -> Vec<TableReport> {
        let price = u64::from(self.config.price_per_hour());
        self.tables
            .iter_mut()
            .enumerate()
            .map(|(index, table)| {
                let stats = table.take_stats();
                TableReport {
                    table: index,
                    revenue: stats.billed_hours * price,
                    occupied: stats.occupied,
                }
            })
            .collect()
    }

    /// Checks that registry, tables and queue agree
    ///
    /// # Errors
    ///
    /// Describes the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut holders = vec![None; self.tables.len()];

        for (client, status) in self.registry.iter() {
            match status {
                ClientStatus::SeatedAt(table) => {
                    let Some(holder) = holders.get_mut(table) else {
                        return Err(format!("{client} seated at missing table {table}"));
                    };
                    if let Some(other) = holder.replace(client) {
                        return Err(format!("{client} and {other} share table {table}"));
                    }
                    if !self.tables[table].is_occupied() {
                        return Err(format!("{client} seated at free table {table}"));
                    }
                    if self.queue.contains(client) {
                        return Err(format!("{client} is seated and queued"));
                    }
                },
                ClientStatus::Queued => {
                    if !self.queue.contains(client) {
                        return Err(format!("{client} is queued but not in the queue"));
                    }
                },
                ClientStatus::InsideUnseated => {
                    if self.queue.contains(client) {
                        return Err(format!("{client} is unseated but in the queue"));
                    }
                },
            }
        }

        for (table, holder) in holders.iter().enumerate() {
            if holder.is_none() && self.tables[table].is_occupied() {
                return Err(format!("table {table} is occupied by nobody"));
            }
        }
        let seated = self.registry.seated_count();
        if self.tables_in_use != seated {
            return Err(format!(
                "{} tables in use but {seated} clients seated",
                self.tables_in_use
            ));
        }
        if self.queue.len() > self.tables.len() {
            return Err(format!("queue holds {} clients", self.queue.len()));
        }
        if let Some(stray) = self
            .queue
            .iter()
            .find(|client| self.registry.status(client) != Some(ClientStatus::Queued))
        {
            return Err(format!("{stray} is in the queue without queued status"));
        }
        if !self.queue.is_empty() && self.has_free_table() {
            return Err("clients wait while a table is free".to_string());
        }
        Ok(())
    }

    fn take_table(&mut self, time: ClubTime, client: ClientId, table: usize) {
        self.tables[table].occupy(time);
        self.tables_in_use += 1;
        self.registry.set(client, ClientStatus::SeatedAt(table));
    }

    fn leave_table(&mut self, time: ClubTime, table: usize) {
        self.tables[table].vacate(time);
        self.tables_in_use -= 1;
    }
}
