//! Bounded FIFO of clients waiting for a table.

use crate::types::ClientId;
use std::collections::VecDeque;

/// Waiting queue with a fixed capacity
///
/// Clients join at the tail and are promoted from the head. A client who
/// gives up is removed wherever it stands, keeping the others in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitingQueue {
    clients: VecDeque<ClientId>,
    capacity: usize,
}

impl WaitingQueue {
    /// Creates an empty queue holding at most `capacity` clients
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            clients: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of waiting clients
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of waiting clients
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether nobody is waiting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Whether another client would exceed the capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.clients.len() >= self.capacity
    }

    /// Whether the client is waiting
    #[must_use]
    pub fn contains(&self, client: &ClientId) -> bool {
        self.clients.contains(client)
    }

    /// Appends a client at the tail
    ///
    /// # Errors
    ///
    /// Hands the client back if the queue is full.
    pub fn push(&mut self, client: ClientId) -> Result<(), ClientId> {
        if self.is_full() {
            return Err(client);
        }
        self.clients.push_back(client);
        Ok(())
    }

    /// Removes and returns the head
    pub fn pop(&mut self) -> Option<ClientId> {
        self.clients.pop_front()
    }

    /// Removes a client by identity, returning whether it was waiting
    pub fn remove(&mut self, client: &ClientId) -> bool {
        let Some(position) = self.clients.iter().position(|waiting| waiting == client) else {
            return false;
        };
        self.clients.remove(position);
        true
    }

    /// Removes everyone
    pub fn clear(&mut self) {
        self.clients.clear();
    }

    /// Waiting clients from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.clients.iter()
    }
}
