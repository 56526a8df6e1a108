//! Who is inside the club, and where.

use crate::types::{ClientId, ClientStatus};
use std::collections::HashMap;

/// Mapping from client identity to current status
///
/// Absence means the client is not in the club.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientRegistry {
    clients: HashMap<ClientId, ClientStatus>,
}

impl ClientRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a client, `None` if not inside
    #[must_use]
    pub fn status(&self, client: &ClientId) -> Option<ClientStatus> {
        self.clients.get(client).copied()
    }

    /// Whether the client is inside
    #[must_use]
    pub fn contains(&self, client: &ClientId) -> bool {
        self.clients.contains_key(client)
    }

    /// Sets the status of a client, returning the previous one
    pub fn set(&mut self, client: ClientId, status: ClientStatus) -> Option<ClientStatus> {
        self.clients.insert(client, status)
    }

    /// Removes a client, returning its last status
    pub fn remove(&mut self, client: &ClientId) -> Option<ClientStatus> {
        self.clients.remove(client)
    }

    /// Removes every client, yielding each with its last status
    pub fn drain(&mut self) -> impl Iterator<Item = (ClientId, ClientStatus)> + '_ {
        self.clients.drain()
    }

    /// Iterates over present clients in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&ClientId, ClientStatus)> {
        self.clients.iter().map(|(client, status)| (client, *status))
    }

    /// Number of clients inside
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether nobody is inside
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Number of clients with a `SeatedAt` status
    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.clients
            .values()
            .filter(|status| matches!(status, ClientStatus::SeatedAt(_)))
            .count()
    }
}
