//! Event store collaborator: the one external surface the editor touches.
//!
//! The planner reads an event's configured seat count once at session
//! init and writes `total_seats` back on save — no other event fields are
//! touched. [`MemoryEventStore`] is a small JSON-friendly backend for
//! tests and embedded hosts.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for an event record.
pub type EventId = i64;

/// Event store failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event {0} not found")]
    EventNotFound(EventId),
}

/// The slice of an event record the seat planner touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: EventId,
    pub title: String,
    /// Seat count written by the planner; absent until first configured.
    #[serde(default)]
    pub total_seats: Option<i64>,
}

/// Read/write surface the planner needs from the hosting application's
/// event storage.
pub trait EventStore {
    /// Look up an event by id.
    fn event(&self, id: EventId) -> Option<&EventRecord>;

    /// Write the seat total for an event.
    ///
    /// # Errors
    ///
    /// [`StoreError::EventNotFound`] if no such event exists.
    fn update_total_seats(&mut self, id: EventId, total_seats: i64) -> Result<(), StoreError>;
}

/// In-memory event store with auto-incrementing ids.
#[derive(Debug)]
pub struct MemoryEventStore {
    events: HashMap<EventId, EventRecord>,
    next_id: EventId,
}

impl MemoryEventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { events: HashMap::new(), next_id: 1 }
    }

    /// Insert a new event with no seat count yet, returning its id.
    pub fn add_event(&mut self, title: impl Into<String>) -> EventId {
        let id = self.next_id;
        self.next_id += 1;
        self.events.insert(
            id,
            EventRecord { event_id: id, title: title.into(), total_seats: None },
        );
        id
    }

    /// Remove an event; returns whether it existed.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        self.events.remove(&id).is_some()
    }

    /// Number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for MemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore for MemoryEventStore {
    fn event(&self, id: EventId) -> Option<&EventRecord> {
        self.events.get(&id)
    }

    fn update_total_seats(&mut self, id: EventId, total_seats: i64) -> Result<(), StoreError> {
        let record = self.events.get_mut(&id).ok_or(StoreError::EventNotFound(id))?;
        record.total_seats = Some(total_seats);
        Ok(())
    }
}
