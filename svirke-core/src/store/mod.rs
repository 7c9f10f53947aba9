//! Event persistence contract and its in-memory implementation.
//!
//! The `EventStore` trait mirrors a hosted document collection: a full read
//! snapshot plus create, update and delete keyed by [`EventId`]. Ranking only
//! ever consumes the snapshot.

use std::cmp::Ordering;

use thiserror::Error;

use crate::{Event, EventDetails, EventId};

mod memory;
#[cfg(feature = "serde")]
mod snapshot;

pub use memory::MemoryEventStore;
#[cfg(feature = "serde")]
pub use snapshot::{SnapshotError, read_snapshot, write_snapshot};

/// Errors returned by [`EventStore`] writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No event has the requested id.
    #[error("event {id} does not exist")]
    NotFound {
        /// Requested id.
        id: EventId,
    },
    /// Seeding found two events with the same id.
    #[error("event id {id} appears more than once")]
    DuplicateId {
        /// Repeated id.
        id: EventId,
    },
}

/// Keyed storage for events.
///
/// # Examples
///
/// ```rust
/// use svirke_core::{Coordinate, EventDetails, EventStore, MemoryEventStore};
///
/// let mut store = MemoryEventStore::default();
/// let id = store.create(EventDetails {
///     performer: "Bajaga".into(),
///     venue: "Dom omladine".into(),
///     city: "Beograd".into(),
///     genre: "rock".into(),
///     time: "21:00".into(),
///     date: None,
///     location: Coordinate::new(44.815, 20.465),
/// })?;
/// assert_eq!(store.get(&id).map(|e| e.details.performer), Some("Bajaga".into()));
/// # Ok::<(), svirke_core::StoreError>(())
/// ```
pub trait EventStore {
    /// Every event, in insertion order.
    fn list(&self) -> Vec<Event>;

    /// The event with `id`, if any.
    fn get(&self, id: &EventId) -> Option<Event>;

    /// Store a new event and return its assigned id.
    ///
    /// # Errors
    /// Implementations may reject the write with [`StoreError`].
    fn create(&mut self, details: EventDetails) -> Result<EventId, StoreError>;

    /// Replace the details of an existing event.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when `id` is unknown.
    fn update(&mut self, id: &EventId, details: EventDetails) -> Result<(), StoreError>;

    /// Remove an event and return it.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when `id` is unknown.
    fn delete(&mut self, id: &EventId) -> Result<Event, StoreError>;
}

/// Order events chronologically for the admin listing.
///
/// Dates compare as strings, which sorts ISO `YYYY-MM-DD` values correctly.
/// Undated events go last. The sort is stable.
#[must_use]
pub fn agenda(events: &[Event]) -> Vec<&Event> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| compare_dates(a.details.date.as_deref(), b.details.date.as_deref()));
    ordered
}

fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
