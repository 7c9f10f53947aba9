//! In-memory `EventStore`.

use std::collections::HashSet;

use super::{EventStore, StoreError};
use crate::{Event, EventDetails, EventId};

/// `EventStore` backed by a vector.
///
/// Lookups are linear scans, which suits the small collections a single
/// city listing holds. New ids take the form `svirka-<n>` and never repeat
/// within one store.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl MemoryEventStore {
    /// Seed a store from an existing snapshot.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] when two events share an id.
    pub fn from_events<I>(snapshot: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Event>,
    {
        let events: Vec<Event> = snapshot.into_iter().collect();
        {
            let mut seen = HashSet::with_capacity(events.len());
            for event in &events {
                if !seen.insert(&event.id) {
                    return Err(StoreError::DuplicateId {
                        id: event.id.clone(),
                    });
                }
            }
        }
        Ok(Self { events, next_id: 0 })
    }

    /// Number of stored events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &EventId) -> Result<usize, StoreError> {
        self.events
            .iter()
            .position(|event| &event.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    fn fresh_id(&mut self) -> EventId {
        loop {
            self.next_id = self.next_id.saturating_add(1);
            let candidate = EventId::new(format!("svirka-{}", self.next_id));
            if !self.events.iter().any(|event| event.id == candidate) {
                return candidate;
            }
        }
    }
}

impl EventStore for MemoryEventStore {
    fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn get(&self, id: &EventId) -> Option<Event> {
        self.events.iter().find(|event| &event.id == id).cloned()
    }

    fn create(&mut self, details: EventDetails) -> Result<EventId, StoreError> {
        let id = self.fresh_id();
        self.events.push(Event::new(id.clone(), details));
        Ok(id)
    }

    fn update(&mut self, id: &EventId, details: EventDetails) -> Result<(), StoreError> {
        let index = self.position(id)?;
        if let Some(event) = self.events.get_mut(index) {
            event.details = details;
        }
        Ok(())
    }

    fn delete(&mut self, id: &EventId) -> Result<Event, StoreError> {
        let index = self.position(id)?;
        Ok(self.events.remove(index))
    }
}
