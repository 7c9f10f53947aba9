//! Search and favourites filtering over an event collection.
//!
//! Filtering is independent of ranking. Compose them as filter then rank:
//!
//! ```
//! use svirke_core::{Coordinate, EventQuery, Favourites, rank_by};
//!
//! let events: Vec<svirke_core::Event> = Vec::new();
//! let query = EventQuery::search("jazz");
//! let favourites = Favourites::default();
//! let ranking = rank_by(
//!     Some(Coordinate::new(44.8, 20.4)),
//!     query.apply(&events, &favourites),
//! );
//! assert!(ranking.is_empty());
//! ```

use crate::{Event, Favourites};

/// Criteria selecting which events to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Case-insensitive term matched against performer, genre, and venue.
    pub search: String,
    /// Keep only the caller's favourites.
    pub favourites_only: bool,
}

impl EventQuery {
    /// A query matching `term` with no favourites restriction.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            favourites_only: false,
        }
    }

    /// Restrict the query to favourites.
    #[must_use]
    pub const fn favourites_only(mut self, enabled: bool) -> Self {
        self.favourites_only = enabled;
        self
    }

    /// Whether `event` satisfies both criteria.
    #[must_use]
    pub fn matches(&self, event: &Event, favourites: &Favourites) -> bool {
        self.matches_search(event) && (!self.favourites_only || favourites.contains(&event.id))
    }

    fn matches_search(&self, event: &Event) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let details = &event.details;
        [&details.performer, &details.genre, &details.venue]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching events in input order.
    pub fn apply<'a>(
        &'a self,
        events: &'a [Event],
        favourites: &'a Favourites,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        events
            .iter()
            .filter(move |event| self.matches(event, favourites))
    }
}
