//! Facade crate for the Svirke live-music event finder.
//!
//! This crate re-exports the core domain types: proximity ranking, event
//! storage, search and favourites filters, and the role-gated write path.
//! JSON snapshot support sits behind the `serde` feature.

#![forbid(unsafe_code)]

pub use svirke_core::{
    AccessError, AdminStore, Coordinate, CoordinateError, Distance, Event, EventDetails,
    EventDraft, EventDraftError, EventId, EventQuery, EventStore, FavouriteState, Favourites,
    Identity, LocationError, LocationProvider, MemoryEventStore, RankedEvent, Ranking, Role,
    StoreError, agenda, directions_url, distance_between, format_distance, rank, rank_by,
    toggle_favourite,
};

#[cfg(feature = "serde")]
pub use svirke_core::{SnapshotError, read_snapshot, write_snapshot};
