//! Core domain types for the Svirke event finder.
//!
//! The heart of the crate is proximity ranking: [`rank`] orders live-music
//! events by great-circle distance from the user, [`distance_between`]
//! computes that distance, and [`format_distance`] renders it. The other
//! modules are small collaborators around it: validated event input,
//! keyed storage, role-gated writes, search and favourites filters, and the
//! location provider contract.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod access;
pub mod coordinate;
pub mod directions;
pub mod distance;
pub mod event;
pub mod favourites;
pub mod location;
pub mod query;
pub mod ranking;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use access::{AccessError, AdminStore, Identity, Role};
pub use coordinate::{Axis, Coordinate, CoordinateError};
pub use directions::directions_url;
pub use distance::{Distance, EARTH_RADIUS_KM, distance_between, format_distance};
pub use event::{DraftField, Event, EventDetails, EventDraft, EventDraftError, EventId};
pub use favourites::{FavouriteState, Favourites, toggle_favourite};
pub use location::{FixedLocation, LocationError, LocationProvider, NoLocation, reference_or_log};
pub use query::EventQuery;
pub use ranking::{RankedEvent, Ranking, rank, rank_by};
pub use store::{EventStore, MemoryEventStore, StoreError, agenda};
#[cfg(feature = "serde")]
pub use store::{SnapshotError, read_snapshot, write_snapshot};
