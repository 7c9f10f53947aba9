//! Per-user favourite events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AccessError, EventId, Identity};

/// Outcome of [`Favourites::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteState {
    /// The event is now a favourite.
    Added,
    /// The event is no longer a favourite.
    Removed,
}

/// A user's favourite event ids, in the order they were added.
///
/// Ids are unique. The set serialises as a plain JSON array.
///
/// # Examples
/// ```
/// use svirke_core::{EventId, FavouriteState, Favourites};
///
/// let mut favourites = Favourites::default();
/// let id = EventId::new("svirka-1");
/// assert_eq!(favourites.toggle(id.clone()), FavouriteState::Added);
/// assert!(favourites.contains(&id));
/// assert_eq!(favourites.toggle(id.clone()), FavouriteState::Removed);
/// assert!(favourites.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<EventId>", into = "Vec<EventId>"))]
pub struct Favourites {
    ids: Vec<EventId>,
}

impl Favourites {
    /// Whether `id` is a favourite.
    #[must_use]
    pub fn contains(&self, id: &EventId) -> bool {
        self.ids.contains(id)
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: EventId) -> FavouriteState {
        if let Some(position) = self.ids.iter().position(|existing| existing == &id) {
            self.ids.remove(position);
            FavouriteState::Removed
        } else {
            self.ids.push(id);
            FavouriteState::Added
        }
    }

    /// Iterate ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EventId> {
        self.ids.iter()
    }

    /// Number of favourites.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favourites.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<EventId> for Favourites {
    fn from_iter<I: IntoIterator<Item = EventId>>(iter: I) -> Self {
        let mut ids = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

impl From<Vec<EventId>> for Favourites {
    fn from(ids: Vec<EventId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Favourites> for Vec<EventId> {
    fn from(favourites: Favourites) -> Self {
        favourites.ids
    }
}

/// Toggle a favourite on behalf of the signed-in user.
///
/// # Errors
/// Returns [`AccessError::SignInRequired`] when `identity` is `None`.
pub fn toggle_favourite(
    identity: Option<&Identity>,
    favourites: &mut Favourites,
    id: EventId,
) -> Result<FavouriteState, AccessError> {
    let Some(user) = identity else {
        return Err(AccessError::SignInRequired);
    };
    let state = favourites.toggle(id);
    log::debug!("user {} favourite toggled: {state:?}", user.user_id);
    Ok(state)
}
