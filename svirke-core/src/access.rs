//! Role claims and the write gate in front of an event store.
//!
//! Identity comes from an external authentication provider; this module only
//! interprets the role claim it carries. Reads never pass through the gate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Event, EventDetails, EventId, EventStore, StoreError};

/// Role claim attached to a user profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Regular user; may browse and keep favourites.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "korisnik"))]
    User,
    /// Administrator; may also create, edit and delete events.
    #[cfg_attr(feature = "serde", serde(rename = "admin"))]
    Admin,
}

impl Role {
    /// Whether this role may modify events.
    #[must_use]
    pub const fn can_write(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "korisnik",
            Self::Admin => "admin",
        })
    }
}

/// A signed-in user as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity {
    /// Provider-issued user id.
    pub user_id: String,
    /// Role claim; absent claims default to [`Role::User`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Role,
}

impl Identity {
    /// Construct an identity.
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// Errors raised when an operation needs more privilege than the caller has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The operation needs a signed-in user.
    #[error("sign in to use favourites")]
    SignInRequired,
    /// The operation needs the admin role.
    #[error("user {user_id} has role {role}; admin required")]
    AdminRequired {
        /// Caller's user id.
        user_id: String,
        /// Caller's actual role.
        role: Role,
    },
}

/// Write access to an [`EventStore`] for a verified administrator.
///
/// # Examples
/// ```
/// use svirke_core::{AdminStore, Identity, MemoryEventStore, Role};
///
/// let mut store = MemoryEventStore::default();
/// let user = Identity::new("uid-7", Role::User);
/// assert!(AdminStore::new(&user, &mut store).is_err());
///
/// let admin = Identity::new("uid-1", Role::Admin);
/// assert!(AdminStore::new(&admin, &mut store).is_ok());
/// ```
#[derive(Debug)]
pub struct AdminStore<'a, S: EventStore> {
    identity: &'a Identity,
    store: &'a mut S,
}

impl<'a, S: EventStore> AdminStore<'a, S> {
    /// Open the gate for `identity`.
    ///
    /// # Errors
    /// Returns [`AccessError::AdminRequired`] unless the identity carries
    /// the admin role.
    pub fn new(identity: &'a Identity, store: &'a mut S) -> Result<Self, AccessError> {
        if !identity.role.can_write() {
            log::warn!("rejected write access for user {}", identity.user_id);
            return Err(AccessError::AdminRequired {
                user_id: identity.user_id.clone(),
                role: identity.role,
            });
        }
        Ok(Self { identity, store })
    }

    /// The administrator holding the gate.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        self.identity
    }

    /// Create an event. See [`EventStore::create`].
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the store.
    pub fn create(&mut self, details: EventDetails) -> Result<EventId, StoreError> {
        let id = self.store.create(details)?;
        log::info!("{} created event {id}", self.identity.user_id);
        Ok(id)
    }

    /// Replace an event's details. See [`EventStore::update`].
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the store.
    pub fn update(&mut self, id: &EventId, details: EventDetails) -> Result<(), StoreError> {
        self.store.update(id, details)?;
        log::info!("{} updated event {id}", self.identity.user_id);
        Ok(())
    }

    /// Delete an event. See [`EventStore::delete`].
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the store.
    pub fn delete(&mut self, id: &EventId) -> Result<Event, StoreError> {
        let removed = self.store.delete(id)?;
        log::info!("{} deleted event {id}", self.identity.user_id);
        Ok(removed)
    }
}
