//! Event records and the validated form input that produces them.
//!
//! Serialised field names follow the stored documents: `izvodjac`
//! (performer), `lokal` (venue), `grad` (city), `zanr` (genre), `vreme`
//! (time), `datum` (date) plus the flattened `lat`/`lng` coordinate.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinate, CoordinateError};

/// Opaque identifier assigned by the event store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventId(String);

impl EventId {
    /// Wrap an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Everything about an event except its identifier.
///
/// This is the payload the store accepts on create and update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventDetails {
    /// Performing artist or band.
    #[cfg_attr(feature = "serde", serde(rename = "izvodjac"))]
    pub performer: String,
    /// Venue name.
    #[cfg_attr(feature = "serde", serde(rename = "lokal"))]
    pub venue: String,
    /// City the venue is in.
    #[cfg_attr(feature = "serde", serde(rename = "grad"))]
    pub city: String,
    /// Musical genre; empty when not given.
    #[cfg_attr(feature = "serde", serde(rename = "zanr", default))]
    pub genre: String,
    /// Start time as entered, for example `21:00`.
    #[cfg_attr(feature = "serde", serde(rename = "vreme"))]
    pub time: String,
    /// Calendar date as entered, usually `YYYY-MM-DD`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "datum", default, skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<String>,
    /// Venue position.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: Coordinate,
}

/// A live-music event at a fixed venue.
///
/// # Examples
/// ```
/// use svirke_core::{Coordinate, Event, EventDetails, EventId};
///
/// let event = Event::new(
///     EventId::new("svirka-1"),
///     EventDetails {
///         performer: "Bajaga".into(),
///         venue: "Dom omladine".into(),
///         city: "Beograd".into(),
///         genre: "rock".into(),
///         time: "21:00".into(),
///         date: None,
///         location: Coordinate::new(44.8150, 20.4650),
///     },
/// );
/// assert_eq!(event.id.as_str(), "svirka-1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    /// Store-assigned identifier.
    pub id: EventId,
    /// Descriptive fields and location.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: EventDetails,
}

impl Event {
    /// Pair an identifier with its details.
    #[must_use]
    pub const fn new(id: EventId, details: EventDetails) -> Self {
        Self { id, details }
    }

    /// The venue position.
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.details.location
    }
}

/// Form fields that a [`EventDraft`] requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Performer name.
    Performer,
    /// Venue name.
    Venue,
    /// City name.
    City,
    /// Start time.
    Time,
    /// Latitude in degrees.
    Latitude,
    /// Longitude in degrees.
    Longitude,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Performer => "performer",
            Self::Venue => "venue",
            Self::City => "city",
            Self::Time => "time",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        })
    }
}

/// Errors returned by [`EventDraft::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventDraftError {
    /// A required field was empty after trimming.
    #[error("{field} is required")]
    MissingField {
        /// The empty field.
        field: DraftField,
    },
    /// A coordinate field did not parse as a number.
    #[error("{field} {value:?} is not a number")]
    InvalidNumber {
        /// The offending field.
        field: DraftField,
        /// Raw input.
        value: String,
    },
    /// The parsed coordinate was out of range.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Raw, untrusted event input as typed into an admin form.
///
/// Every field is a string; [`EventDraft::validate`] turns it into
/// [`EventDetails`] that are safe to rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventDraft {
    /// Performer name.
    #[cfg_attr(feature = "serde", serde(rename = "izvodjac"))]
    pub performer: String,
    /// Venue name.
    #[cfg_attr(feature = "serde", serde(rename = "lokal"))]
    pub venue: String,
    /// City name.
    #[cfg_attr(feature = "serde", serde(rename = "grad"))]
    pub city: String,
    /// Genre; may be left blank.
    #[cfg_attr(feature = "serde", serde(rename = "zanr"))]
    pub genre: String,
    /// Start time.
    #[cfg_attr(feature = "serde", serde(rename = "vreme"))]
    pub time: String,
    /// Optional date; blank means none.
    #[cfg_attr(feature = "serde", serde(rename = "datum"))]
    pub date: String,
    /// Latitude as typed.
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    pub latitude: String,
    /// Longitude as typed.
    #[cfg_attr(feature = "serde", serde(rename = "lng"))]
    pub longitude: String,
}

impl EventDraft {
    /// Check the draft and produce validated details.
    ///
    /// Text fields are trimmed. Genre and date may be blank. Coordinates
    /// must parse as finite numbers in range.
    ///
    /// # Errors
    /// Returns [`EventDraftError`] for the first failing field, checked in
    /// form order.
    ///
    /// # Examples
    /// ```
    /// use svirke_core::{EventDraft, EventDraftError};
    ///
    /// let draft = EventDraft {
    ///     performer: "Bajaga".into(),
    ///     venue: "Dom omladine".into(),
    ///     city: "Beograd".into(),
    ///     genre: "rock".into(),
    ///     time: "21:00".into(),
    ///     latitude: "44.815".into(),
    ///     longitude: "abc".into(),
    ///     ..EventDraft::default()
    /// };
    /// assert!(matches!(draft.validate(), Err(EventDraftError::InvalidNumber { .. })));
    /// ```
    pub fn validate(&self) -> Result<EventDetails, EventDraftError> {
        let performer = required(&self.performer, DraftField::Performer)?;
        let venue = required(&self.venue, DraftField::Venue)?;
        let city = required(&self.city, DraftField::City)?;
        let genre = self.genre.trim().to_owned();
        let time = required(&self.time, DraftField::Time)?;
        let latitude = number(&self.latitude, DraftField::Latitude)?;
        let longitude = number(&self.longitude, DraftField::Longitude)?;
        let location = Coordinate::try_new(latitude, longitude)?;
        let date = Some(self.date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_owned);
        Ok(EventDetails {
            performer,
            venue,
            city,
            genre,
            time,
            date,
            location,
        })
    }
}

impl From<&EventDetails> for EventDraft {
    fn from(details: &EventDetails) -> Self {
        Self {
            performer: details.performer.clone(),
            venue: details.venue.clone(),
            city: details.city.clone(),
            genre: details.genre.clone(),
            time: details.time.clone(),
            date: details.date.clone().unwrap_or_default(),
            latitude: details.location.latitude.to_string(),
            longitude: details.location.longitude.to_string(),
        }
    }
}

fn required(value: &str, field: DraftField) -> Result<String, EventDraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(EventDraftError::MissingField { field })
    } else {
        Ok(trimmed.to_owned())
    }
}

fn number(value: &str, field: DraftField) -> Result<f64, EventDraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventDraftError::MissingField { field });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| EventDraftError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}
