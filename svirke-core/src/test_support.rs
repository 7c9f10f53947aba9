//! Test-only builders and collaborators shared by unit tests.

use crate::{Coordinate, Event, EventDetails, EventId};

/// Build details for a placeholder event at the given coordinate.
#[must_use]
pub fn details_at(performer: &str, latitude: f64, longitude: f64) -> EventDetails {
    EventDetails {
        performer: performer.to_owned(),
        venue: format!("{performer} klub"),
        city: "Beograd".to_owned(),
        genre: "rock".to_owned(),
        time: "21:00".to_owned(),
        date: None,
        location: Coordinate::new(latitude, longitude),
    }
}

/// Build an event whose id and performer are both `id`.
#[must_use]
pub fn event_at(id: &str, latitude: f64, longitude: f64) -> Event {
    Event::new(EventId::new(id), details_at(id, latitude, longitude))
}

/// Build an event with explicit search fields.
#[must_use]
pub fn described_event(id: &str, performer: &str, genre: &str, venue: &str) -> Event {
    let mut event = event_at(id, 44.8125, 20.4612);
    performer.clone_into(&mut event.details.performer);
    genre.clone_into(&mut event.details.genre);
    venue.clone_into(&mut event.details.venue);
    event
}

/// Build an event carrying a date.
#[must_use]
pub fn dated_event(id: &str, date: Option<&str>) -> Event {
    let mut event = event_at(id, 44.8125, 20.4612);
    event.details.date = date.map(str::to_owned);
    event
}
