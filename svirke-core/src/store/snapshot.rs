//! JSON snapshots of the event collection.
//!
//! A snapshot is a JSON array of event documents in the stored wire shape.
//! Reading validates every coordinate so the result is safe to rank.

use std::io::{Read, Write};

use thiserror::Error;

use crate::{CoordinateError, Event, EventId};

/// Errors raised while reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot could not be decoded.
    #[error("failed to decode event snapshot: {source}")]
    Decode {
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// An event carried an unusable coordinate.
    #[error("event {id} has an invalid location: {source}")]
    InvalidLocation {
        /// Offending event.
        id: EventId,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
    /// The snapshot could not be encoded or written.
    #[error("failed to write event snapshot: {source}")]
    Encode {
        /// Encoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Read and validate a snapshot.
///
/// # Errors
/// Returns [`SnapshotError::Decode`] for malformed JSON and
/// [`SnapshotError::InvalidLocation`] for the first event whose coordinate
/// is out of range.
pub fn read_snapshot<R: Read>(reader: R) -> Result<Vec<Event>, SnapshotError> {
    let events: Vec<Event> =
        serde_json::from_reader(reader).map_err(|source| SnapshotError::Decode { source })?;
    for event in &events {
        event
            .location()
            .validated()
            .map_err(|source| SnapshotError::InvalidLocation {
                id: event.id.clone(),
                source,
            })?;
    }
    log::debug!("loaded {} events from snapshot", events.len());
    Ok(events)
}

/// Write `events` as a pretty-printed snapshot.
///
/// # Errors
/// Returns [`SnapshotError::Encode`] when serialisation or the write fails.
pub fn write_snapshot<W: Write>(writer: W, events: &[Event]) -> Result<(), SnapshotError> {
    serde_json::to_writer_pretty(writer, events).map_err(|source| SnapshotError::Encode { source })
}
