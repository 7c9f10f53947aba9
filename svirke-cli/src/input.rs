//! Loading event snapshots and favourites from disk.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use svirke_core::{Event, Favourites, read_snapshot};

use crate::CliError;

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Loads and validates a JSON event snapshot.
pub(crate) fn load_events(path: &Utf8Path) -> Result<Vec<Event>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenEvents {
        path: path.to_path_buf(),
        source,
    })?;
    let events = read_snapshot(BufReader::new(file)).map_err(|source| CliError::ReadEvents {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} events from {path}", events.len());
    Ok(events)
}

/// Loads a JSON array of favourite event ids.
pub(crate) fn load_favourites(path: &Utf8Path) -> Result<Favourites, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenFavourites {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseFavourites {
        path: path.to_path_buf(),
        source,
    })
}
