//! Turn-by-turn directions links.

use crate::Coordinate;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// A maps link routing the user to `destination`.
///
/// # Examples
/// ```
/// use svirke_core::{Coordinate, directions_url};
///
/// assert_eq!(
///     directions_url(Coordinate::new(44.815, 20.465)),
///     "https://www.google.com/maps/dir/?api=1&destination=44.815,20.465",
/// );
/// ```
#[must_use]
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "{DIRECTIONS_BASE}{},{}",
        destination.latitude, destination.longitude
    )
}
