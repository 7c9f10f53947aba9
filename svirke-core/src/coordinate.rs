//! Geographic coordinates for venues and reference locations.
//!
//! Coordinates are WGS84 degrees. Conversions to [`geo::Coord`] use
//! `x = longitude` and `y = latitude`.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

use crate::distance::{Distance, distance_between};

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A latitude/longitude pair in degrees.
///
/// Documents may carry either component as a JSON number or as a numeric
/// string such as `"44.8125"`; both decode to the same value.
///
/// # Examples
/// ```
/// use svirke_core::Coordinate;
///
/// let belgrade = Coordinate::try_new(44.8125, 20.4612)?;
/// assert_eq!(belgrade.latitude, 44.8125);
/// # Ok::<(), svirke_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator, in `-90.0..=90.0`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "lat", deserialize_with = "degrees_from_number_or_text")
    )]
    pub latitude: f64,
    /// Degrees east of the prime meridian, in `-180.0..=180.0`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "lng", deserialize_with = "degrees_from_number_or_text")
    )]
    pub longitude: f64,
}

/// Errors returned by [`Coordinate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// A component was NaN or infinite.
    #[error("{axis} must be a finite number")]
    NotFinite {
        /// Which component failed.
        axis: Axis,
    },
    /// A component fell outside its valid range.
    #[error("{axis} {value} is outside the valid range")]
    OutOfRange {
        /// Which component failed.
        axis: Axis,
        /// Offending value in degrees.
        value: f64,
    },
}

/// Names a coordinate component in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south component.
    Latitude,
    /// East/west component.
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        })
    }
}

impl Coordinate {
    /// Construct a coordinate without validation.
    ///
    /// Callers must ensure both components are finite and in range; the
    /// distance functions give meaningless results otherwise. Use
    /// [`Coordinate::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate and construct a coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside its range.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_axis(Axis::Latitude, latitude, &LATITUDE_RANGE)?;
        check_axis(Axis::Longitude, longitude, &LONGITUDE_RANGE)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Re-run range validation on an existing value.
    ///
    /// Useful for coordinates that arrived through deserialisation, which
    /// does not validate.
    ///
    /// # Errors
    /// See [`Coordinate::try_new`].
    pub fn validated(self) -> Result<Self, CoordinateError> {
        Self::try_new(self.latitude, self.longitude)
    }

    /// Great-circle distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use svirke_core::Coordinate;
    ///
    /// let here = Coordinate::new(0.0, 0.0);
    /// assert_eq!(here.distance_to(here).kilometres(), 0.0);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Self) -> Distance {
        distance_between(self, other)
    }
}

fn check_axis(
    axis: Axis,
    value: f64,
    range: &std::ops::RangeInclusive<f64>,
) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite { axis });
    }
    if !range.contains(&value) {
        return Err(CoordinateError::OutOfRange { axis, value });
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn degrees_from_number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => Ok(value),
        Degrees::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&text), &"a number of degrees")
        }),
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}
