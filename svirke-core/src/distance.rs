//! Great-circle distance and its display form.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Results are only meaningful for coordinates inside
//! their valid ranges; see [`Coordinate::try_new`](crate::Coordinate::try_new).

use std::cmp::Ordering;
use std::fmt;

use crate::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A non-negative distance in kilometres.
///
/// Ordering uses [`f64::total_cmp`] so distances can be sorted directly.
/// `Display` renders the same string as [`format_distance`].
#[derive(Debug, Clone, Copy)]
pub struct Distance(f64);

impl Distance {
    /// The zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Wrap a kilometre value.
    ///
    /// Negative and NaN inputs collapse to zero.
    #[must_use]
    pub const fn from_kilometres(kilometres: f64) -> Self {
        if kilometres > 0.0 {
            Self(kilometres)
        } else {
            Self::ZERO
        }
    }

    /// The distance in kilometres.
    #[must_use]
    pub const fn kilometres(self) -> f64 {
        self.0
    }

    /// The distance in metres.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub fn metres(self) -> f64 {
        self.0 * 1000.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1.0 {
            write!(f, "{:.0}m", self.metres().round())
        } else {
            write!(f, "{:.1}km", self.0)
        }
    }
}

/// Haversine distance between two coordinates.
///
/// Symmetric, never negative, and zero for identical inputs.
///
/// # Examples
/// ```
/// use svirke_core::{Coordinate, distance_between};
///
/// let belgrade = Coordinate::new(44.8125, 20.4612);
/// let novi_sad = Coordinate::new(45.2671, 19.8335);
/// let km = distance_between(belgrade, novi_sad).kilometres();
/// assert!((km - 70.6).abs() < 1.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn distance_between(a: Coordinate, b: Coordinate) -> Distance {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();
    // Rounding can push `h` marginally past 1 for antipodal points.
    let h = (sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Distance::from_kilometres(EARTH_RADIUS_KM * c)
}

/// Render a kilometre value for display.
///
/// Below one kilometre the value is shown in whole metres (`450m`); from one
/// kilometre upwards it is shown with one decimal place (`12.3km`).
///
/// # Examples
/// ```
/// use svirke_core::format_distance;
///
/// assert_eq!(format_distance(0.45), "450m");
/// assert_eq!(format_distance(12.34), "12.3km");
/// ```
#[must_use]
pub fn format_distance(kilometres: f64) -> String {
    Distance::from_kilometres(kilometres).to_string()
}
