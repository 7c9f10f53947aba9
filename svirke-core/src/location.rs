//! Sources of the reference coordinate.
//!
//! A provider yields one reading per request. Failure is not fatal: the
//! caller falls back to unranked order.

use thiserror::Error;

use crate::Coordinate;

/// Reasons a location reading is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user declined to share their location.
    #[error("location access was denied")]
    PermissionDenied,
    /// The platform cannot provide a location.
    #[error("geolocation is not supported")]
    Unsupported,
}

/// Supplies the user's current coordinate.
///
/// # Examples
///
/// ```rust
/// use svirke_core::{Coordinate, LocationError, LocationProvider};
///
/// struct Gps;
///
/// impl LocationProvider for Gps {
///     fn locate(&self) -> Result<Coordinate, LocationError> {
///         Ok(Coordinate::new(44.8125, 20.4612))
///     }
/// }
///
/// assert_eq!(Gps.locate()?.latitude, 44.8125);
/// # Ok::<(), LocationError>(())
/// ```
pub trait LocationProvider {
    /// Take a single reading.
    ///
    /// # Errors
    /// Returns [`LocationError`] when no coordinate can be produced.
    fn locate(&self) -> Result<Coordinate, LocationError>;
}

/// Provider that always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Provider that always fails with the wrapped error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLocation(pub LocationError);

impl LocationProvider for NoLocation {
    fn locate(&self) -> Result<Coordinate, LocationError> {
        Err(self.0)
    }
}

/// Ask `provider` for a reading, logging and discarding any failure.
///
/// The result feeds straight into [`rank`](crate::rank), where `None`
/// selects the unranked fallback.
pub fn reference_or_log<P: LocationProvider + ?Sized>(provider: &P) -> Option<Coordinate> {
    provider
        .locate()
        .inspect_err(|err| log::warn!("showing events unranked: {err}"))
        .ok()
}
