//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A WGS84 latitude/longitude pair, valid by construction.
///
/// # Invariants
///
/// - `latitude` is finite and within `[-90, 90]`
/// - `longitude` is finite and within `[-180, 180]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` if either component is NaN, infinite
    /// or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CatalogError> {
        if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CatalogError::malformed(format!(
                "latitude {} outside [{}, {}]",
                latitude, MIN_LATITUDE, MAX_LATITUDE
            )));
        }
        if !longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CatalogError::malformed(format!(
                "longitude {} outside [{}, {}]",
                longitude, MIN_LONGITUDE, MAX_LONGITUDE
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Wire shape of the `location` object in a catalog document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CatalogError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = Coordinate::new(90.5, 0.0).unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = Coordinate::new(0.0, -180.01).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Coordinate =
            serde_json::from_str(r#"{"latitude": 37.819927, "longitude": -122.478256}"#).unwrap();
        assert_eq!(ok.latitude(), 37.819927);

        let bad: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 137.0, "longitude": -122.0}"#);
        assert!(bad.is_err());
    }
}
