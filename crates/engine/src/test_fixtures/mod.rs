//! Test fixtures: catalogs and a wired-up app with simulated adapters.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::two_landmark_catalog;
//!
//! #[test]
//! fn test_catalog_has_two_stops() {
//!     assert_eq!(two_landmark_catalog().size(), 2);
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use treasurehunt_domain::{Coordinate, Landmark, LandmarkCatalog, LandmarkId};

use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::location_access::StaticLocationAccess;
use crate::infrastructure::simulated_geofencing::SimulatedGeofencing;

/// The catalog shipped in `data/landmarks.json`.
///
/// # Panics
///
/// Panics if the data file cannot be read or fails validation.
pub fn san_francisco_catalog() -> LandmarkCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("landmarks.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    LandmarkCatalog::load(&contents)
        .unwrap_or_else(|e| panic!("Invalid catalog {}: {}", path.display(), e))
}

pub fn landmark(id: &str, latitude: f64, longitude: f64) -> Landmark {
    Landmark::new(
        LandmarkId::new(id).unwrap(),
        format!("Clue for {}", id),
        format!("Landmark {}", id),
        Coordinate::new(latitude, longitude).unwrap(),
    )
}

/// Landmarks `A` and `B`.
pub fn two_landmark_catalog() -> LandmarkCatalog {
    LandmarkCatalog::from_landmarks(vec![
        landmark("A", 37.819927, -122.478256),
        landmark("B", 37.795490, -122.394276),
    ])
    .unwrap()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
}

/// An app wired to the simulated geofencing service, with location access
/// granted and a fixed clock. The geofencing handle is returned for
/// inspection and failure injection.
pub fn simulated_app(catalog: LandmarkCatalog) -> (App, Arc<SimulatedGeofencing>) {
    let geofencing = Arc::new(SimulatedGeofencing::new(100));
    let app = App::new(
        catalog,
        geofencing.clone(),
        Arc::new(StaticLocationAccess::granted()),
        Arc::new(FixedClock(fixed_now())),
    );
    (app, geofencing)
}
