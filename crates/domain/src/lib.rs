//! Treasure hunt domain.
//!
//! Pure types and invariants: the landmark catalog, the hunt progress state
//! machine and the geofence request built for a landmark. Nothing here does
//! async work or talks to location services.

extern crate self as treasurehunt_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use aggregates::{HuntProgress, HuntState, LandmarkCatalog, CATALOG_ROOT_KEY};
pub use entities::Landmark;
pub use error::{CatalogError, HuntComplete};
pub use value_objects::{
    Coordinate, GeofenceSpec, GeofenceTransition, LandmarkId, GEOFENCE_EXPIRATION,
    GEOFENCE_RADIUS_METERS,
};
