//! Value objects - Immutable objects defined by their attributes

mod coordinate;
mod geofence;
mod landmark_id;

pub use coordinate::{Coordinate, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
pub use geofence::{GeofenceSpec, GeofenceTransition, GEOFENCE_EXPIRATION, GEOFENCE_RADIUS_METERS};
pub use landmark_id::LandmarkId;
