//! Geofence request built for a single landmark.
//!
//! The hunt only ever registers one circular geofence at a time, keyed by the
//! landmark id, triggering on entry.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Landmark;
use crate::value_objects::{Coordinate, LandmarkId};

/// Radius of every landmark geofence.
pub const GEOFENCE_RADIUS_METERS: f32 = 20.0;

/// After this long, location services stop tracking a geofence.
pub const GEOFENCE_EXPIRATION: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
    Exit,
}

/// A circular geofence request for one landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceSpec {
    request_id: LandmarkId,
    center: Coordinate,
    radius_meters: f32,
    expiration: Duration,
    transition: GeofenceTransition,
    /// Fire immediately if the device is already inside on registration.
    initial_trigger: Option<GeofenceTransition>,
}

impl GeofenceSpec {
    /// Entry geofence with the standard radius and expiration.
    pub fn for_landmark(landmark: &Landmark) -> Self {
        Self {
            request_id: landmark.id().clone(),
            center: landmark.coordinate(),
            radius_meters: GEOFENCE_RADIUS_METERS,
            expiration: GEOFENCE_EXPIRATION,
            transition: GeofenceTransition::Enter,
            initial_trigger: Some(GeofenceTransition::Enter),
        }
    }

    #[inline]
    pub fn request_id(&self) -> &LandmarkId {
        &self.request_id
    }

    #[inline]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[inline]
    pub fn radius_meters(&self) -> f32 {
        self.radius_meters
    }

    #[inline]
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    #[inline]
    pub fn transition(&self) -> GeofenceTransition {
        self.transition
    }

    #[inline]
    pub fn initial_trigger(&self) -> Option<GeofenceTransition> {
        self.initial_trigger
    }

    /// Instant after which a geofence registered at `registered_at` lapses.
    pub fn expires_at(&self, registered_at: DateTime<Utc>) -> DateTime<Utc> {
        let millis = self.expiration.as_millis();
        let millis = i64::try_from(millis).unwrap_or(i64::MAX);
        registered_at + chrono::Duration::milliseconds(millis)
    }
}
