//! External service port traits (geofencing, location access).

use async_trait::async_trait;
use treasurehunt_domain::{GeofenceSpec, GeofenceTransition};

use super::error::GeofenceError;

// =============================================================================
// Geofencing
// =============================================================================

/// Registration side of the location services geofencing client.
///
/// Completions are delivered as the returned future resolving; callers await
/// them rather than nesting success/failure callbacks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeofencingPort: Send + Sync {
    /// Register a single geofence.
    async fn add_geofence(&self, spec: &GeofenceSpec) -> Result<(), GeofenceError>;

    /// Remove every geofence this app registered.
    async fn remove_geofences(&self) -> Result<(), GeofenceError>;
}

/// A transition reported by the geofencing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeofenceTransitionEvent {
    pub transition: GeofenceTransition,
    /// Request ids of every geofence that triggered.
    pub triggering_ids: Vec<String>,
}

impl GeofenceTransitionEvent {
    /// Entry into the geofence registered under `request_id`.
    pub fn entered(request_id: impl Into<String>) -> Self {
        Self {
            transition: GeofenceTransition::Enter,
            triggering_ids: vec![request_id.into()],
        }
    }
}

// =============================================================================
// Location access
// =============================================================================

/// Permission and device-settings checks done before registering geofences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationAccessPort: Send + Sync {
    /// Foreground and background location access are both granted.
    async fn permissions_granted(&self) -> bool;

    /// Device location is switched on at a level geofencing can use.
    async fn location_settings_enabled(&self) -> bool;
}
