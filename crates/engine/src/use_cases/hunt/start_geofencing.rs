//! Start geofencing use case.
//!
//! Registers the geofence for the next landmark, after checking location
//! access. Runs at session start and again after every arrival.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use treasurehunt_domain::{
    CatalogError, GeofenceSpec, HuntComplete, HuntState, LandmarkCatalog, LandmarkId,
};

use crate::infrastructure::ports::{ClockPort, GeofenceError, GeofencingPort, LocationAccessPort};
use crate::stores::HuntSessionStore;

/// A geofence that is now live for a landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredGeofence {
    pub index: usize,
    pub landmark_id: LandmarkId,
    /// Clue to show while the user searches.
    pub hint: String,
    pub registered_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Result of starting geofencing.
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// A geofence was already live; nothing was registered.
    AlreadyActive { index: usize },
    /// The next landmark's geofence is registered.
    Registered(RegisteredGeofence),
    /// No landmarks left. Any remaining geofences were removed.
    HuntComplete,
}

/// Start geofencing use case.
///
/// Orchestrates: activation guard, permission and settings checks, advancing
/// the tracker, replacing the registered geofence, and confirming activation.
pub struct StartGeofencing {
    catalog: Arc<LandmarkCatalog>,
    session: Arc<HuntSessionStore>,
    geofencing: Arc<dyn GeofencingPort>,
    location_access: Arc<dyn LocationAccessPort>,
    clock: Arc<dyn ClockPort>,
}

impl StartGeofencing {
    pub fn new(
        catalog: Arc<LandmarkCatalog>,
        session: Arc<HuntSessionStore>,
        geofencing: Arc<dyn GeofencingPort>,
        location_access: Arc<dyn LocationAccessPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            catalog,
            session,
            geofencing,
            location_access,
            clock,
        }
    }

    /// Execute the start geofencing use case.
    ///
    /// # Returns
    /// * `Ok(StartOutcome)` - Registered, already active, or hunt complete
    /// * `Err(StartError)` - Location access missing or registration failed.
    ///   The tracker keeps the landmark pending, so calling again retries the
    ///   same landmark.
    pub async fn execute(&self) -> Result<StartOutcome, StartError> {
        // Held until the registration completes.
        let mut progress = self.session.lock().await;

        if let HuntState::Pending {
            index,
            registered: true,
        } = progress.state()
        {
            tracing::debug!(index, "Geofence already active, skipping registration");
            return Ok(StartOutcome::AlreadyActive { index });
        }

        if !self.location_access.permissions_granted().await {
            tracing::warn!("Location permissions not granted, cannot start geofencing");
            return Err(StartError::PermissionDenied);
        }

        if !self.location_access.location_settings_enabled().await {
            tracing::warn!("Device location is off, cannot start geofencing");
            return Err(StartError::LocationSettingsDisabled);
        }

        let index = match progress.advance() {
            Ok(index) => index,
            Err(HuntComplete) => {
                if let Err(e) = self.geofencing.remove_geofences().await {
                    tracing::warn!(error = %e, "Failed to remove geofences after hunt completion");
                }
                tracing::info!(landmarks = self.catalog.size(), "Hunt complete");
                return Ok(StartOutcome::HuntComplete);
            }
        };

        let landmark = self.catalog.at(index)?;
        let spec = GeofenceSpec::for_landmark(landmark);

        // Clear whatever is registered; the add goes ahead regardless.
        if let Err(e) = self.geofencing.remove_geofences().await {
            tracing::debug!(error = %e, "Removing previous geofences failed, adding anyway");
        }

        if let Err(source) = self.geofencing.add_geofence(&spec).await {
            tracing::warn!(
                index,
                landmark_id = %landmark.id(),
                error = %source,
                "Failed to add geofence"
            );
            return Err(StartError::Registration {
                landmark_id: landmark.id().clone(),
                source,
            });
        }

        progress.mark_active();

        let registered_at = self.clock.now();
        let registered = RegisteredGeofence {
            index,
            landmark_id: landmark.id().clone(),
            hint: landmark.hint().to_string(),
            registered_at,
            expires_at: spec.expires_at(registered_at),
        };

        tracing::info!(
            index,
            landmark_id = %registered.landmark_id,
            expires_at = %registered.expires_at,
            "Geofence added"
        );

        Ok(StartOutcome::Registered(registered))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Device location must be turned on to play")]
    LocationSettingsDisabled,
    #[error("Failed to add geofence for '{landmark_id}': {source}")]
    Registration {
        landmark_id: LandmarkId,
        #[source]
        source: GeofenceError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
