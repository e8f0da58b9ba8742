//! Teardown use case.
//!
//! Runs when the hunt session goes away. Removes registered geofences when
//! location access still allows it, and releases the tracker's registration
//! without resolving the pending landmark.

use std::sync::Arc;

use crate::infrastructure::ports::{GeofencingPort, LocationAccessPort};
use crate::stores::HuntSessionStore;

pub struct Teardown {
    session: Arc<HuntSessionStore>,
    geofencing: Arc<dyn GeofencingPort>,
    location_access: Arc<dyn LocationAccessPort>,
}

impl Teardown {
    pub fn new(
        session: Arc<HuntSessionStore>,
        geofencing: Arc<dyn GeofencingPort>,
        location_access: Arc<dyn LocationAccessPort>,
    ) -> Self {
        Self {
            session,
            geofencing,
            location_access,
        }
    }

    pub async fn execute(&self) {
        let mut progress = self.session.lock().await;

        if self.location_access.permissions_granted().await {
            match self.geofencing.remove_geofences().await {
                Ok(()) => tracing::info!("Geofences removed"),
                Err(e) => tracing::warn!(error = %e, "Geofences not removed"),
            }
        } else {
            tracing::debug!("Skipping geofence removal without location permission");
        }

        progress.release();
    }
}
