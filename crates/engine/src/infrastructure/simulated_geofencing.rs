//! In-process geofencing service.
//!
//! Stands in for platform location services when running the hunt from the
//! console or in tests. It keeps the registered geofences in memory, enforces
//! a registration limit, and can be told to fail the next add.

use async_trait::async_trait;
use tokio::sync::Mutex;
use treasurehunt_domain::GeofenceSpec;

use crate::infrastructure::ports::{GeofenceError, GeofencingPort};

#[derive(Default)]
struct Registry {
    geofences: Vec<GeofenceSpec>,
    fail_next_add: Option<GeofenceError>,
    add_calls: usize,
}

pub struct SimulatedGeofencing {
    max_geofences: usize,
    registry: Mutex<Registry>,
}

impl SimulatedGeofencing {
    pub fn new(max_geofences: usize) -> Self {
        Self {
            max_geofences,
            registry: Mutex::new(Registry::default()),
        }
    }

    /// Geofences currently registered.
    pub async fn registered(&self) -> Vec<GeofenceSpec> {
        self.registry.lock().await.geofences.clone()
    }

    /// Total number of add requests received, including failed ones.
    pub async fn add_calls(&self) -> usize {
        self.registry.lock().await.add_calls
    }

    /// Make the next `add_geofence` call fail with `error`.
    pub async fn fail_next_add(&self, error: GeofenceError) {
        self.registry.lock().await.fail_next_add = Some(error);
    }
}

#[async_trait]
impl GeofencingPort for SimulatedGeofencing {
    async fn add_geofence(&self, spec: &GeofenceSpec) -> Result<(), GeofenceError> {
        let mut registry = self.registry.lock().await;
        registry.add_calls += 1;

        if let Some(error) = registry.fail_next_add.take() {
            tracing::debug!(request_id = %spec.request_id(), error = %error, "Simulated add failure");
            return Err(error);
        }

        // Same request id replaces the previous registration.
        let replaced = registry
            .geofences
            .iter()
            .position(|g| g.request_id() == spec.request_id());

        match replaced {
            Some(position) => registry.geofences[position] = spec.clone(),
            None if registry.geofences.len() >= self.max_geofences => {
                return Err(GeofenceError::TooManyGeofences);
            }
            None => registry.geofences.push(spec.clone()),
        }

        tracing::debug!(
            request_id = %spec.request_id(),
            center = %spec.center(),
            radius_meters = spec.radius_meters(),
            "Simulated geofence added"
        );
        Ok(())
    }

    async fn remove_geofences(&self) -> Result<(), GeofenceError> {
        let mut registry = self.registry.lock().await;
        let removed = registry.geofences.len();
        registry.geofences.clear();
        tracing::debug!(removed, "Simulated geofences removed");
        Ok(())
    }
}
