//! Application state and composition.

use std::sync::Arc;

use treasurehunt_domain::LandmarkCatalog;

use crate::infrastructure::ports::{ClockPort, GeofencingPort, LocationAccessPort};
use crate::stores::HuntSessionStore;
use crate::use_cases::hunt::{
    GetHuntStatus, HandleTransition, HuntUseCases, RestartHunt, StartGeofencing, Teardown,
};

/// Main application state.
///
/// Owns the catalog and the hunt session for the lifetime of the process, and
/// wires every use case to the same ports.
pub struct App {
    pub catalog: Arc<LandmarkCatalog>,
    pub session: Arc<HuntSessionStore>,
    pub use_cases: HuntUseCases,
}

impl App {
    pub fn new(
        catalog: LandmarkCatalog,
        geofencing: Arc<dyn GeofencingPort>,
        location_access: Arc<dyn LocationAccessPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let session = Arc::new(HuntSessionStore::new(catalog.size()));

        let use_cases = HuntUseCases::new(
            Arc::new(StartGeofencing::new(
                catalog.clone(),
                session.clone(),
                geofencing.clone(),
                location_access.clone(),
                clock,
            )),
            Arc::new(HandleTransition::new(catalog.clone(), session.clone())),
            Arc::new(RestartHunt::new(session.clone(), geofencing.clone())),
            Arc::new(Teardown::new(
                session.clone(),
                geofencing,
                location_access,
            )),
            Arc::new(GetHuntStatus::new(catalog.clone(), session.clone())),
        );

        Self {
            catalog,
            session,
            use_cases,
        }
    }
}
