//! Hunt use cases.

mod get_status;
mod handle_transition;
mod restart_hunt;
mod start_geofencing;
mod teardown;

pub use get_status::{GetHuntStatus, HuntStatus};
pub use handle_transition::{HandleTransition, TransitionOutcome};
pub use restart_hunt::{RestartError, RestartHunt};
pub use start_geofencing::{RegisteredGeofence, StartError, StartGeofencing, StartOutcome};
pub use teardown::Teardown;

use std::sync::Arc;

/// Container for hunt use cases.
pub struct HuntUseCases {
    pub start_geofencing: Arc<StartGeofencing>,
    pub handle_transition: Arc<HandleTransition>,
    pub restart: Arc<RestartHunt>,
    pub teardown: Arc<Teardown>,
    pub status: Arc<GetHuntStatus>,
}

impl HuntUseCases {
    pub fn new(
        start_geofencing: Arc<StartGeofencing>,
        handle_transition: Arc<HandleTransition>,
        restart: Arc<RestartHunt>,
        teardown: Arc<Teardown>,
        status: Arc<GetHuntStatus>,
    ) -> Self {
        Self {
            start_geofencing,
            handle_transition,
            restart,
            teardown,
            status,
        }
    }
}
