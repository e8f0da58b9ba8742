//! End-to-end hunt tests.
//!
//! Each test builds a complete `App` over the simulated geofencing service
//! and plays the hunt through the use cases, the way the console does.
//!
//! ```bash
//! cargo test -p treasurehunt-engine --lib e2e_tests
//! ```

mod hunt_flow_tests;

use crate::app::App;
use crate::infrastructure::ports::GeofenceTransitionEvent;
use crate::use_cases::hunt::{StartOutcome, TransitionOutcome};

/// Start geofencing and return the registered landmark index.
///
/// # Panics
///
/// Panics if nothing new was registered.
pub async fn start_and_expect_registered(app: &App) -> usize {
    match app.use_cases.start_geofencing.execute().await {
        Ok(StartOutcome::Registered(registered)) => registered.index,
        other => panic!("Expected a registration, got {:?}", other),
    }
}

/// Simulate entering the geofence for `id`, returning the found index.
pub async fn enter(app: &App, id: &str) -> Option<usize> {
    let event = GeofenceTransitionEvent::entered(id);
    match app
        .use_cases
        .handle_transition
        .execute(&event)
        .await
        .expect("Transition should be handled")
    {
        TransitionOutcome::Arrived { index, .. } => Some(index),
        TransitionOutcome::Ignored => None,
    }
}
