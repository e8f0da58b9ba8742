//! Full hunts from first clue to completion.

use treasurehunt_domain::HuntState;

use super::{enter, start_and_expect_registered};
use crate::infrastructure::ports::GeofenceError;
use crate::test_fixtures::{san_francisco_catalog, simulated_app, two_landmark_catalog};
use crate::use_cases::hunt::{StartError, StartOutcome};

#[tokio::test]
async fn test_two_landmark_hunt_completes() {
    let (app, geofencing) = simulated_app(two_landmark_catalog());

    assert_eq!(start_and_expect_registered(&app).await, 0);
    let live = geofencing.registered().await;
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].request_id(), "A");
    assert_eq!(live[0].radius_meters(), 20.0);

    // Entering the wrong geofence changes nothing.
    assert_eq!(enter(&app, "B").await, None);
    assert_eq!(app.session.snapshot().await.pending_index(), Some(0));

    assert_eq!(enter(&app, "A").await, Some(0));
    assert_eq!(start_and_expect_registered(&app).await, 1);
    let live = geofencing.registered().await;
    assert_eq!(live.len(), 1, "previous geofence should be replaced");
    assert_eq!(live[0].request_id(), "B");

    assert_eq!(enter(&app, "B").await, Some(1));
    assert_eq!(
        app.use_cases.start_geofencing.execute().await.unwrap(),
        StartOutcome::HuntComplete
    );
    assert!(geofencing.registered().await.is_empty());
    assert_eq!(app.session.snapshot().await.state(), HuntState::Complete);

    let status = app.use_cases.status.execute().await;
    assert!(status.complete);
    assert_eq!(status.found, 2);
    assert_eq!(status.last_found.as_deref(), Some("Landmark B"));
    assert_eq!(status.current_hint, None);
}

#[tokio::test]
async fn test_san_francisco_catalog_plays_in_order() {
    let catalog = san_francisco_catalog();
    let ids: Vec<String> = catalog.iter().map(|l| l.id().to_string()).collect();
    assert_eq!(ids.len(), 4);

    let (app, _geofencing) = simulated_app(catalog);

    for (expected, id) in ids.iter().enumerate() {
        assert_eq!(start_and_expect_registered(&app).await, expected);
        assert_eq!(enter(&app, id).await, Some(expected));
    }

    assert_eq!(
        app.use_cases.start_geofencing.execute().await.unwrap(),
        StartOutcome::HuntComplete
    );
}

#[tokio::test]
async fn test_repeated_start_does_not_register_twice() {
    let (app, geofencing) = simulated_app(two_landmark_catalog());

    start_and_expect_registered(&app).await;
    assert_eq!(
        app.use_cases.start_geofencing.execute().await.unwrap(),
        StartOutcome::AlreadyActive { index: 0 }
    );
    assert_eq!(geofencing.add_calls().await, 1);
}

#[tokio::test]
async fn test_failed_registration_retries_same_landmark() {
    let (app, geofencing) = simulated_app(two_landmark_catalog());
    geofencing.fail_next_add(GeofenceError::NotAvailable).await;

    let err = app.use_cases.start_geofencing.execute().await.unwrap_err();
    assert!(matches!(
        err,
        StartError::Registration {
            source: GeofenceError::NotAvailable,
            ..
        }
    ));
    assert!(!app.session.snapshot().await.is_active());
    assert!(geofencing.registered().await.is_empty());

    assert_eq!(start_and_expect_registered(&app).await, 0);
    assert_eq!(geofencing.add_calls().await, 2);
}

#[tokio::test]
async fn test_teardown_keeps_pending_landmark() {
    let (app, geofencing) = simulated_app(two_landmark_catalog());

    start_and_expect_registered(&app).await;
    app.use_cases.teardown.execute().await;

    assert!(geofencing.registered().await.is_empty());
    assert!(!app.session.snapshot().await.is_active());

    // Coming back resumes the same clue.
    assert_eq!(start_and_expect_registered(&app).await, 0);
}
