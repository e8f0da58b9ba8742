//! Handle geofence transition use case.
//!
//! Maps an entry event back to the pending landmark and resolves it. The
//! caller re-runs [`StartGeofencing`](super::StartGeofencing) afterwards to
//! register the next landmark.

use std::sync::Arc;

use treasurehunt_domain::{CatalogError, GeofenceTransition, Landmark, LandmarkCatalog};

use crate::infrastructure::ports::GeofenceTransitionEvent;
use crate::stores::HuntSessionStore;

/// Result of handling a transition event.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The user reached the pending landmark.
    Arrived { index: usize, landmark: Landmark },
    /// Not an entry into the pending landmark's geofence.
    Ignored,
}

pub struct HandleTransition {
    catalog: Arc<LandmarkCatalog>,
    session: Arc<HuntSessionStore>,
}

impl HandleTransition {
    pub fn new(catalog: Arc<LandmarkCatalog>, session: Arc<HuntSessionStore>) -> Self {
        Self { catalog, session }
    }

    pub async fn execute(
        &self,
        event: &GeofenceTransitionEvent,
    ) -> Result<TransitionOutcome, CatalogError> {
        if event.transition != GeofenceTransition::Enter {
            tracing::debug!(transition = ?event.transition, "Ignoring non-entry transition");
            return Ok(TransitionOutcome::Ignored);
        }

        let mut progress = self.session.lock().await;

        let Some(index) = progress.pending_index() else {
            tracing::debug!(ids = ?event.triggering_ids, "Entry event with no pending landmark");
            return Ok(TransitionOutcome::Ignored);
        };

        let landmark = self.catalog.at(index)?;
        let matches_pending = event
            .triggering_ids
            .iter()
            .any(|id| self.catalog.position_of(id) == Some(index));
        if !matches_pending {
            tracing::debug!(
                pending = %landmark.id(),
                ids = ?event.triggering_ids,
                "Entry event does not match pending landmark"
            );
            return Ok(TransitionOutcome::Ignored);
        }

        progress.mark_inactive();

        tracing::info!(index, landmark_id = %landmark.id(), "Landmark found");

        Ok(TransitionOutcome::Arrived {
            index,
            landmark: landmark.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::two_landmark_catalog;
    use treasurehunt_domain::HuntState;

    async fn pending_session(index: usize) -> Arc<HuntSessionStore> {
        let session = Arc::new(HuntSessionStore::new(2));
        {
            let mut progress = session.lock().await;
            progress.restart_at(index).unwrap();
            progress.advance().unwrap();
            progress.mark_active();
        }
        session
    }

    fn use_case(session: Arc<HuntSessionStore>) -> HandleTransition {
        HandleTransition::new(Arc::new(two_landmark_catalog()), session)
    }

    #[tokio::test]
    async fn entry_into_pending_landmark_resolves_it() {
        let session = pending_session(0).await;

        let outcome = use_case(session.clone())
            .execute(&GeofenceTransitionEvent::entered("A"))
            .await
            .unwrap();

        let TransitionOutcome::Arrived { index, landmark } = outcome else {
            panic!("expected arrival, got {:?}", outcome);
        };
        assert_eq!(index, 0);
        assert_eq!(landmark.name(), "Landmark A");

        let progress = session.snapshot().await;
        assert!(!progress.is_active());
        assert_eq!(progress.state(), HuntState::Idle { next: 1 });
    }

    #[tokio::test]
    async fn matches_any_triggering_id() {
        let session = pending_session(1).await;
        let event = GeofenceTransitionEvent {
            transition: GeofenceTransition::Enter,
            triggering_ids: vec!["stale".to_string(), "B".to_string()],
        };

        let outcome = use_case(session).execute(&event).await.unwrap();
        assert!(matches!(outcome, TransitionOutcome::Arrived { index: 1, .. }));
    }

    #[tokio::test]
    async fn entry_into_other_landmark_is_ignored() {
        let session = pending_session(0).await;

        let outcome = use_case(session.clone())
            .execute(&GeofenceTransitionEvent::entered("B"))
            .await
            .unwrap();

        assert_eq!(outcome, TransitionOutcome::Ignored);
        assert!(session.snapshot().await.is_active());
    }

    #[tokio::test]
    async fn exit_transition_is_ignored() {
        let session = pending_session(0).await;
        let event = GeofenceTransitionEvent {
            transition: GeofenceTransition::Exit,
            triggering_ids: vec!["A".to_string()],
        };

        let outcome = use_case(session.clone()).execute(&event).await.unwrap();
        assert_eq!(outcome, TransitionOutcome::Ignored);
        assert!(session.snapshot().await.is_active());
    }

    #[tokio::test]
    async fn duplicate_delivery_resolves_once() {
        let session = pending_session(0).await;
        let handler = use_case(session.clone());
        let event = GeofenceTransitionEvent::entered("A");

        assert!(matches!(
            handler.execute(&event).await.unwrap(),
            TransitionOutcome::Arrived { .. }
        ));
        assert_eq!(
            handler.execute(&event).await.unwrap(),
            TransitionOutcome::Ignored
        );
        assert_eq!(
            session.snapshot().await.state(),
            HuntState::Idle { next: 1 }
        );
    }
}
