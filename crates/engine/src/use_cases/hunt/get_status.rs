//! Hunt status query.

use std::sync::Arc;

use serde::Serialize;
use treasurehunt_domain::LandmarkCatalog;

use crate::stores::HuntSessionStore;

/// What the player sees: the current clue and the last landmark found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HuntStatus {
    pub total: usize,
    pub found: usize,
    /// Hint for the landmark being searched for, if any remain.
    pub current_hint: Option<String>,
    /// Name of the most recently found landmark.
    pub last_found: Option<String>,
    pub geofence_active: bool,
    pub complete: bool,
}

pub struct GetHuntStatus {
    catalog: Arc<LandmarkCatalog>,
    session: Arc<HuntSessionStore>,
}

impl GetHuntStatus {
    pub fn new(catalog: Arc<LandmarkCatalog>, session: Arc<HuntSessionStore>) -> Self {
        Self { catalog, session }
    }

    pub async fn execute(&self) -> HuntStatus {
        let progress = self.session.snapshot().await;

        let searching = match progress.pending_index() {
            Some(index) => Some(index),
            None if progress.is_complete() => None,
            None => Some(progress.peek_next_index()),
        };
        let current_hint = searching
            .and_then(|i| self.catalog.at(i).ok())
            .map(|l| l.hint().to_string());
        let last_found = progress.last_found_index();

        HuntStatus {
            total: self.catalog.size(),
            found: last_found.map_or(0, |i| i + 1),
            current_hint,
            last_found: last_found
                .and_then(|i| self.catalog.at(i).ok())
                .map(|l| l.name().to_string()),
            geofence_active: progress.is_active(),
            complete: progress.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::two_landmark_catalog;

    fn use_case(session: Arc<HuntSessionStore>) -> GetHuntStatus {
        GetHuntStatus::new(Arc::new(two_landmark_catalog()), session)
    }

    #[tokio::test]
    async fn fresh_session_shows_first_clue() {
        let session = Arc::new(HuntSessionStore::new(2));
        let status = use_case(session).execute().await;

        assert_eq!(status.total, 2);
        assert_eq!(status.found, 0);
        assert_eq!(status.current_hint.as_deref(), Some("Clue for A"));
        assert_eq!(status.last_found, None);
        assert!(!status.geofence_active);
        assert!(!status.complete);
    }

    #[tokio::test]
    async fn after_first_arrival_shows_second_clue() {
        let session = Arc::new(HuntSessionStore::new(2));
        {
            let mut progress = session.lock().await;
            progress.advance().unwrap();
            progress.mark_active();
            progress.mark_inactive();
            progress.advance().unwrap();
            progress.mark_active();
        }

        let status = use_case(session).execute().await;
        assert_eq!(status.found, 1);
        assert_eq!(status.current_hint.as_deref(), Some("Clue for B"));
        assert_eq!(status.last_found.as_deref(), Some("Landmark A"));
        assert!(status.geofence_active);
    }

    #[tokio::test]
    async fn complete_hunt_has_no_clue() {
        let session = Arc::new(HuntSessionStore::new(2));
        {
            let mut progress = session.lock().await;
            progress.restart_at(2).unwrap();
            let _ = progress.advance();
        }

        let status = use_case(session).execute().await;
        assert!(status.complete);
        assert_eq!(status.found, 2);
        assert_eq!(status.current_hint, None);
        assert_eq!(status.last_found.as_deref(), Some("Landmark B"));
    }
}
