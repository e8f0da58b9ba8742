//! Restart hunt use case.
//!
//! Tears down any registered geofence and moves the cursor back to the start,
//! or to a specific landmark when the restart carries a target index.

use std::sync::Arc;

use treasurehunt_domain::CatalogError;

use crate::infrastructure::ports::GeofencingPort;
use crate::stores::HuntSessionStore;

pub struct RestartHunt {
    session: Arc<HuntSessionStore>,
    geofencing: Arc<dyn GeofencingPort>,
}

impl RestartHunt {
    pub fn new(session: Arc<HuntSessionStore>, geofencing: Arc<dyn GeofencingPort>) -> Self {
        Self {
            session,
            geofencing,
        }
    }

    /// Restart at `target`, or at the first landmark when `None`.
    ///
    /// Does not register anything; run `StartGeofencing` afterwards.
    pub async fn execute(&self, target: Option<usize>) -> Result<(), RestartError> {
        let mut progress = self.session.lock().await;

        let size = progress.catalog_size();
        if let Some(index) = target.filter(|&index| index > size) {
            return Err(CatalogError::index_out_of_range(index, size).into());
        }

        if progress.pending_index().is_some() {
            if let Err(e) = self.geofencing.remove_geofences().await {
                tracing::warn!(error = %e, "Failed to remove geofences on restart");
            }
        }

        match target {
            Some(index) => progress.restart_at(index)?,
            None => progress.reset(),
        }

        tracing::info!(next_index = progress.peek_next_index(), "Hunt restarted");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RestartError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
