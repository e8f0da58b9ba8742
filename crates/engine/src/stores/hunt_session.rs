//! Hunt session storage for runtime state.
//!
//! Holds the tracker for the lifetime of a hunt session. Every mutation goes
//! through [`HuntSessionStore::lock`], which serializes callers: a use case
//! keeps the guard across its async geofencing calls, so a late completion
//! cannot interleave with a new trigger.

use tokio::sync::{Mutex, MutexGuard};
use treasurehunt_domain::HuntProgress;

pub struct HuntSessionStore {
    progress: Mutex<HuntProgress>,
}

impl HuntSessionStore {
    pub fn new(catalog_size: usize) -> Self {
        Self {
            progress: Mutex::new(HuntProgress::new(catalog_size)),
        }
    }

    /// Exclusive access to the tracker.
    pub async fn lock(&self) -> MutexGuard<'_, HuntProgress> {
        self.progress.lock().await
    }

    /// Copy of the tracker at this instant.
    pub async fn snapshot(&self) -> HuntProgress {
        self.progress.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use treasurehunt_domain::HuntState;

    #[tokio::test]
    async fn concurrent_advances_hand_out_one_landmark() {
        let store = Arc::new(HuntSessionStore::new(3));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.lock().await.advance() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(0));
        }
        assert_eq!(
            store.snapshot().await.state(),
            HuntState::Pending {
                index: 0,
                registered: false,
            }
        );
    }
}
