//! HuntProgress aggregate - Which landmark is next, and whether its geofence is live
//!
//! The tracker owns the only state in the hunt that has an invariant worth
//! guarding: a landmark must never be registered twice while its geofence is
//! pending, and no landmark may be skipped or repeated regardless of how many
//! times callers retry.
//!
//! # States
//!
//! ```text
//!   Idle(i) --advance--> Pending(i)            if i < size (returns i)
//!   Idle(i) --advance--> Complete              if i >= size
//!   Pending(i) --advance--> Pending(i)         no-op, returns i again
//!   Pending(i) --mark_active--> Pending(i)*    registration acknowledged
//!   Pending(i) --mark_inactive--> Idle(i + 1)  landmark resolved
//!   Pending(i)* --release--> Pending(i)        geofence torn down, not resolved
//!   any --reset--> Idle(0)
//! ```
//!
//! Indices are 0-based catalog positions. `peek_next_index()` reports the
//! cursor, which is one past the pending landmark while one is pending.
//!
//! The tracker holds indices only; it never copies landmark data.

use crate::error::{CatalogError, HuntComplete};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntState {
    /// Waiting to hand out the landmark at `next`.
    Idle { next: usize },
    /// Landmark `index` was handed out. `registered` is set once the geofence
    /// service acknowledged the registration.
    Pending { index: usize, registered: bool },
    /// Every landmark has been handed out and resolved.
    Complete,
}

/// Hunt progress for a catalog of `catalog_size` landmarks.
///
/// # Example
///
/// ```
/// use treasurehunt_domain::HuntProgress;
///
/// let mut progress = HuntProgress::new(1);
/// assert_eq!(progress.advance(), Ok(0));
/// progress.mark_active();
/// assert!(progress.is_active());
///
/// progress.mark_inactive();
/// assert!(progress.advance().is_err());
/// assert!(progress.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntProgress {
    catalog_size: usize,
    state: HuntState,
}

impl HuntProgress {
    pub fn new(catalog_size: usize) -> Self {
        Self {
            catalog_size,
            state: HuntState::Idle { next: 0 },
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn state(&self) -> HuntState {
        self.state
    }

    #[inline]
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// True exactly when a geofence for the pending landmark has been
    /// acknowledged and not yet resolved.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            HuntState::Pending {
                registered: true,
                ..
            }
        )
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, HuntState::Complete)
    }

    /// The cursor: index of the first landmark not yet handed out.
    pub fn peek_next_index(&self) -> usize {
        match self.state {
            HuntState::Idle { next } => next,
            HuntState::Pending { index, .. } => index + 1,
            HuntState::Complete => self.catalog_size,
        }
    }

    /// Landmark currently handed out, registered or not.
    pub fn pending_index(&self) -> Option<usize> {
        match self.state {
            HuntState::Pending { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Most recently resolved landmark, if any.
    pub fn last_found_index(&self) -> Option<usize> {
        match self.state {
            HuntState::Idle { next } => next.checked_sub(1),
            HuntState::Pending { index, .. } => index.checked_sub(1),
            HuntState::Complete => self.catalog_size.checked_sub(1),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Hand out the next landmark index to register.
    ///
    /// While a landmark is pending this returns the same index again and
    /// changes nothing, so duplicate triggers and retries after a failed
    /// registration never skip or double-register a landmark.
    pub fn advance(&mut self) -> Result<usize, HuntComplete> {
        match self.state {
            HuntState::Pending { index, .. } => Ok(index),
            HuntState::Complete => Err(HuntComplete),
            HuntState::Idle { next } if next >= self.catalog_size => {
                self.state = HuntState::Complete;
                Err(HuntComplete)
            }
            HuntState::Idle { next } => {
                self.state = HuntState::Pending {
                    index: next,
                    registered: false,
                };
                Ok(next)
            }
        }
    }

    /// The geofence service acknowledged registration of the pending landmark.
    ///
    /// No-op when nothing is pending or it is already active.
    pub fn mark_active(&mut self) {
        if let HuntState::Pending { registered, .. } = &mut self.state {
            *registered = true;
        }
    }

    /// Resolve the pending landmark (arrival confirmed, or the geofence was
    /// removed for good). No-op when nothing is pending.
    pub fn mark_inactive(&mut self) {
        if let HuntState::Pending { index, .. } = self.state {
            self.state = HuntState::Idle { next: index + 1 };
        }
    }

    /// Drop the registration without resolving the landmark, so the same
    /// landmark is registered again when the hunt resumes.
    pub fn release(&mut self) {
        if let HuntState::Pending { registered, .. } = &mut self.state {
            *registered = false;
        }
    }

    /// Back to the first landmark, nothing active.
    pub fn reset(&mut self) {
        self.state = HuntState::Idle { next: 0 };
    }

    /// Restart with the cursor at `index`, nothing active.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::IndexOutOfRange` if `index > catalog_size`.
    pub fn restart_at(&mut self, index: usize) -> Result<(), CatalogError> {
        if index > self.catalog_size {
            return Err(CatalogError::index_out_of_range(index, self.catalog_size));
        }
        self.state = HuntState::Idle { next: index };
        Ok(())
    }
}
