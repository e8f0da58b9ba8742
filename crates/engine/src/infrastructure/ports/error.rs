//! Error types for port operations.

/// Failures reported by the geofencing service.
///
/// Mirrors the status codes a platform geofencing client reports when adding
/// or removing geofences, plus a permission failure raised when the request is
/// made without location access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeofenceError {
    /// Geofencing is unavailable, usually because location is off or set to
    /// a low-accuracy mode.
    #[error(
        "Geofence service is not available now. Go to Settings>Location>Mode and choose High accuracy."
    )]
    NotAvailable,

    #[error("Your app has registered too many geofences.")]
    TooManyGeofences,

    #[error("You have provided too many pending callbacks to the add geofences call.")]
    TooManyPendingIntents,

    #[error("Location permission denied while registering geofence")]
    PermissionDenied,

    #[error("Unknown error: the Geofence service is not available now. ({0})")]
    Unknown(String),
}

impl GeofenceError {
    /// Create an Unknown error with context.
    pub fn unknown(message: impl ToString) -> Self {
        Self::Unknown(message.to_string())
    }

    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NotAvailable | Self::Unknown(_))
    }
}
