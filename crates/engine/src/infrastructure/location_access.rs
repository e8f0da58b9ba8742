//! Location access answered from configuration.

use async_trait::async_trait;

use crate::infrastructure::ports::LocationAccessPort;

/// Fixed answers for permission and device-settings checks.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationAccess {
    permissions_granted: bool,
    location_enabled: bool,
}

impl StaticLocationAccess {
    pub fn new(permissions_granted: bool, location_enabled: bool) -> Self {
        Self {
            permissions_granted,
            location_enabled,
        }
    }

    /// Everything granted and enabled.
    pub fn granted() -> Self {
        Self::new(true, true)
    }
}

#[async_trait]
impl LocationAccessPort for StaticLocationAccess {
    async fn permissions_granted(&self) -> bool {
        self.permissions_granted
    }

    async fn location_settings_enabled(&self) -> bool {
        self.location_enabled
    }
}
