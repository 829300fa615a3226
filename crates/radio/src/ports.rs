//! Capability boundary toward the radio driver and the display

use async_trait::async_trait;

use crate::RadioError;

/// Raw-frame injection surface of the radio driver. One implementation per
/// chip family; the scheduler is written against this trait only.
#[async_trait]
pub trait RadioPort: Send + Sync {
    /// Sends `frame` as a raw management frame on the current channel.
    async fn transmit(&self, frame: &[u8]) -> Result<(), RadioError>;

    /// Switches the radio channel for subsequent transmissions.
    async fn set_channel(&self, channel: u8) -> Result<(), RadioError>;
}

/// Burst-completion hook owned by the display collaborator.
pub trait DisplayPort: Send + Sync {
    fn on_burst_complete(&self);
}

/// Display hook that ignores every notification.
pub struct NullDisplay;

impl DisplayPort for NullDisplay {
    fn on_burst_complete(&self) {}
}
