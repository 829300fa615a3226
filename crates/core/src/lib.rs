//! access point roster and channel plan data for Mirage

use thiserror::Error;

pub mod ap;
pub mod channel;
pub mod registry;

pub use ap::{AccessPoint, Bssid, MAX_SSID_LEN};
pub use channel::ChannelPlan;
pub use registry::AccessPointRegistry;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("SSID of {len} bytes exceeds the 32-byte element limit")]
    SsidTooLong { len: usize },

    #[error("Channel plan is empty")]
    EmptyChannelPlan,

    #[error("Channel {channel} outside the 2.4 GHz plan range")]
    ChannelOutOfRange { channel: u8 },
}
