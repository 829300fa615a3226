//! beacon broadcast layer for Mirage

use std::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod framing;
pub mod ports;
pub mod scheduler;
pub mod simulated;
pub mod timestamp;

pub use framing::{build_beacon, BeaconFrame};
pub use ports::{DisplayPort, NullDisplay, RadioPort};
pub use scheduler::BeaconScheduler;
pub use simulated::SimulatedRadio;

#[derive(Debug, Error)]
pub enum RadioError {
    #[error("Radio transmission failed")]
    TransmissionFailed,

    #[error("Radio rejected channel change")]
    ChannelChangeFailed,
}

/// Target gap between bursts: the standard 100 time-unit beacon interval.
pub const BEACON_INTERVAL: Duration = Duration::from_micros(102_400);

/// Gap the radio driver needs between consecutive raw injections.
pub const PACING_DELAY: Duration = Duration::from_millis(1);

/// Bursts between channel hops.
pub const ROTATION_TICKS: u32 = 11;

/// Timing knobs for the transmission scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    pub beacon_interval: Duration,
    pub pacing_delay: Duration,
    pub rotation_ticks: u32,
    /// Refresh the timestamp field each burst instead of transmitting the
    /// fixed template value.
    pub live_timestamps: bool,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            beacon_interval: BEACON_INTERVAL,
            pacing_delay: PACING_DELAY,
            rotation_ticks: ROTATION_TICKS,
            live_timestamps: false,
        }
    }
}
