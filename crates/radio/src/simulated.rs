//! Simulated radio for tests and demos

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::ports::RadioPort;
use crate::RadioError;

/// Air-quality model for the simulated radio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRadioConfig {
    pub packet_loss: f32,
    pub latency: Duration,
}

impl Default for SimRadioConfig {
    fn default() -> Self {
        Self {
            packet_loss: 0.0,
            latency: Duration::ZERO,
        }
    }
}

/// What the radio saw, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioEvent {
    Frame(Bytes),
    Channel(u8),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RadioStats {
    pub frames_sent: u64,
    pub frames_dropped: u64,
    pub bytes_sent: u64,
    pub channel_hops: u64,
}

/// [`RadioPort`] implementation that records every call and optionally
/// drops frames, standing in for the real injection driver.
pub struct SimulatedRadio {
    config: SimRadioConfig,
    events: Arc<Mutex<Vec<RadioEvent>>>,
    stats: Arc<Mutex<RadioStats>>,
}

impl SimulatedRadio {
    pub fn new(config: SimRadioConfig) -> Self {
        Self {
            config,
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(RadioStats::default())),
        }
    }

    /// Snapshot of everything transmitted or switched so far.
    pub async fn events(&self) -> Vec<RadioEvent> {
        self.events.lock().await.clone()
    }

    pub async fn stats(&self) -> RadioStats {
        *self.stats.lock().await
    }
}

#[async_trait]
impl RadioPort for SimulatedRadio {
    async fn transmit(&self, frame: &[u8]) -> Result<(), RadioError> {
        if !self.config.latency.is_zero() {
            sleep(self.config.latency).await;
        }

        let dropped = {
            let mut rng = rand::rng();
            rng.random::<f32>() < self.config.packet_loss
        };
        if dropped {
            let mut stats = self.stats.lock().await;
            stats.frames_dropped += 1;
            debug!("Simulated loss of {} byte frame", frame.len());
            return Err(RadioError::TransmissionFailed);
        }

        self.events
            .lock()
            .await
            .push(RadioEvent::Frame(Bytes::copy_from_slice(frame)));

        let mut stats = self.stats.lock().await;
        stats.frames_sent += 1;
        stats.bytes_sent += frame.len() as u64;
        trace!("Simulated transmission of {} bytes", frame.len());

        Ok(())
    }

    async fn set_channel(&self, channel: u8) -> Result<(), RadioError> {
        self.events.lock().await.push(RadioEvent::Channel(channel));
        self.stats.lock().await.channel_hops += 1;
        trace!("Simulated channel change to {}", channel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let radio = SimulatedRadio::new(SimRadioConfig::default());

        radio.set_channel(6).await.unwrap();
        radio.transmit(&[0x80, 0x00, 0x01]).await.unwrap();
        radio.transmit(&[0x80, 0x00, 0x02]).await.unwrap();

        let events = radio.events().await;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], RadioEvent::Channel(6));
        assert_eq!(
            events[1],
            RadioEvent::Frame(Bytes::from_static(&[0x80, 0x00, 0x01]))
        );

        let stats = radio.stats().await;
        assert_eq!(stats.frames_sent, 2);
        assert_eq!(stats.bytes_sent, 6);
        assert_eq!(stats.channel_hops, 1);
    }

    #[tokio::test]
    async fn test_certain_loss_drops_everything() {
        let radio = SimulatedRadio::new(SimRadioConfig {
            packet_loss: 1.0,
            latency: Duration::ZERO,
        });

        for _ in 0..10 {
            let result = radio.transmit(&[0u8; 51]).await;
            assert!(matches!(result, Err(RadioError::TransmissionFailed)));
        }

        assert!(radio.events().await.is_empty());
        assert_eq!(radio.stats().await.frames_dropped, 10);
    }
}
