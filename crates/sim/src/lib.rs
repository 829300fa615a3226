//! simulation tools for Mirage

pub mod scenarios;

use std::time::Duration;
use mirage_radio::simulated::SimRadioConfig;

pub struct AirPresets;

impl AirPresets {
    pub fn clean_air() -> SimRadioConfig {
        SimRadioConfig {
            packet_loss: 0.0,
            latency: Duration::ZERO,
        }
    }

    pub fn busy_air() -> SimRadioConfig {
        SimRadioConfig {
            packet_loss: 0.10,
            latency: Duration::from_micros(200),
        }
    }

    pub fn hostile_air() -> SimRadioConfig {
        SimRadioConfig {
            packet_loss: 0.40,
            latency: Duration::from_micros(500),
        }
    }
}
