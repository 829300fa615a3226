//! Simulation scenarios for driving the beacon broadcaster

use std::time::Duration;

use indicatif::ProgressBar;
use log::info;
use rand::Rng;

use mirage_core::{AccessPointRegistry, ChannelPlan};
use mirage_radio::framing::{self, TEMPLATE_TIMESTAMP};
use mirage_radio::simulated::SimRadioConfig;
use mirage_radio::{BeaconConfig, BeaconScheduler, DisplayPort, SimulatedRadio};

/// How far the synthetic clock advances per poll; bursts land every
/// beacon interval regardless, jitter only delays them.
const POLL_STEP: Duration = Duration::from_millis(20);

struct ProgressDisplay {
    bar: ProgressBar,
}

impl DisplayPort for ProgressDisplay {
    fn on_burst_complete(&self) {
        self.bar.inc(1);
    }
}

/// Runs the scheduler against the simulated radio for `bursts` bursts,
/// driving it with a jittered synthetic clock so a long broadcast session
/// compresses into moments of wall time.
pub async fn broadcast_demo(config: SimRadioConfig, bursts: u64) {
    let roster = AccessPointRegistry::builtin();
    let plan = ChannelPlan::full_sweep();

    println!(
        "Roster: {} synthetic APs, {} channels in the plan",
        roster.len(),
        plan.len()
    );

    if let Some(ap) = roster.get(0) {
        let frame = framing::build_beacon(ap, plan.get(0), TEMPLATE_TIMESTAMP);
        println!("Sample frame for {}:", ap.bssid());
        println!("  {} bytes: {}", frame.len(), hex::encode(frame.as_bytes()));
    }
    println!();

    let radio = SimulatedRadio::new(config);
    let beacon_config = BeaconConfig {
        // keep the demo quick; the real driver needs the full millisecond
        pacing_delay: Duration::from_micros(50),
        ..Default::default()
    };
    let mut scheduler = BeaconScheduler::new(beacon_config, roster, plan);

    let display = ProgressDisplay {
        bar: ProgressBar::new(bursts),
    };
    info!("Driving {} bursts against the simulated radio", bursts);

    let mut now = Duration::ZERO;
    while scheduler.stats().bursts_completed < bursts {
        let jitter_us = rand::rng().random_range(0..2_000);
        now += POLL_STEP + Duration::from_micros(jitter_us);
        scheduler.poll(now, &radio, &display).await;
    }
    display.bar.finish_and_clear();

    let stats = scheduler.stats();
    let radio_stats = radio.stats().await;

    println!("Simulated airtime: {:?}", now);
    println!("  Bursts completed: {}", stats.bursts_completed);
    println!("  Frames on air: {}", radio_stats.frames_sent);
    println!("  Frames lost: {}", radio_stats.frames_dropped);
    println!("  Bytes on air: {}", radio_stats.bytes_sent);
    println!("  Channel hops: {}", radio_stats.channel_hops);
    println!(
        "  Delivery rate: {:.1}%",
        if radio_stats.frames_sent + radio_stats.frames_dropped > 0 {
            radio_stats.frames_sent as f64
                / (radio_stats.frames_sent + radio_stats.frames_dropped) as f64
                * 100.0
        } else {
            0.0
        }
    );
}
