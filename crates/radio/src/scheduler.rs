//! Transmission scheduler: paces beacon bursts and channel rotation

use tokio::time::{sleep, Duration, Instant};
use log::{debug, info, trace};

use mirage_core::{AccessPointRegistry, ChannelPlan};

use crate::framing::{self, TEMPLATE_TIMESTAMP};
use crate::ports::{DisplayPort, RadioPort};
use crate::timestamp;
use crate::BeaconConfig;

/// Gap between scheduler polls when driven by [`BeaconScheduler::run`].
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Drives beacon bursts and channel rotation against caller-supplied time.
///
/// Single cooperative control flow: [`BeaconScheduler::poll`] either returns
/// immediately (not yet due) or fires one full burst. The only blocking
/// point is the inter-frame pacing sleep the radio driver requires.
pub struct BeaconScheduler {
    config: BeaconConfig,
    roster: AccessPointRegistry,
    plan: ChannelPlan,
    state: SchedulerState,
    stats: SchedulerStats,
}

#[derive(Debug)]
struct SchedulerState {
    last_burst: Duration,
    channel_index: usize,
    ticks_since_rotation: u32,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SchedulerStats {
    pub bursts_completed: u64,
    pub frames_transmitted: u64,
    pub channel_hops: u64,
}

impl BeaconScheduler {
    pub fn new(config: BeaconConfig, roster: AccessPointRegistry, plan: ChannelPlan) -> Self {
        Self {
            config,
            roster,
            plan,
            state: SchedulerState {
                last_burst: Duration::ZERO,
                channel_index: 0,
                ticks_since_rotation: 0,
            },
            stats: SchedulerStats::default(),
        }
    }

    /// Channel frames are currently stamped with.
    pub fn current_channel(&self) -> u8 {
        self.plan.get(self.state.channel_index)
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// One reactive step. `now` is a monotonic elapsed-time reading of the
    /// device clock; polling before the beacon interval has passed is free
    /// of side effects. Returns true when a burst was fired.
    pub async fn poll<R, D>(&mut self, now: Duration, radio: &R, display: &D) -> bool
    where
        R: RadioPort + ?Sized,
        D: DisplayPort + ?Sized,
    {
        if now.saturating_sub(self.state.last_burst) < self.config.beacon_interval {
            return false;
        }

        self.state.ticks_since_rotation += 1;
        if self.state.ticks_since_rotation >= self.config.rotation_ticks {
            self.state.ticks_since_rotation = 0;
            self.state.channel_index = (self.state.channel_index + 1) % self.plan.len();
            let channel = self.plan.get(self.state.channel_index);
            debug!("Hopping to channel {}", channel);
            // best effort: the radio owns the outcome
            if let Err(e) = radio.set_channel(channel).await {
                debug!("Channel change dropped by radio: {}", e);
            }
            self.stats.channel_hops += 1;
        }

        let channel = self.plan.get(self.state.channel_index);
        for (i, ap) in self.roster.iter().enumerate() {
            if i > 0 {
                sleep(self.config.pacing_delay).await;
            }
            let field = if self.config.live_timestamps {
                timestamp::encode_uptime(now, ap.epoch_offset_ms())
            } else {
                TEMPLATE_TIMESTAMP
            };
            let frame = framing::build_beacon(ap, channel, field);
            trace!(
                "Transmitting {} byte beacon for {} on channel {}",
                frame.len(),
                ap.bssid(),
                channel
            );
            match radio.transmit(frame.as_bytes()).await {
                Ok(()) => self.stats.frames_transmitted += 1,
                Err(e) => debug!("Transmit dropped by radio: {}", e),
            }
        }

        self.state.last_burst = now;
        self.stats.bursts_completed += 1;
        display.on_burst_complete();
        true
    }

    /// Poll loop against the tokio clock; runs until the process ends.
    pub async fn run<R, D>(&mut self, radio: &R, display: &D)
    where
        R: RadioPort + ?Sized,
        D: DisplayPort + ?Sized,
    {
        let started = Instant::now();
        info!(
            "Beacon scheduler running: {} APs, {} channel plan entries",
            self.roster.len(),
            self.plan.len()
        );

        loop {
            self.poll(started.elapsed(), radio, display).await;
            sleep(POLL_INTERVAL).await;
        }
    }
}
