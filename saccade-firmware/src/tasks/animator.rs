//! Animator task
//!
//! Runs the eye motion scheduler against the servo task, fed by the
//! ring-oscillator entropy source.

use defmt::*;
use embassy_rp::clocks::RoscRng;
use embassy_time::{Duration, Instant, Ticker};

use saccade_core::config::{EyeConfig, MotionTimings};
use saccade_core::scheduler::EyeScheduler;

use crate::actuator::ChannelBank;

/// Scheduler tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 20;

/// Animator task: ticks the motion scheduler forever
#[embassy_executor::task]
pub async fn animator_task(config: EyeConfig, timings: MotionTimings) {
    info!("Animator task started");

    let mut bank = ChannelBank;
    let mut scheduler = EyeScheduler::new(config, timings, RoscRng, Instant::now().as_millis());
    let mut last_phase = scheduler.phase();

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        let phase = scheduler.tick(Instant::now().as_millis(), &mut bank);
        if phase != last_phase {
            debug!("Eye phase: {:?}", phase);
            last_phase = phase;
        }
    }
}
