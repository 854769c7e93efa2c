//! Saccade - Animatronic Eye Firmware
//!
//! Main firmware binary for RP2040-based animatronic eyes. Drives three
//! servos (eyelid, vertical gaze, horizontal gaze) through a lifelike
//! idle animation: randomized blinking and saccadic gaze movement.
//!
//! Named after the "saccade" - the rapid movement of the eye between
//! fixation points.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use fixed::traits::ToFixed;
use {defmt_rtt as _, panic_probe as _};

use saccade_core::config::MotionTimings;
use saccade_core::motion::AxisTarget;
use saccade_core::traits::ActuatorBank;
use saccade_drivers::servo::{EasingServo, PwmServo, ServoBank};

mod actuator;
mod board;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Saccade firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // 50 Hz servo PWM; one duty count is one microsecond of pulse width
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = board::PWM_DIVIDER.to_fixed();
    pwm_config.top = board::PWM_TOP;

    // Lid on GPIO8 (slice 4 A); gaze pair on GPIO6/7 (slice 3 A/B)
    let gaze_pwm = Pwm::new_output_ab(p.PWM_SLICE3, p.PIN_6, p.PIN_7, pwm_config.clone());
    let lid_pwm = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, pwm_config);

    let (vertical_out, horizontal_out) = gaze_pwm.split();
    let (lid_out, _) = lid_pwm.split();

    // Attach each axis at its rest pose: lid closed, gaze centred.
    // Slot order must match Axis::index.
    let config = board::eye_config();
    let mut bank = ServoBank::new([
        EasingServo::new(PwmServo::new(lid_out.unwrap()), config.lid.lower),
        EasingServo::new(PwmServo::new(vertical_out.unwrap()), config.vertical.centre),
        EasingServo::new(PwmServo::new(horizontal_out.unwrap()), config.horizontal.centre),
    ]);
    info!("Servos attached");

    // Let the servos physically reach the attach pose before animating
    Timer::after_millis(board::SETTLE_DELAY_MS).await;

    // Initial pose: ease the lid open onto the centred gaze
    bank.start_move(
        AxisTarget::lid(config.lid.upper),
        board::INITIAL_POSE_SPEED,
    );
    while bank.is_moving() {
        bank.update(tasks::servo::INTERPOLATION_INTERVAL_MS);
        Timer::after_millis(tasks::servo::INTERPOLATION_INTERVAL_MS as u64).await;
    }
    info!("Initial pose reached");

    // Hand the bank to the interpolation task and start animating
    spawner.spawn(tasks::servo::servo_task(bank)).unwrap();
    spawner
        .spawn(tasks::animator::animator_task(config, MotionTimings::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
