//! Servo interpolation task
//!
//! Owns the servo bank and the PWM outputs. Advances every in-flight
//! transition on a fixed cadence, the background mechanism the motion
//! logic's busy polls observe.

use defmt::*;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use saccade_core::traits::ActuatorBank;
use saccade_drivers::servo::{PwmServo, ServoBank};

use crate::channels::{MoveCommand, MOVE_CMD, SERVO_BUSY};

/// Interpolation step interval in milliseconds
pub const INTERPOLATION_INTERVAL_MS: u32 = 20;

/// Bank of the three eye servos on RP2040 PWM outputs
pub type EyeBank = ServoBank<PwmServo<PwmOutput<'static>>, 3>;

/// Servo task: drains move commands and steps the interpolation
#[embassy_executor::task]
pub async fn servo_task(mut bank: EyeBank) {
    info!("Servo task started");

    let mut ticker = Ticker::every(Duration::from_millis(INTERPOLATION_INTERVAL_MS as u64));

    loop {
        // Drain pending commands. Tasks share one executor, so nothing
        // can slip in between the drain and the flag update below.
        while let Ok(cmd) = MOVE_CMD.try_receive() {
            match cmd {
                MoveCommand::Single { target, speed } => {
                    trace!("Move: {:?} -> {} at {} deg/s", target.axis, target.position, speed);
                    bank.start_move(target, speed);
                }
                MoveCommand::Synchronized { targets, speed } => {
                    trace!("Synchronized move of {} axes at {} deg/s", targets.len(), speed);
                    bank.start_synchronized_move(&targets, speed);
                }
            }
        }

        bank.update(INTERPOLATION_INTERVAL_MS);
        SERVO_BUSY.store(bank.is_moving(), Ordering::Release);

        ticker.next().await;
    }
}
