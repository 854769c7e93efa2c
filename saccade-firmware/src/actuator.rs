//! Actuator bank adapter for the animator task
//!
//! Forwards transition starts to the servo task over the move channel
//! and answers the busy poll from the shared flag. A queued-but-not-yet
//! drained command counts as busy so a freshly issued move is never
//! mistaken for a completed one.

use portable_atomic::Ordering;

use heapless::Vec;
use saccade_core::motion::AxisTarget;
use saccade_core::traits::ActuatorBank;

use crate::channels::{MoveCommand, MOVE_CMD, SERVO_BUSY};

/// The servo bank as seen from the animator task
pub struct ChannelBank;

impl ActuatorBank for ChannelBank {
    fn start_move(&mut self, target: AxisTarget, speed: u16) {
        let _ = MOVE_CMD.try_send(MoveCommand::Single { target, speed });
    }

    fn start_synchronized_move(&mut self, targets: &[AxisTarget], speed: u16) {
        let mut list = Vec::new();
        let _ = list.extend_from_slice(targets);
        let _ = MOVE_CMD.try_send(MoveCommand::Synchronized {
            targets: list,
            speed,
        });
    }

    fn is_moving(&self) -> bool {
        SERVO_BUSY.load(Ordering::Acquire) || !MOVE_CMD.is_empty()
    }
}
