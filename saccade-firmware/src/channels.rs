//! Inter-task communication
//!
//! The animator pushes move commands into a channel the servo task
//! drains; the servo task publishes its busy state through an atomic
//! flag the animator's wait loops poll.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;
use portable_atomic::AtomicBool;

use saccade_core::motion::{AxisTarget, MAX_AXES};

/// Channel capacity for move commands
const MOVE_CHANNEL_SIZE: usize = 4;

/// A transition request for the servo task
#[derive(Debug, Clone)]
pub enum MoveCommand {
    /// Single-axis interpolated transition
    Single {
        /// Axis and position
        target: AxisTarget,
        /// Transition speed (deg/s)
        speed: u16,
    },
    /// Multi-axis transition; all axes start and complete together
    Synchronized {
        /// Axes and positions
        targets: Vec<AxisTarget, MAX_AXES>,
        /// Speed of the farthest-travelling axis (deg/s)
        speed: u16,
    },
}

/// Move commands from the animator to the servo task
pub static MOVE_CMD: Channel<CriticalSectionRawMutex, MoveCommand, MOVE_CHANNEL_SIZE> =
    Channel::new();

/// Global busy flag: true while any servo transition is in progress
pub static SERVO_BUSY: AtomicBool = AtomicBool::new(false);
