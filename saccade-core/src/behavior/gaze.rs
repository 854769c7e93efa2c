//! Gaze shift
//!
//! Moves both gaze axes to a new target as one synchronized motion.
//! The axes start and complete together; independent arrival would make
//! the eye look cross-eyed mid-transition.

use heapless::Vec;

use crate::motion::{AxisRange, AxisTarget, MAX_AXES};
use crate::traits::ActuatorBank;

/// Parameters of one gaze shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GazePlan {
    /// Shared transition speed (deg/s)
    pub speed: u16,
    /// Raw horizontal target; clamped into the horizontal travel
    pub horizontal: i16,
    /// Raw vertical target; clamped into the vertical travel
    pub vertical: i16,
}

/// One synchronized gaze shift in flight
#[derive(Debug, Clone, Copy)]
pub struct GazeShift {
    started: bool,
}

impl GazeShift {
    /// Start a shift: clamps both targets and fires the synchronized move
    ///
    /// Out-of-range targets are silently corrected, never rejected; a
    /// slightly wrong gaze position is harmless while a stalled
    /// animation loop is not.
    pub fn start<B: ActuatorBank>(
        horizontal: AxisRange,
        vertical: AxisRange,
        plan: GazePlan,
        bank: &mut B,
    ) -> Self {
        let mut targets: Vec<AxisTarget, MAX_AXES> = Vec::new();
        let _ = targets.push(AxisTarget::horizontal(horizontal.clamp(plan.horizontal)));
        let _ = targets.push(AxisTarget::vertical(vertical.clamp(plan.vertical)));
        bank.start_synchronized_move(&targets, plan.speed);
        Self { started: true }
    }

    /// True once both axes have arrived
    pub fn poll<B: ActuatorBank>(&self, bank: &B) -> bool {
        self.started && !bank.is_moving()
    }
}
