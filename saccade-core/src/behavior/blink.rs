//! Blink sequence
//!
//! Drives the lid to its closed pose, optionally holds, then reopens.
//! A blink is a committed action: the owning scheduler makes no gaze
//! decision while one is in flight, so the lid motion is never torn by
//! a concurrent command.

use crate::motion::{AxisRange, AxisTarget};
use crate::traits::ActuatorBank;

/// Parameters of one blink, drawn fresh for every blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPlan {
    /// Lid closing speed (deg/s)
    pub close_speed: u16,
    /// Lid reopening speed (deg/s)
    pub open_speed: u16,
    /// Dwell with the lid closed (ms, 0 for a plain blink)
    pub hold_ms: u32,
    /// Position the lid reopens to; clamped into the lid travel
    pub open_target: i16,
}

/// Phase of an in-flight blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPhase {
    /// Lid travelling toward the closed pose
    Closing,
    /// Lid closed, dwelling
    Holding {
        /// Timestamp the dwell ends (ms)
        until_ms: u64,
    },
    /// Lid travelling back toward the open target
    Opening,
    /// Sequence finished
    Done,
}

/// One blink in flight
#[derive(Debug, Clone, Copy)]
pub struct BlinkSequence {
    lid: AxisRange,
    plan: BlinkPlan,
    phase: BlinkPhase,
}

impl BlinkSequence {
    /// Start a blink: fires the closing transition immediately
    ///
    /// The lid's `lower` limit is its closed pose.
    pub fn start<B: ActuatorBank>(lid: AxisRange, plan: BlinkPlan, bank: &mut B) -> Self {
        bank.start_move(AxisTarget::lid(lid.lower), plan.close_speed);
        Self {
            lid,
            plan,
            phase: BlinkPhase::Closing,
        }
    }

    /// Current phase
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Advance as far as the bank allows; true once the reopen completes
    ///
    /// With an instantly-settling bank the whole sequence runs within a
    /// single call; on hardware each phase spans several polls.
    pub fn poll<B: ActuatorBank>(&mut self, now_ms: u64, bank: &mut B) -> bool {
        loop {
            match self.phase {
                BlinkPhase::Closing => {
                    if bank.is_moving() {
                        return false;
                    }
                    if self.plan.hold_ms > 0 {
                        self.phase = BlinkPhase::Holding {
                            until_ms: now_ms + self.plan.hold_ms as u64,
                        };
                    } else {
                        self.begin_open(bank);
                    }
                }
                BlinkPhase::Holding { until_ms } => {
                    if now_ms < until_ms {
                        return false;
                    }
                    self.begin_open(bank);
                }
                BlinkPhase::Opening => {
                    if bank.is_moving() {
                        return false;
                    }
                    self.phase = BlinkPhase::Done;
                    return true;
                }
                BlinkPhase::Done => return true,
            }
        }
    }

    /// Fire the reopening transition, clamped to the lid travel
    fn begin_open<B: ActuatorBank>(&mut self, bank: &mut B) {
        let target = self.lid.clamp(self.plan.open_target);
        bank.start_move(AxisTarget::lid(target), self.plan.open_speed);
        self.phase = BlinkPhase::Opening;
    }
}
