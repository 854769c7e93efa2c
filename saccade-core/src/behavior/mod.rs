//! Blink and gaze behaviors
//!
//! Small single-motion sequences the scheduler composes. Each is a
//! poll-driven state machine: `start` fires the first transition on the
//! actuator bank, `poll` advances as far as the bank's busy flag allows
//! and reports completion.

pub mod blink;
pub mod gaze;

pub use blink::{BlinkPhase, BlinkPlan, BlinkSequence};
pub use gaze::{GazePlan, GazeShift};
