//! Eye motion scheduler
//!
//! Decides, tick by tick, when to blink and when to shift the gaze, and
//! dispatches to the behavior sequences. Owns all timing state.

pub mod eye;

pub use eye::{EyePhase, EyeScheduler, MotionState, COUPLED_GAZE_ONE_IN, QUICK_BLINK_ONE_IN};
