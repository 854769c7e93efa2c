//! Axis identity, range math, and randomized target selection

pub mod axis;
pub mod range;
pub mod target;

pub use axis::{Axis, AxisTarget, MAX_AXES};
pub use range::AxisRange;
pub use target::{one_in, random_position, uniform_i16, uniform_u32, BiasedRange, FULL_RANGE_ONE_IN};
