//! Board pin map and eye geometry
//!
//! Pin assignments and servo travel limits for the stock eye mechanism.
//! Geometry is fixed at startup; nothing here is persisted.
//!
//! PWM routing:
//! - GPIO8 (lid)        -> PWM slice 4, channel A
//! - GPIO6 (vertical)   -> PWM slice 3, channel A
//! - GPIO7 (horizontal) -> PWM slice 3, channel B

use saccade_core::config::EyeConfig;
use saccade_core::motion::AxisRange;

/// PWM clock divider: 125 MHz system clock / 125 = 1 MHz count rate
pub const PWM_DIVIDER: u8 = 125;

/// PWM wrap value: 20 000 counts at 1 MHz = 50 Hz, one count per µs
pub const PWM_TOP: u16 = 19_999;

/// Time for the servos to reach their attach pose before animating (ms)
pub const SETTLE_DELAY_MS: u64 = 1000;

/// Speed of the startup pose transition (deg/s)
pub const INITIAL_POSE_SPEED: u16 = 60;

/// Eye geometry for the stock mechanism
///
/// The vertical and horizontal axes are mounted inverted, so their
/// limits are configured high-to-low. The lid's lower limit is the
/// closed pose, the upper limit the open pose.
pub fn eye_config() -> EyeConfig {
    EyeConfig {
        lid: AxisRange::new(40, 140, 90),
        vertical: AxisRange::new(90, 50, 75),
        horizontal: AxisRange::new(120, 50, 90),
    }
}
