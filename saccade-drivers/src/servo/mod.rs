//! Servo drivers
//!
//! This module provides the interpolation side of the actuator stack:
//!
//! - Easing: constant-rate interpolation toward a target angle
//! - Bank: a group of eased servos addressed by axis
//! - PWM: angle-to-pulse-width output over embedded-hal

pub mod bank;
pub mod easing;
pub mod pwm;

pub use bank::ServoBank;
pub use easing::EasingServo;
pub use pwm::PwmServo;
