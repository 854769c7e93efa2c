//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in saccade-core:
//!
//! - Linear easing engine for hobby servos
//! - Fixed-size servo bank with synchronized multi-axis transitions
//! - PWM pulse-width servo output (embedded-hal `SetDutyCycle`)

#![no_std]
#![deny(unsafe_code)]

pub mod servo;
