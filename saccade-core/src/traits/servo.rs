//! Raw servo output trait
//!
//! The seam between the interpolation engine and the PWM hardware.
//! Implementations translate a commanded angle into a pulse width; the
//! servo itself is open-loop and assumed to track the command.

/// A single positional servo output
pub trait ServoOutput {
    /// Command the servo to an absolute angle in degrees
    fn set_position(&mut self, degrees: i16);
}
