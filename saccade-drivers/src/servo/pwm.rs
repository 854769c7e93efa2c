//! Angle-to-pulse-width servo output
//!
//! Standard hobby servos expect a 50 Hz PWM signal whose pulse width
//! encodes the angle. The PWM channel must be configured so one duty
//! count equals one microsecond (20 000-count period at 50 Hz).

use embedded_hal::pwm::SetDutyCycle;
use saccade_core::traits::ServoOutput;

/// Pulse width at 0 degrees (microseconds)
pub const DEFAULT_MIN_PULSE_US: u16 = 544;

/// Pulse width at 180 degrees (microseconds)
pub const DEFAULT_MAX_PULSE_US: u16 = 2400;

/// A positional servo on a PWM channel
pub struct PwmServo<P: SetDutyCycle> {
    channel: P,
    min_pulse_us: u16,
    max_pulse_us: u16,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Attach a channel with the standard 544-2400 µs pulse range
    pub fn new(channel: P) -> Self {
        Self::with_pulse_range(channel, DEFAULT_MIN_PULSE_US, DEFAULT_MAX_PULSE_US)
    }

    /// Attach a channel with a custom pulse range
    pub fn with_pulse_range(channel: P, min_pulse_us: u16, max_pulse_us: u16) -> Self {
        Self {
            channel,
            min_pulse_us,
            max_pulse_us,
        }
    }

    /// Pulse width for an angle, clamped to the 0-180 degree envelope
    fn pulse_us(&self, degrees: i16) -> u16 {
        let deg = degrees.clamp(0, 180) as u32;
        let range = (self.max_pulse_us - self.min_pulse_us) as u32;
        self.min_pulse_us + (deg * range / 180) as u16
    }
}

impl<P: SetDutyCycle> ServoOutput for PwmServo<P> {
    fn set_position(&mut self, degrees: i16) {
        // In-range pulses cannot exceed the configured period
        let _ = self.channel.set_duty_cycle(self.pulse_us(degrees));
    }
}
