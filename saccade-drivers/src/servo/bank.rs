//! A group of eased servos addressed by axis
//!
//! Implements the actuator bank contract: fire-and-forget transitions
//! plus a global busy flag. Synchronized moves derate each axis's speed
//! so every axis arrives when the farthest-travelling one does.

use saccade_core::motion::{Axis, AxisTarget};
use saccade_core::traits::{ActuatorBank, ServoOutput};

use super::easing::EasingServo;

/// Fixed-size bank of eased servos, indexed by [`Axis::index`]
#[derive(Debug)]
pub struct ServoBank<S: ServoOutput, const N: usize> {
    servos: [EasingServo<S>; N],
}

impl<S: ServoOutput, const N: usize> ServoBank<S, N> {
    /// Build a bank; slot order must match [`Axis::index`]
    pub fn new(servos: [EasingServo<S>; N]) -> Self {
        Self { servos }
    }

    /// Advance every servo's interpolation by `delta_ms`
    pub fn update(&mut self, delta_ms: u32) {
        for servo in self.servos.iter_mut() {
            servo.update(delta_ms);
        }
    }

    /// Access one axis's servo
    pub fn servo(&self, axis: Axis) -> Option<&EasingServo<S>> {
        self.servos.get(axis.index())
    }
}

impl<S: ServoOutput, const N: usize> ActuatorBank for ServoBank<S, N> {
    fn start_move(&mut self, target: AxisTarget, speed: u16) {
        if let Some(servo) = self.servos.get_mut(target.axis.index()) {
            servo.start_move(target.position, speed);
        }
    }

    fn start_synchronized_move(&mut self, targets: &[AxisTarget], speed: u16) {
        // The farthest travel runs at full speed and sets the shared
        // duration; the rest are derated proportionally
        let mut max_travel: i32 = 0;
        for t in targets {
            if let Some(servo) = self.servos.get(t.axis.index()) {
                let travel = (t.position as i32 - servo.position_deg() as i32).abs();
                max_travel = max_travel.max(travel);
            }
        }

        for t in targets {
            if let Some(servo) = self.servos.get_mut(t.axis.index()) {
                let travel = (t.position as i32 - servo.position_deg() as i32).abs();
                let scaled = if max_travel == 0 {
                    speed
                } else {
                    ((speed as i32 * travel / max_travel).max(1)) as u16
                };
                servo.start_move(t.position, scaled);
            }
        }
    }

    fn is_moving(&self) -> bool {
        self.servos.iter().any(|s| s.is_moving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOutput {
        last: i16,
    }

    impl ServoOutput for MockOutput {
        fn set_position(&mut self, degrees: i16) {
            self.last = degrees;
        }
    }

    fn bank() -> ServoBank<MockOutput, 3> {
        // Slot order: lid, vertical, horizontal
        ServoBank::new([
            EasingServo::new(MockOutput { last: 0 }, 140),
            EasingServo::new(MockOutput { last: 0 }, 75),
            EasingServo::new(MockOutput { last: 0 }, 90),
        ])
    }

    #[test]
    fn test_single_axis_move() {
        let mut b = bank();
        b.start_move(AxisTarget::lid(40), 1000);
        assert!(b.is_moving());

        while b.is_moving() {
            b.update(20);
        }
        assert_eq!(b.servo(Axis::Lid).unwrap().position_deg(), 40);
        assert_eq!(b.servo(Axis::Vertical).unwrap().position_deg(), 75);
    }

    #[test]
    fn test_synchronized_axes_arrive_together() {
        let mut b = bank();
        // Horizontal travels 40 degrees, vertical 20: the vertical axis
        // runs at half speed so both settle on the same update
        let targets = [AxisTarget::horizontal(50), AxisTarget::vertical(55)];
        b.start_synchronized_move(&targets, 100);

        let mut steps = 0u32;
        let mut h_done_at = None;
        let mut v_done_at = None;
        while b.is_moving() {
            b.update(20);
            steps += 1;
            if h_done_at.is_none() && !b.servo(Axis::Horizontal).unwrap().is_moving() {
                h_done_at = Some(steps);
            }
            if v_done_at.is_none() && !b.servo(Axis::Vertical).unwrap().is_moving() {
                v_done_at = Some(steps);
            }
        }

        assert_eq!(h_done_at, v_done_at);
        assert_eq!(b.servo(Axis::Horizontal).unwrap().position_deg(), 50);
        assert_eq!(b.servo(Axis::Vertical).unwrap().position_deg(), 55);
    }

    #[test]
    fn test_synchronized_zero_travel_is_idle() {
        let mut b = bank();
        let targets = [AxisTarget::horizontal(90), AxisTarget::vertical(75)];
        b.start_synchronized_move(&targets, 150);
        assert!(!b.is_moving());
    }

    #[test]
    fn test_busy_flag_covers_all_axes() {
        let mut b = bank();
        b.start_move(AxisTarget::vertical(50), 100);
        b.start_move(AxisTarget::lid(40), 2000);

        // Lid settles long before the slow vertical move; the bank
        // stays busy until every axis is done
        while b.servo(Axis::Lid).unwrap().is_moving() {
            b.update(20);
        }
        assert!(b.is_moving());
        while b.is_moving() {
            b.update(20);
        }
        assert_eq!(b.servo(Axis::Vertical).unwrap().position_deg(), 50);
    }
}
