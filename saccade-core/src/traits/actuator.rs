//! Actuator bank trait
//!
//! The bank executes smooth interpolated transitions in the background
//! (a periodic interpolation task on real hardware) while the motion
//! logic polls a single busy flag. Interpolation internals are opaque to
//! the caller; only start and completion semantics matter.

use crate::motion::AxisTarget;

/// A group of position actuators addressed by [`Axis`](crate::motion::Axis)
///
/// Both start methods are fire-and-forget: they begin a transition and
/// return immediately. A started transition always runs to completion;
/// there is no cancellation.
pub trait ActuatorBank {
    /// Begin an interpolated transition on one axis
    ///
    /// `speed` is in degrees per second.
    fn start_move(&mut self, target: AxisTarget, speed: u16);

    /// Begin transitions on several axes that start and complete together
    ///
    /// Per-axis rates are derated so every listed axis arrives at the
    /// moment the farthest-travelling one does, keeping multi-axis
    /// motion coherent instead of letting axes finish independently.
    fn start_synchronized_move(&mut self, targets: &[AxisTarget], speed: u16);

    /// Global busy flag: true while any transition is in progress
    fn is_moving(&self) -> bool;
}
