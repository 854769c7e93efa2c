//! Configuration type definitions
//!
//! Axis geometry and motion timing for one eye. Defaults carry the
//! hand-tuned values from the original eye mechanism; every interval and
//! speed window is tunable configuration, not contract.

use crate::motion::{Axis, AxisRange};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval of milliseconds to draw a duration from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MsWindow {
    /// Minimum duration (ms)
    pub min: u32,
    /// Maximum duration (ms), inclusive
    pub max: u32,
}

impl MsWindow {
    /// Create a window; `min` must not exceed `max`
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// A closed interval of transition speeds (degrees per second)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedWindow {
    /// Minimum speed (deg/s)
    pub min: u16,
    /// Maximum speed (deg/s), inclusive
    pub max: u16,
}

impl SpeedWindow {
    /// Create a window; `min` must not exceed `max`
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }
}

/// Axis geometry for one eye
///
/// Read-only shared configuration: set once at startup, never mutated.
/// For the lid, `lower` is the closed pose and `upper` the open pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EyeConfig {
    /// Eyelid travel
    pub lid: AxisRange,
    /// Vertical gaze travel
    pub vertical: AxisRange,
    /// Horizontal gaze travel
    pub horizontal: AxisRange,
}

impl EyeConfig {
    /// Range for a given axis
    pub fn range(&self, axis: Axis) -> &AxisRange {
        match axis {
            Axis::Lid => &self.lid,
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    /// Check all three ranges for validity
    pub fn is_valid(&self) -> bool {
        self.lid.is_valid() && self.vertical.is_valid() && self.horizontal.is_valid()
    }
}

impl Default for EyeConfig {
    fn default() -> Self {
        // Stock mechanism geometry; vertical and horizontal axes are
        // mounted inverted, so their limits are configured high-to-low
        Self {
            lid: AxisRange::new(40, 140, 90),
            vertical: AxisRange::new(90, 50, 75),
            horizontal: AxisRange::new(120, 50, 90),
        }
    }
}

/// Timing and speed windows for the idle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionTimings {
    /// Normal wait between blinks
    pub blink_interval: MsWindow,
    /// Wait before the occasional quick follow-up blink
    pub quick_blink_interval: MsWindow,
    /// Wait before an idle gaze shift
    pub stillness_interval: MsWindow,
    /// Lid closing speed
    pub blink_close_speed: SpeedWindow,
    /// Lid reopening speed
    pub blink_open_speed: SpeedWindow,
    /// Gaze speed when a shift rides along with a blink
    pub coupled_gaze_speed: SpeedWindow,
    /// Gaze speed for idle shifts (slower, reads as drifting attention)
    pub idle_gaze_speed: SpeedWindow,
    /// How long the lid stays closed mid-blink (ms)
    pub blink_hold_ms: u32,
    /// Centre bias of blink-coupled gaze targets (percent)
    pub coupled_gaze_bias_pct: u8,
    /// Centre bias of idle gaze targets (percent)
    pub idle_gaze_bias_pct: u8,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            blink_interval: MsWindow::new(600, 2000),
            quick_blink_interval: MsWindow::new(300, 400),
            stillness_interval: MsWindow::new(400, 1200),
            blink_close_speed: SpeedWindow::new(800, 1000),
            blink_open_speed: SpeedWindow::new(900, 1000),
            coupled_gaze_speed: SpeedWindow::new(400, 600),
            idle_gaze_speed: SpeedWindow::new(100, 200),
            blink_hold_ms: 0,
            coupled_gaze_bias_pct: 40,
            idle_gaze_bias_pct: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_valid() {
        let config = EyeConfig::default();
        assert!(config.is_valid());
    }

    #[test]
    fn test_range_lookup() {
        let config = EyeConfig::default();
        assert_eq!(config.range(Axis::Lid), &config.lid);
        assert_eq!(config.range(Axis::Vertical), &config.vertical);
        assert_eq!(config.range(Axis::Horizontal), &config.horizontal);
    }

    #[test]
    fn test_default_windows_ordered() {
        let t = MotionTimings::default();
        assert!(t.blink_interval.min <= t.blink_interval.max);
        assert!(t.quick_blink_interval.min <= t.quick_blink_interval.max);
        assert!(t.stillness_interval.min <= t.stillness_interval.max);
        assert!(t.blink_close_speed.min <= t.blink_close_speed.max);
        assert!(t.idle_gaze_speed.min <= t.idle_gaze_speed.max);
    }
}
