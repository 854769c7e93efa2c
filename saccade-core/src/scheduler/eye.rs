//! The idle animation loop
//!
//! A flat polling scheduler with two independent timers: one for
//! blinking, one for gaze stillness. Blinking and gaze movement are
//! independent biological rhythms; they couple only probabilistically at
//! blink time, which reads far more naturally than either fully
//! independent or fully locked timers.
//!
//! `tick` never blocks: it advances whatever motion is in flight as far
//! as the actuator's busy flag allows and returns. Called from a
//! real-time loop it spreads a blink over many ~20 ms polls; called with
//! an instantly-settling bank (as in tests) a whole blink completes in
//! one call.

use rand_core::RngCore;

use crate::behavior::{BlinkPlan, BlinkSequence, GazePlan, GazeShift};
use crate::config::{EyeConfig, MotionTimings, MsWindow, SpeedWindow};
use crate::motion::{one_in, random_position, uniform_u32, BiasedRange};
use crate::traits::ActuatorBank;

/// One blink in this many is followed by a gaze shift while the eye is
/// already in motion
pub const COUPLED_GAZE_ONE_IN: u32 = 2;

/// One blink interval in this many is drawn from the quick
/// "double-blink" window instead of the normal one
pub const QUICK_BLINK_ONE_IN: u32 = 6;

/// Timing state owned exclusively by the scheduler
///
/// Tracks when each behavior last completed and how long to wait for the
/// next one. Lives for the process lifetime; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// When the last blink finished (ms)
    pub last_blink_ms: u64,
    /// Wait before the next blink (ms)
    pub blink_interval_ms: u32,
    /// When the gaze last came to rest (ms)
    pub last_shift_ms: u64,
    /// Wait before the next idle gaze shift (ms)
    pub stillness_interval_ms: u32,
}

/// What the scheduler is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EyePhase {
    /// Idle, both deadlines armed
    Watching,
    /// A blink is in flight
    Blinking,
    /// A gaze shift is in flight
    Shifting,
}

#[derive(Debug, Clone, Copy)]
enum Activity {
    Watching,
    Blinking {
        seq: BlinkSequence,
        follow_gaze: bool,
    },
    Shifting {
        shift: GazeShift,
        after_blink: bool,
    },
}

/// The eye motion scheduler
///
/// Generic over the entropy source so the firmware can feed in hardware
/// noise while tests run a seeded generator.
#[derive(Debug)]
pub struct EyeScheduler<R: RngCore> {
    config: EyeConfig,
    timings: MotionTimings,
    state: MotionState,
    activity: Activity,
    rng: R,
}

impl<R: RngCore> EyeScheduler<R> {
    /// Create a scheduler; `now_ms` anchors both timers
    pub fn new(config: EyeConfig, timings: MotionTimings, mut rng: R, now_ms: u64) -> Self {
        let blink_interval_ms = draw_ms(&mut rng, timings.blink_interval);
        let stillness_interval_ms = draw_ms(&mut rng, timings.stillness_interval);
        Self {
            config,
            timings,
            state: MotionState {
                last_blink_ms: now_ms,
                blink_interval_ms,
                last_shift_ms: now_ms,
                stillness_interval_ms,
            },
            activity: Activity::Watching,
            rng,
        }
    }

    /// Current timing state
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> EyePhase {
        match self.activity {
            Activity::Watching => EyePhase::Watching,
            Activity::Blinking { .. } => EyePhase::Blinking,
            Activity::Shifting { .. } => EyePhase::Shifting,
        }
    }

    /// Advance the loop by one tick
    ///
    /// Evaluates deadlines, starts due behaviors, and drives any
    /// in-flight motion as far as the bank allows. A blink always runs
    /// to completion before a gaze shift decided in the same tick
    /// begins; while a blink is in flight no gaze deadline is evaluated
    /// at all.
    ///
    /// Returns the phase the scheduler is left in.
    pub fn tick<B: ActuatorBank>(&mut self, now_ms: u64, bank: &mut B) -> EyePhase {
        loop {
            match self.activity {
                Activity::Watching => {
                    if now_ms.saturating_sub(self.state.last_blink_ms)
                        > self.state.blink_interval_ms as u64
                    {
                        self.start_blink(bank);
                        continue;
                    }
                    if now_ms.saturating_sub(self.state.last_shift_ms)
                        > self.state.stillness_interval_ms as u64
                    {
                        let shift = self.start_shift(
                            bank,
                            self.timings.idle_gaze_bias_pct,
                            self.timings.idle_gaze_speed,
                        );
                        self.activity = Activity::Shifting {
                            shift,
                            after_blink: false,
                        };
                        continue;
                    }
                    return EyePhase::Watching;
                }
                Activity::Blinking {
                    mut seq,
                    follow_gaze,
                } => {
                    if !seq.poll(now_ms, bank) {
                        self.activity = Activity::Blinking { seq, follow_gaze };
                        return EyePhase::Blinking;
                    }
                    if follow_gaze {
                        let shift = self.start_shift(
                            bank,
                            self.timings.coupled_gaze_bias_pct,
                            self.timings.coupled_gaze_speed,
                        );
                        self.activity = Activity::Shifting {
                            shift,
                            after_blink: true,
                        };
                    } else {
                        self.finish_blink(now_ms);
                        self.activity = Activity::Watching;
                    }
                }
                Activity::Shifting { shift, after_blink } => {
                    if !shift.poll(bank) {
                        return EyePhase::Shifting;
                    }
                    self.finish_shift(now_ms);
                    if after_blink {
                        self.finish_blink(now_ms);
                    }
                    self.activity = Activity::Watching;
                }
            }
        }
    }

    /// Begin a blink with freshly drawn speeds; decide up front whether
    /// a gaze shift rides along after the reopen
    fn start_blink<B: ActuatorBank>(&mut self, bank: &mut B) {
        let plan = BlinkPlan {
            close_speed: draw_speed(&mut self.rng, self.timings.blink_close_speed),
            open_speed: draw_speed(&mut self.rng, self.timings.blink_open_speed),
            hold_ms: self.timings.blink_hold_ms,
            open_target: self.config.lid.upper,
        };
        let follow_gaze = one_in(&mut self.rng, COUPLED_GAZE_ONE_IN);
        let seq = BlinkSequence::start(self.config.lid, plan, bank);
        self.activity = Activity::Blinking { seq, follow_gaze };
    }

    /// Begin a synchronized gaze shift to freshly drawn targets
    fn start_shift<B: ActuatorBank>(
        &mut self,
        bank: &mut B,
        bias_pct: u8,
        speed: SpeedWindow,
    ) -> GazeShift {
        let plan = GazePlan {
            speed: draw_speed(&mut self.rng, speed),
            horizontal: random_position(
                &mut self.rng,
                &BiasedRange::new(self.config.horizontal, bias_pct),
            ),
            vertical: random_position(
                &mut self.rng,
                &BiasedRange::new(self.config.vertical, bias_pct),
            ),
        };
        GazeShift::start(self.config.horizontal, self.config.vertical, plan, bank)
    }

    /// Rearm the blink timer, occasionally with a quick follow-up
    fn finish_blink(&mut self, now_ms: u64) {
        self.state.blink_interval_ms = if one_in(&mut self.rng, QUICK_BLINK_ONE_IN) {
            draw_ms(&mut self.rng, self.timings.quick_blink_interval)
        } else {
            draw_ms(&mut self.rng, self.timings.blink_interval)
        };
        self.state.last_blink_ms = now_ms;
    }

    /// Rearm the stillness timer
    fn finish_shift(&mut self, now_ms: u64) {
        self.state.stillness_interval_ms = draw_ms(&mut self.rng, self.timings.stillness_interval);
        self.state.last_shift_ms = now_ms;
    }
}

fn draw_ms<R: RngCore>(rng: &mut R, window: MsWindow) -> u32 {
    uniform_u32(rng, window.min, window.max)
}

fn draw_speed<R: RngCore>(rng: &mut R, window: SpeedWindow) -> u16 {
    uniform_u32(rng, window.min as u32, window.max as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Axis, AxisTarget, MAX_AXES};
    use heapless::Vec;
    use rand_core::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Move(Axis, i16, u16),
        Sync(Vec<AxisTarget, MAX_AXES>, u16),
    }

    /// Records every start; settles after `latency` calls to `settle`
    struct ScriptedBank {
        latency: u32,
        busy: u32,
        ops: Vec<Op, 64>,
    }

    impl ScriptedBank {
        fn new(latency: u32) -> Self {
            Self {
                latency,
                busy: 0,
                ops: Vec::new(),
            }
        }

        fn settle(&mut self) {
            self.busy = self.busy.saturating_sub(1);
        }
    }

    impl ActuatorBank for ScriptedBank {
        fn start_move(&mut self, target: AxisTarget, speed: u16) {
            let _ = self
                .ops
                .push(Op::Move(target.axis, target.position, speed));
            self.busy = self.latency;
        }

        fn start_synchronized_move(&mut self, targets: &[AxisTarget], speed: u16) {
            let mut list = Vec::new();
            let _ = list.extend_from_slice(targets);
            let _ = self.ops.push(Op::Sync(list, speed));
            self.busy = self.latency;
        }

        fn is_moving(&self) -> bool {
            self.busy > 0
        }
    }

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(0x5eed_cafe)
    }

    fn is_lid_move(op: &Op) -> bool {
        matches!(op, Op::Move(Axis::Lid, _, _))
    }

    /// Timings that force a blink every tick and never an idle shift
    fn blink_every_tick() -> MotionTimings {
        MotionTimings {
            blink_interval: MsWindow::new(0, 0),
            quick_blink_interval: MsWindow::new(0, 0),
            stillness_interval: MsWindow::new(1_000_000, 1_000_000),
            ..MotionTimings::default()
        }
    }

    #[test]
    fn test_watching_until_first_deadline() {
        let mut bank = ScriptedBank::new(0);
        let mut sched = EyeScheduler::new(
            EyeConfig::default(),
            MotionTimings::default(),
            rng(),
            0,
        );

        // Nothing is due immediately after start
        assert_eq!(sched.tick(0, &mut bank), EyePhase::Watching);
        assert!(bank.ops.is_empty());
    }

    #[test]
    fn test_one_blink_per_tick_when_interval_is_zero() {
        let mut bank = ScriptedBank::new(0);
        let mut sched = EyeScheduler::new(EyeConfig::default(), blink_every_tick(), rng(), 0);

        let mut now = 0u64;
        for _ in 0..50 {
            now += 20;
            bank.ops.clear();
            sched.tick(now, &mut bank);

            // Exactly one close + one reopen per tick
            let lid_moves = bank.ops.iter().filter(|op| is_lid_move(op)).count();
            assert_eq!(lid_moves, 2);

            // The stillness path never fired: any synchronized move is
            // blink-coupled, issued right after the lid reopen
            for (i, op) in bank.ops.iter().enumerate() {
                if matches!(op, Op::Sync(_, _)) {
                    assert!(is_lid_move(&bank.ops[i - 1]));
                }
            }
        }
    }

    #[test]
    fn test_blink_is_atomic() {
        let mut bank = ScriptedBank::new(3);
        // Both deadlines due at once; blink wins and the gaze waits
        let timings = MotionTimings {
            blink_interval: MsWindow::new(0, 0),
            quick_blink_interval: MsWindow::new(0, 0),
            stillness_interval: MsWindow::new(0, 0),
            ..MotionTimings::default()
        };
        let mut sched = EyeScheduler::new(EyeConfig::default(), timings, rng(), 0);

        let mut now = 0u64;
        // Run until the first blink and its follow-up settle
        while now < 600 {
            now += 20;
            sched.tick(now, &mut bank);
            bank.settle();
        }

        // The close and reopen commands bracket no gaze command
        let close = bank.ops.iter().position(is_lid_move).unwrap();
        let open = close
            + 1
            + bank.ops[close + 1..].iter().position(is_lid_move).unwrap();
        for op in &bank.ops[close..open] {
            assert!(!matches!(op, Op::Sync(_, _)), "gaze issued mid-blink");
        }
        assert_eq!(close, 0, "blink must preempt the pending gaze");
    }

    #[test]
    fn test_idle_shift_fires_after_stillness() {
        let mut bank = ScriptedBank::new(0);
        let timings = MotionTimings {
            blink_interval: MsWindow::new(1_000_000, 1_000_000),
            stillness_interval: MsWindow::new(100, 100),
            ..MotionTimings::default()
        };
        let mut sched = EyeScheduler::new(EyeConfig::default(), timings, rng(), 0);

        assert_eq!(sched.tick(100, &mut bank), EyePhase::Watching);
        sched.tick(120, &mut bank);

        // Exactly one synchronized gaze move, both axes present
        assert_eq!(bank.ops.len(), 1);
        match &bank.ops[0] {
            Op::Sync(targets, speed) => {
                assert_eq!(targets.len(), 2);
                assert!(
                    (timings.idle_gaze_speed.min..=timings.idle_gaze_speed.max)
                        .contains(speed)
                );
            }
            other => panic!("expected synchronized move, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_shift_targets_stay_in_travel() {
        let mut bank = ScriptedBank::new(0);
        let config = EyeConfig::default();
        let timings = MotionTimings {
            blink_interval: MsWindow::new(1_000_000, 1_000_000),
            stillness_interval: MsWindow::new(0, 0),
            ..MotionTimings::default()
        };
        let mut sched = EyeScheduler::new(config, timings, rng(), 0);

        let mut now = 0u64;
        for _ in 0..200 {
            now += 20;
            bank.ops.clear();
            sched.tick(now, &mut bank);
            for op in &bank.ops {
                if let Op::Sync(targets, _) = op {
                    for t in targets.iter() {
                        assert!(config.range(t.axis).contains(t.position));
                    }
                }
            }
        }
    }

    #[test]
    fn test_timers_rearm_after_blink() {
        let mut bank = ScriptedBank::new(0);
        let mut sched = EyeScheduler::new(
            EyeConfig::default(),
            MotionTimings::default(),
            rng(),
            0,
        );
        let first_interval = sched.state().blink_interval_ms;
        assert!((600..=2000).contains(&first_interval));

        // Step past the first blink deadline
        let now = first_interval as u64 + 1;
        sched.tick(now, &mut bank);
        assert_eq!(sched.phase(), EyePhase::Watching);

        // Timer anchored at completion time, interval redrawn
        assert_eq!(sched.state().last_blink_ms, now);
        let next = sched.state().blink_interval_ms;
        assert!((300..=2000).contains(&next));
    }

    #[test]
    fn test_quick_blink_share() {
        // Over many blinks, roughly one interval in six comes from the
        // quick window
        let mut bank = ScriptedBank::new(0);
        let mut sched = EyeScheduler::new(
            EyeConfig::default(),
            MotionTimings::default(),
            rng(),
            0,
        );

        let mut quick = 0u32;
        let total = 600u32;
        let mut now = 0u64;
        for _ in 0..total {
            now += sched.state().blink_interval_ms as u64 + 1;
            // Settle any in-flight coupled shift first
            sched.tick(now, &mut bank);
            if sched.state().blink_interval_ms <= 400 {
                quick += 1;
            }
            bank.ops.clear();
        }
        let share = quick as f64 / total as f64;
        assert!(share > 0.08 && share < 0.30, "quick share {}", share);
    }
}
