//! Keyframe-driven progress animation for the speed gauge.
//!
//! The gauge needle follows a fixed, hand-tuned curve: a fast sweep to ~72%,
//! then a series of small steps whose bezier easings overshoot and dip, which
//! reads as a jittering needle. The curve is the same for every run.
//!
//! # Time Model
//!
//! The animator never reads a clock. Callers pass a monotonic timestamp in
//! milliseconds ([`Millis`]) to [`ProgressAnimator::start`] and every sample,
//! and the value is a pure function of the elapsed time since the last start.
//! This keeps the crate `no_std` and makes the curve trivially testable.
//!
//! # Keyframe Semantics
//!
//! The easing stored on a [`Keyframe`] shapes the segment that starts at that
//! keyframe and ends at the next one (or at the curve's end). Within a
//! segment the value is `lerp(from, to, easing(fraction))`.

use crate::easing::Easing;

/// Monotonic timestamp or duration in milliseconds.
pub type Millis = u32;

/// One control point of a keyframe curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Offset from the start of the curve.
    pub at_ms: Millis,
    /// Progress value at `at_ms`.
    pub value: f32,
    /// Easing of the segment leaving this keyframe.
    pub easing: Easing,
}

impl Keyframe {
    pub const fn new(at_ms: Millis, value: f32, easing: Easing) -> Self { Self { at_ms, value, easing } }
}

/// A complete animation path: keyframes, total duration and end value.
#[derive(Clone, Copy, Debug)]
pub struct KeyframeCurve {
    frames: &'static [Keyframe],
    duration_ms: Millis,
    final_value: f32,
}

impl KeyframeCurve {
    /// Build a curve.
    ///
    /// `frames` must be sorted by `at_ms`, start at 0 and end before
    /// `duration_ms`.
    pub const fn new(frames: &'static [Keyframe], duration_ms: Millis, final_value: f32) -> Self {
        Self { frames, duration_ms, final_value }
    }

    /// Total duration of the curve.
    #[inline]
    pub const fn duration_ms(&self) -> Millis { self.duration_ms }

    /// Value held once the curve has finished.
    #[inline]
    pub const fn final_value(&self) -> f32 { self.final_value }

    /// Keyframes of the curve.
    #[inline]
    pub const fn frames(&self) -> &'static [Keyframe] { self.frames }

    /// Interpolated value `elapsed_ms` after the start of the curve.
    pub fn value_at(&self, elapsed_ms: Millis) -> f32 {
        if elapsed_ms >= self.duration_ms {
            return self.final_value;
        }

        let Some(index) = self.frames.iter().rposition(|frame| frame.at_ms <= elapsed_ms) else {
            return self.frames.first().map_or(self.final_value, |frame| frame.value);
        };

        let from = &self.frames[index];
        let (to_ms, to_value) = self
            .frames
            .get(index + 1)
            .map_or((self.duration_ms, self.final_value), |next| (next.at_ms, next.value));

        let span = to_ms.saturating_sub(from.at_ms);
        if span == 0 {
            return to_value;
        }

        let fraction = (elapsed_ms - from.at_ms) as f32 / span as f32;
        lerp(from.value, to_value, from.easing.transform(fraction))
    }
}

/// Linear interpolation in the `a * (1 - f) + b * f` form, exact at both ends.
#[inline]
fn lerp(a: f32, b: f32, fraction: f32) -> f32 { a * (1.0 - fraction) + b * fraction }

// =============================================================================
// Speed-Test Curve
// =============================================================================

/// Total duration of one speed-test run.
pub const RUN_DURATION_MS: Millis = 9000;

/// Value the gauge settles on at the end of a run.
pub const RUN_FINAL_VALUE: f32 = 0.84;

static SPEED_TEST_FRAMES: [Keyframe; 8] = [
    Keyframe::new(0, 0.00, Easing::cubic(0.0, 1.5, 0.8, 1.0)),
    Keyframe::new(1000, 0.72, Easing::cubic(0.2, -1.5, 0.0, 1.0)),
    Keyframe::new(2000, 0.76, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(3000, 0.78, Easing::cubic(0.2, -1.5, 0.0, 1.0)),
    Keyframe::new(4000, 0.82, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(5000, 0.85, Easing::cubic(0.2, -2.0, 0.0, 1.0)),
    Keyframe::new(6000, 0.89, Easing::cubic(0.2, -1.2, 0.0, 1.0)),
    Keyframe::new(7500, 0.82, Easing::LINEAR_OUT_SLOW_IN),
];

/// The needle path every run follows.
pub static SPEED_TEST_CURVE: KeyframeCurve = KeyframeCurve::new(&SPEED_TEST_FRAMES, RUN_DURATION_MS, RUN_FINAL_VALUE);

// =============================================================================
// Progress Animator
// =============================================================================

/// Plays a [`KeyframeCurve`] from an explicit start time.
///
/// Before the first [`start`](Self::start) the value is 0 and the animator is
/// idle. After the curve ends the final value is held until the next start.
#[derive(Clone, Copy, Debug)]
pub struct ProgressAnimator {
    curve: &'static KeyframeCurve,
    started_at: Option<Millis>,
    finished: bool,
}

impl ProgressAnimator {
    /// Animator for the speed-test curve.
    pub fn new() -> Self { Self::with_curve(&SPEED_TEST_CURVE) }

    /// Animator for an arbitrary curve.
    pub const fn with_curve(curve: &'static KeyframeCurve) -> Self {
        Self {
            curve,
            started_at: None,
            finished: false,
        }
    }

    /// Start (or restart) the curve at `now`.
    ///
    /// A run in flight is discarded; the next sample begins from the first
    /// keyframe again.
    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
        self.finished = false;
    }

    /// Milliseconds since the last start, if ever started.
    #[inline]
    pub fn elapsed(&self, now: Millis) -> Option<Millis> { self.started_at.map(|start| now.wrapping_sub(start)) }

    /// Current progress value.
    pub fn current_value(&self, now: Millis) -> f32 {
        match self.elapsed(now) {
            Some(_) if self.finished => self.curve.final_value(),
            Some(elapsed) => self.curve.value_at(elapsed),
            None => 0.0,
        }
    }

    /// Whether a run is advancing at `now`.
    pub fn is_running(&self, now: Millis) -> bool {
        !self.finished && self.elapsed(now).is_some_and(|elapsed| elapsed < self.curve.duration_ms())
    }

    /// Sample the value at `now`, latching the end of the run once reached.
    ///
    /// After a run has been polled past its end the final value is held
    /// until the next [`start`](Self::start), even if the clock wraps back
    /// into the curve's range.
    pub fn poll(&mut self, now: Millis) -> f32 {
        if self.started_at.is_some() && !self.is_running(now) {
            self.finished = true;
        }
        self.current_value(now)
    }

    /// Whether the last started run has been polled to completion.
    #[inline]
    pub const fn is_finished(&self) -> bool { self.finished }
}

impl Default for ProgressAnimator {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_before_start_is_zero() {
        let animator = ProgressAnimator::new();
        assert_eq!(animator.current_value(0), 0.0);
        assert_eq!(animator.current_value(5000), 0.0);
        assert!(!animator.is_running(5000), "Idle animator should not be running");
    }

    #[test]
    fn test_value_at_start_is_zero() {
        let mut animator = ProgressAnimator::new();
        animator.start(1234);
        assert_eq!(animator.current_value(1234), 0.0);
        assert!(animator.is_running(1234));
    }

    #[test]
    fn test_keyframe_values_are_exact() {
        for frame in SPEED_TEST_CURVE.frames() {
            assert_eq!(
                SPEED_TEST_CURVE.value_at(frame.at_ms),
                frame.value,
                "Value at {} ms should equal its keyframe",
                frame.at_ms
            );
        }
    }

    #[test]
    fn test_value_at_one_second() {
        let mut animator = ProgressAnimator::new();
        animator.start(0);
        assert_eq!(animator.current_value(1000), 0.72);
    }

    #[test]
    fn test_holds_final_value_after_duration() {
        let mut animator = ProgressAnimator::new();
        animator.start(100);
        for t in [9100, 9101, 12_000, 60_000] {
            assert_eq!(animator.current_value(t), RUN_FINAL_VALUE, "Expected hold at t={t}");
            assert!(!animator.is_running(t), "Run should be finished at t={t}");
        }
        assert!(animator.is_running(9099), "Still running one ms before the end");
    }

    #[test]
    fn test_last_segment_approaches_final_value() {
        let late = SPEED_TEST_CURVE.value_at(RUN_DURATION_MS - 1);
        let diff = late - RUN_FINAL_VALUE;
        assert!(diff < 0.001 && diff > -0.001, "Value just before the end was {late}");
    }

    #[test]
    fn test_first_segment_overshoots_first_keyframe() {
        let peak = (1..1000).map(|t| SPEED_TEST_CURVE.value_at(t)).fold(f32::MIN, f32::max);
        assert!(peak > 0.72, "First sweep should overshoot 0.72, peaked at {peak}");
    }

    #[test]
    fn test_curve_jitters_between_keyframes() {
        // The 6000 -> 7500 segment dips its easing below zero, pushing the value above 0.89
        let peak = (6001..7500).map(|t| SPEED_TEST_CURVE.value_at(t)).fold(f32::MIN, f32::max);
        assert!(peak > 0.89, "Expected needle jitter above 0.89, peaked at {peak}");
    }

    #[test]
    fn test_curve_is_deterministic() {
        for t in (0..=RUN_DURATION_MS).step_by(7) {
            assert_eq!(SPEED_TEST_CURVE.value_at(t).to_bits(), SPEED_TEST_CURVE.value_at(t).to_bits());
        }
    }

    #[test]
    fn test_restart_begins_from_zero() {
        let mut animator = ProgressAnimator::new();
        animator.start(0);
        assert_eq!(animator.current_value(6000), 0.89);

        animator.start(6000);
        assert_eq!(animator.current_value(6000), 0.0, "Restart should not blend with the old run");
        assert_eq!(animator.current_value(7000), 0.72);
        assert!(animator.is_running(7000));
    }

    #[test]
    fn test_restart_after_finish() {
        let mut animator = ProgressAnimator::new();
        animator.start(0);
        assert!(!animator.is_running(20_000));
        animator.start(20_000);
        assert!(animator.is_running(20_000));
        assert_eq!(animator.current_value(21_000), 0.72);
    }

    #[test]
    fn test_clock_wraparound() {
        let mut animator = ProgressAnimator::new();
        let start = Millis::MAX - 500;
        animator.start(start);
        assert_eq!(animator.current_value(start.wrapping_add(1000)), 0.72);
    }

    #[test]
    fn test_finished_run_holds_across_clock_wrap() {
        let mut animator = ProgressAnimator::new();
        animator.start(0);
        assert_eq!(animator.poll(RUN_DURATION_MS), RUN_FINAL_VALUE);
        assert!(animator.is_finished());

        // u32 milliseconds wrap after ~49.7 days; elapsed lands back inside the curve
        let wrapped = 500;
        assert_eq!(animator.poll(wrapped), RUN_FINAL_VALUE, "Finished run must not replay");
        assert_eq!(animator.current_value(wrapped), RUN_FINAL_VALUE);
        assert!(!animator.is_running(wrapped));

        animator.start(wrapped);
        assert!(!animator.is_finished(), "Start clears the finished latch");
        assert_eq!(animator.poll(wrapped + 1000), 0.72);
        assert!(animator.is_running(wrapped + 1000));
    }

    #[test]
    fn test_poll_does_not_latch_mid_run() {
        let mut animator = ProgressAnimator::new();
        assert_eq!(animator.poll(100), 0.0, "Idle animator polls zero");
        assert!(!animator.is_finished(), "Never-started animator is not finished");

        animator.start(0);
        assert_eq!(animator.poll(1000), 0.72);
        assert!(!animator.is_finished());
        assert!(animator.is_running(1000));
    }

    #[test]
    fn test_custom_curve() {
        static FRAMES: [Keyframe; 1] = [Keyframe::new(0, 0.0, Easing::Linear)];
        static CURVE: KeyframeCurve = KeyframeCurve::new(&FRAMES, 100, 1.0);
        let mut animator = ProgressAnimator::with_curve(&CURVE);
        animator.start(0);
        assert_eq!(animator.current_value(50), 0.5);
        assert_eq!(animator.current_value(100), 1.0);
    }
}
