//! Screen controller: start action, peak tracking and per-frame sampling.
//!
//! The host calls [`ScreenController::start`] when the user presses START and
//! [`ScreenController::tick`] once per frame. Each tick pulls the current
//! progress from the animator, folds it into the run's peak speed and
//! rebuilds the [`DisplayState`] the widgets draw from.
//!
//! # Start Gating
//!
//! The START control can be disabled while a run is in progress
//! ([`ControllerConfig::gate_start_while_running`]). It is off by default:
//! pressing START mid-run restarts the animation.

use log::{debug, info, trace};

use crate::animator::{Millis, ProgressAnimator};
use crate::metrics::{DisplayState, speed_for};

/// Peak speed observed during the current run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeakSpeed {
    value: f32,
}

impl PeakSpeed {
    pub const fn new() -> Self { Self { value: 0.0 } }

    /// Current peak in mbps.
    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    /// Forget the previous run.
    #[inline]
    pub fn reset(&mut self) { self.value = 0.0; }

    /// Fold a speed sample in. Returns `true` if it set a new peak.
    pub fn observe(&mut self, speed: f32) -> bool {
        if speed > self.value {
            self.value = speed;
            true
        } else {
            false
        }
    }
}

/// Behaviour switches for [`ScreenController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Ignore START while a run is in progress.
    pub gate_start_while_running: bool,
}

/// Owns the animator and peak state and produces one [`DisplayState`] per frame.
#[derive(Debug)]
pub struct ScreenController {
    animator: ProgressAnimator,
    peak: PeakSpeed,
    config: ControllerConfig,
    state: DisplayState,
    was_running: bool,
}

impl ScreenController {
    pub fn new(config: ControllerConfig) -> Self { Self::with_animator(ProgressAnimator::new(), config) }

    /// Controller driving a custom animator.
    pub fn with_animator(animator: ProgressAnimator, config: ControllerConfig) -> Self {
        Self {
            animator,
            peak: PeakSpeed::new(),
            config,
            state: DisplayState::default(),
            was_running: false,
        }
    }

    /// Handle a START press at `now`.
    ///
    /// Resets the peak, restarts the animation from zero and refreshes the
    /// display state so the max speed reads `"-"` immediately. Returns
    /// `false` if the press was ignored because gating is on and a run is in
    /// progress.
    pub fn start(&mut self, now: Millis) -> bool {
        if !self.start_enabled(now) {
            debug!("start ignored, run in progress");
            return false;
        }

        if self.animator.is_running(now) {
            info!("restarting speed test");
        } else {
            info!("starting speed test");
        }

        self.peak.reset();
        self.animator.start(now);
        self.refresh(now);
        true
    }

    /// Sample the animation at `now` and rebuild the display state.
    pub fn tick(&mut self, now: Millis) -> &DisplayState {
        self.refresh(now);
        &self.state
    }

    fn refresh(&mut self, now: Millis) {
        let progress = self.animator.poll(now);
        let running = self.animator.is_running(now);

        if self.peak.observe(speed_for(progress)) {
            trace!("new peak {:.1} mbps", self.peak.value());
        }
        if self.was_running && !running {
            info!("speed test finished, peak {:.1} mbps", self.peak.value());
        }
        self.was_running = running;

        self.state = DisplayState::derive(progress, self.peak.value(), running);
    }

    /// Snapshot from the last [`tick`](Self::tick) or [`start`](Self::start).
    #[inline]
    pub const fn display_state(&self) -> &DisplayState { &self.state }

    /// Whether a START press at `now` would be accepted.
    #[inline]
    pub fn start_enabled(&self, now: Millis) -> bool {
        !(self.config.gate_start_while_running && self.animator.is_running(now))
    }

    /// Peak speed of the current run.
    #[inline]
    pub const fn peak(&self) -> PeakSpeed { self.peak }
}

impl Default for ScreenController {
    fn default() -> Self { Self::new(ControllerConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::RUN_DURATION_MS;

    fn max_speed_value(state: &DisplayState) -> f32 {
        state
            .max_speed_text
            .as_str()
            .trim_end_matches(" mbps")
            .parse()
            .unwrap_or(0.0)
    }

    #[test]
    fn test_peak_speed_observe() {
        let mut peak = PeakSpeed::new();
        assert!(peak.observe(10.0));
        assert!(!peak.observe(5.0), "Lower sample must not replace the peak");
        assert!(!peak.observe(10.0), "Equal sample is not a new peak");
        assert!(peak.observe(12.5));
        assert_eq!(peak.value(), 12.5);
        peak.reset();
        assert_eq!(peak.value(), 0.0);
    }

    #[test]
    fn test_idle_controller_shows_zero() {
        let mut controller = ScreenController::default();
        let state = controller.tick(500);
        assert_eq!(state.speed_text.as_str(), "0.0");
        assert_eq!(state.max_speed_text.as_str(), "-");
        assert!(!state.running);
    }

    #[test]
    fn test_sample_at_one_second() {
        let mut controller = ScreenController::default();
        assert!(controller.start(0));
        let state = controller.tick(1000);
        assert_eq!(state.arc_value, 0.72);
        assert_eq!(state.speed_text.as_str(), "72.0");
        assert_eq!(state.ping_text.as_str(), "11 ms");
        assert_eq!(state.max_speed_text.as_str(), "72.0 mbps");
        assert!(state.running);
    }

    #[test]
    fn test_max_speed_non_decreasing_within_run() {
        let mut controller = ScreenController::default();
        controller.start(0);
        let mut last = 0.0f32;
        for t in (0..=RUN_DURATION_MS + 500).step_by(16) {
            let value = max_speed_value(controller.tick(t));
            assert!(value >= last, "Max speed dropped from {last} to {value} at t={t}");
            last = value;
        }
        assert!(last > 89.0, "Needle jitter should push the peak past 89, got {last}");
    }

    #[test]
    fn test_restart_resets_max_speed_immediately() {
        let mut controller = ScreenController::default();
        controller.start(0);
        assert_eq!(controller.tick(6000).max_speed_text.as_str(), "89.0 mbps");

        assert!(controller.start(6000));
        assert_eq!(controller.display_state().max_speed_text.as_str(), "-");
        assert_eq!(controller.display_state().speed_text.as_str(), "0.0");
        assert_eq!(controller.peak().value(), 0.0);

        let state = controller.tick(6016);
        let value = max_speed_value(state);
        assert!(value < 89.0, "New run starts from scratch, got {value}");
    }

    #[test]
    fn test_running_flag_follows_animation() {
        let mut controller = ScreenController::default();
        controller.start(0);
        assert!(controller.tick(100).running);
        assert!(controller.tick(RUN_DURATION_MS - 1).running);
        let state = controller.tick(RUN_DURATION_MS);
        assert!(!state.running);
        assert_eq!(state.speed_text.as_str(), "84.0");
    }

    #[test]
    fn test_finished_run_stays_finished_after_clock_wrap() {
        let mut controller = ScreenController::default();
        controller.start(0);
        for t in (0..=RUN_DURATION_MS).step_by(100) {
            controller.tick(t);
        }
        assert!(!controller.display_state().running);
        let max_before = controller.display_state().max_speed_text.clone();

        let state = controller.tick(1000);
        assert!(!state.running, "Wrapped clock must not resume the run");
        assert_eq!(state.speed_text.as_str(), "84.0");
        assert_eq!(state.max_speed_text, max_before, "Peak is kept while holding");
    }

    #[test]
    fn test_ungated_start_always_accepted() {
        let mut controller = ScreenController::default();
        controller.start(0);
        assert!(controller.start_enabled(3000));
        assert!(controller.start(3000));
    }

    #[test]
    fn test_gated_start_ignored_while_running() {
        let config = ControllerConfig { gate_start_while_running: true };
        let mut controller = ScreenController::new(config);
        assert!(controller.start(0));
        controller.tick(6000);

        assert!(!controller.start_enabled(6000));
        assert!(!controller.start(6000), "Gated start must be ignored mid-run");
        assert_eq!(controller.display_state().max_speed_text.as_str(), "89.0 mbps");
        assert_eq!(controller.tick(7500).arc_value, 0.82, "First run keeps playing");

        assert!(controller.start_enabled(RUN_DURATION_MS));
        assert!(controller.start(RUN_DURATION_MS), "Start accepted once the run finishes");
        assert_eq!(controller.display_state().max_speed_text.as_str(), "-");
    }
}
