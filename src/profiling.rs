//! Frame timing statistics for the simulator loop.
//!
//! Tracks per-frame render/sleep split, min/max/average frame time and an
//! FPS figure recomputed once per second. The FPS value feeds the header
//! readout; the whole summary is logged at debug level.

use std::fmt;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

use heapless::String;

/// How often the FPS figure is recomputed.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Frame timing statistics.
pub struct FrameStats {
    // Last frame (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,
    pub total_frames: u64,

    // FPS window
    window_start: Instant,
    window_frames: u32,
    fps: f32,

    start_time: Instant,
}

impl FrameStats {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self { Self::starting_at(Instant::now()) }

    /// Statistics whose uptime and first FPS window begin at `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            window_start: start,
            window_frames: 0,
            fps: 0.0,
            start_time: start,
        }
    }

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
        self.window_frames += 1;
    }

    /// Close the FPS window if it has run for [`FPS_WINDOW`].
    ///
    /// Returns the new FPS figure when it was recomputed.
    pub fn update_fps(
        &mut self,
        now: Instant,
    ) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < FPS_WINDOW {
            return None;
        }
        self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
        self.window_frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// FPS over the last completed window.
    #[inline]
    pub const fn fps(&self) -> f32 { self.fps }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }
}

impl Default for FrameStats {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for FrameStats {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let min = if self.total_frames == 0 { 0 } else { self.frame_time_min_us };
        write!(
            f,
            "{:.1} fps, frame {}us (avg {}us, min {}us, max {}us), render {}us, sleep {}us, {} frames, up {}",
            self.fps,
            self.frame_time_us,
            self.frame_time_avg_us(),
            min,
            self.frame_time_max_us,
            self.render_time_us,
            self.sleep_time_us,
            self.total_frames,
            format_uptime(self.uptime()),
        )
    }
}

/// Format a duration as `HH:MM:SS`.
pub fn format_uptime(uptime: Duration) -> String<12> {
    let secs = uptime.as_secs();
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn test_record_frame_min_max() {
        let mut stats = FrameStats::new();
        stats.record_frame(ms(20), ms(5), ms(15));
        stats.record_frame(ms(30), ms(25), ms(5));
        stats.record_frame(ms(10), ms(4), ms(6));

        assert_eq!(stats.total_frames, 3);
        assert_eq!(stats.frame_time_min_us, 10_000);
        assert_eq!(stats.frame_time_max_us, 30_000);
        assert_eq!(stats.frame_time_us, 10_000, "Last frame is kept");
        assert_eq!(stats.render_time_us, 4_000);
        assert_eq!(stats.sleep_time_us, 6_000);
    }

    #[test]
    fn test_average_starts_at_first_frame() {
        let mut stats = FrameStats::new();
        stats.record_frame(ms(20), ms(5), ms(15));
        assert_eq!(stats.frame_time_avg_us(), 20_000);

        stats.record_frame(ms(30), ms(5), ms(25));
        // 0.1 * 30000 + 0.9 * 20000
        assert_eq!(stats.frame_time_avg_us(), 21_000);
    }

    #[test]
    fn test_fps_window() {
        let start = Instant::now();
        let mut stats = FrameStats::starting_at(start);
        for _ in 0..50 {
            stats.record_frame(ms(20), ms(5), ms(15));
        }

        assert_eq!(stats.update_fps(start + ms(500)), None, "Window still open");
        assert_eq!(stats.fps(), 0.0);

        let fps = stats.update_fps(start + ms(1000));
        assert_eq!(fps, Some(50.0));
        assert_eq!(stats.fps(), 50.0);

        stats.record_frame(ms(40), ms(5), ms(35));
        assert_eq!(stats.update_fps(start + ms(1500)), None, "New window started");
        let fps = stats.update_fps(start + ms(2000));
        assert_eq!(fps, Some(1.0));
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(59)).as_str(), "00:00:59");
        assert_eq!(format_uptime(Duration::from_secs(3_725)).as_str(), "01:02:05");
        assert_eq!(format_uptime(Duration::from_secs(360_000)).as_str(), "100:00:00");
    }

    #[test]
    fn test_display_summary() {
        let mut stats = FrameStats::new();
        stats.record_frame(ms(20), ms(5), ms(15));
        let summary = stats.to_string();
        assert!(summary.contains("frame 20000us"), "Unexpected summary: {summary}");
        assert!(summary.contains("1 frames"), "Unexpected summary: {summary}");
    }
}
