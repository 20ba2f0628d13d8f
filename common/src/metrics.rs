//! Display-ready fields derived from gauge progress.
//!
//! [`DisplayState`] is a snapshot recomputed every frame from the current
//! progress, the peak speed of the run and the running flag. Nothing else
//! feeds into it, so two frames with the same inputs render identically.
//!
//! | Field            | Rule                                                 |
//! |------------------|------------------------------------------------------|
//! | `speed_text`     | `progress * 100` with one decimal                    |
//! | `ping_text`      | `round(progress * 15) ms` once past 20%, else `-`    |
//! | `max_speed_text` | `peak mbps` with one decimal once non-zero, else `-` |
//!
//! All text lives in fixed-capacity `heapless` strings; progress is clamped
//! to `[0, 1]` first, so the capacities below always suffice.

use core::fmt::Write;

use heapless::String;

/// Placeholder shown while a metric has no meaningful value.
pub const PLACEHOLDER: &str = "-";

/// Progress above which the ping readout is shown.
pub const PING_THRESHOLD: f32 = 0.2;

/// Ping in ms at full progress.
pub const PING_SCALE: f32 = 15.0;

/// Speed in mbps at full progress.
pub const SPEED_SCALE: f32 = 100.0;

/// Clamp progress into `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) }
}

/// Instantaneous speed in mbps for a progress value.
#[inline]
pub fn speed_for(progress: f32) -> f32 { clamp_progress(progress) * SPEED_SCALE }

/// Immutable per-frame snapshot of everything the screen prints.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// Gauge fill fraction, `[0, 1]`.
    pub arc_value: f32,
    /// Current speed, e.g. `"72.0"`.
    pub speed_text: String<8>,
    /// Ping, e.g. `"11 ms"` or `"-"`.
    pub ping_text: String<8>,
    /// Peak speed of the run, e.g. `"72.0 mbps"` or `"-"`.
    pub max_speed_text: String<16>,
    /// Whether the animation is advancing.
    pub running: bool,
}

impl DisplayState {
    /// Derive the snapshot for one frame.
    pub fn derive(progress: f32, peak: f32, running: bool) -> Self {
        let progress = clamp_progress(progress);
        Self {
            arc_value: progress,
            speed_text: speed_text(progress),
            ping_text: ping_text(progress),
            max_speed_text: max_speed_text(peak),
            running,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self { Self::derive(0.0, 0.0, false) }
}

/// Value in whole tenths, rounding half up like the ping readout.
#[inline]
fn round_tenths(value: f32) -> u32 {
    // Non-negative, so adding 0.5 and truncating rounds half up
    (value * 10.0 + 0.5) as u32
}

/// Write `value` with one decimal place, rounding ties up.
fn write_tenths(s: &mut impl Write, value: f32) {
    let tenths = round_tenths(value);
    let _ = write!(s, "{}.{}", tenths / 10, tenths % 10);
}

/// Speed readout with one decimal place.
pub fn speed_text(progress: f32) -> String<8> {
    let mut s = String::new();
    write_tenths(&mut s, speed_for(progress));
    s
}

/// Ping readout, `"-"` until progress passes [`PING_THRESHOLD`].
pub fn ping_text(progress: f32) -> String<8> {
    let progress = clamp_progress(progress);
    let mut s = String::new();
    if progress > PING_THRESHOLD {
        let ping = (progress * PING_SCALE + 0.5) as u32;
        let _ = write!(s, "{ping} ms");
    } else {
        let _ = s.push_str(PLACEHOLDER);
    }
    s
}

/// Peak speed readout, `"-"` while the peak is zero.
pub fn max_speed_text(peak: f32) -> String<16> {
    let mut s = String::new();
    if peak > 0.0 {
        write_tenths(&mut s, peak);
        let _ = s.push_str(" mbps");
    } else {
        let _ = s.push_str(PLACEHOLDER);
    }
    s
}
