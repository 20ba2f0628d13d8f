//! Simulator configuration: command-line options and timing derived from them.
//!
//! Layout constants live in the common crate; this module only holds what
//! depends on `std` (durations) or on the command line.

use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use speedtest_common::ControllerConfig;

/// Window title.
pub const WINDOW_TITLE: &str = "Speedtest Sim";

/// Command-line options.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Speed-test gauge screen simulator", long_about = None)]
pub struct Config {
    /// Window pixel scale.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub scale: u32,
    /// Target frame rate. The loop sleeps out the rest of each frame.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(10..=120))]
    pub fps: u32,
    /// Ignore START while a run is in progress.
    #[arg(long)]
    pub gate_start: bool,
    /// Run one speed test without a window and log sampled frames.
    #[arg(long)]
    pub headless: bool,
    /// Interval between logged samples in headless mode, in milliseconds.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_ms: u32,
    /// Default log level. `RUST_LOG` overrides it.
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

impl Config {
    /// Target duration of one frame.
    pub fn frame_time(&self) -> Duration { Duration::from_micros(1_000_000 / u64::from(self.fps.max(1))) }

    /// Frame step in milliseconds for the headless clock.
    pub fn frame_step_ms(&self) -> u32 { (1000 / self.fps.max(1)).max(1) }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            gate_start_while_running: self.gate_start,
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("invalid log level `{s}` (expected off, error, warn, info, debug or trace)"))
}
