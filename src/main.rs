// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u128->u32 casts for millisecond clocks
#![allow(clippy::cast_precision_loss)] // u32->f32 in frame statistics

//! Speed-test gauge screen simulator.
//!
//! Drives the screen from `speedtest-common` in an SDL window: a radial gauge
//! that sweeps through a scripted 9 second "speed test" when START is pressed,
//! with a live speed readout, ping and max speed, and a navigation bar.
//!
//! # Controls
//!
//! | Input               | Action                        |
//! |---------------------|-------------------------------|
//! | Click START / `S`   | Start (or restart) the test   |
//! | Click a nav icon    | Highlight that icon           |
//! | `N`                 | Highlight the next nav icon   |
//! | `X`                 | Toggle the FPS readout        |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Headless Mode
//!
//! `--headless` renders one full run into an off-screen display on a virtual
//! clock and logs sampled frames, without opening a window.
//!
//! # Layout
//!
//! ```text
//! ┌───────────────────────────┐
//! │         SPEEDTEST         │  56px
//! ├───────────────────────────┤
//! │        ╭───────╮          │
//! │      ╱  DOWNLOAD ╲        │
//! │     │    72.0     │       │  320px
//! │      ╲   mbps    ╱        │
//! │         [START]           │
//! ├─────────────┬─────────────┤
//! │    PING     │  MAX SPEED  │  56px
//! ├──────┬──────┬──────┬──────┤
//! │ wifi │ acct │ speed│ gear │  48px
//! └──────┴──────┴──────┴──────┘
//! ```

mod config;
mod profiling;

use std::thread;
use std::time::Instant;

use clap::Parser;
use config::{Config, WINDOW_TITLE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{LevelFilter, debug, info};
use profiling::FrameStats;
use speedtest_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, hits_start_button, nav_slot_at};
use speedtest_common::widgets::{ScreenView, draw_screen};
use speedtest_common::{DisplayState, Millis, NavBar, SPEED_TEST_CURVE, ScreenController};

fn main() {
    let config = Config::parse();
    init_logging(config.log_level);

    info!(
        "speedtest simulator: {}x{} @ {} fps, run length {} ms{}",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        config.fps,
        SPEED_TEST_CURVE.duration_ms(),
        if config.gate_start { ", start gated while running" } else { "" },
    );

    if config.headless {
        run_headless(&config);
    } else {
        run_window(&config);
    }
}

/// Log to stderr at `level` unless `RUST_LOG` says otherwise.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Milliseconds since `epoch`, the animation clock.
fn elapsed_ms(
    epoch: Instant,
    now: Instant,
) -> Millis {
    now.saturating_duration_since(epoch).as_millis() as Millis
}

fn new_display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

// =============================================================================
// Windowed Mode
// =============================================================================

fn run_window(config: &Config) {
    let mut display = new_display();
    let output_settings = OutputSettingsBuilder::new().scale(config.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut controller = ScreenController::new(config.controller_config());
    let mut nav = NavBar::new();
    let mut show_fps = false;
    let mut stats = FrameStats::new();
    let frame_time = config.frame_time();
    let epoch = Instant::now();

    // The window only exists after the first update, and events need it
    let view = ScreenView {
        state: controller.display_state(),
        nav: &nav,
        start_enabled: true,
        fps: None,
    };
    draw_screen(&mut display, &view);
    window.update(&display);

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();
        let now = elapsed_ms(epoch, frame_start);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            controller.start(now);
                        }
                        Keycode::N => {
                            let item = nav.select_next();
                            debug!("nav: {}", item.label());
                        }
                        Keycode::X => {
                            show_fps = !show_fps;
                            debug!("fps readout {}", if show_fps { "on" } else { "off" });
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if hits_start_button(point) {
                        controller.start(now);
                    } else if let Some(slot) = nav_slot_at(point)
                        && nav.select(slot)
                    {
                        debug!("nav: {}", nav.selected_item().label());
                    }
                }
                _ => {}
            }
        }

        let start_enabled = controller.start_enabled(now);
        let view = ScreenView {
            state: controller.tick(now),
            nav: &nav,
            start_enabled,
            fps: show_fps.then(|| stats.fps()),
        };
        draw_screen(&mut display, &view);
        let render_time = frame_start.elapsed();

        window.update(&display);

        // Sleep to maintain the target frame rate
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = frame_time.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        stats.record_frame(frame_start.elapsed(), render_time, sleep_time);
        if stats.update_fps(Instant::now()).is_some() {
            debug!("{stats}");
        }
    }

    info!("window closed after {} frames", stats.total_frames);
}

// =============================================================================
// Headless Mode
// =============================================================================

/// Render one run on a virtual clock, logging a sample every `--sample-ms`.
fn run_headless(config: &Config) {
    let mut display = new_display();
    let nav = NavBar::new();
    let mut controller = ScreenController::new(config.controller_config());
    let step = config.frame_step_ms();

    let mut now: Millis = 0;
    let mut next_sample: Millis = 0;
    let mut frames = 0u32;
    controller.start(now);

    loop {
        let start_enabled = controller.start_enabled(now);
        let state = controller.tick(now);
        let view = ScreenView {
            state,
            nav: &nav,
            start_enabled,
            fps: None,
        };
        draw_screen(&mut display, &view);
        frames += 1;

        if now >= next_sample || !state.running {
            log_sample(now, state);
            next_sample = now.saturating_add(config.sample_ms);
        }
        if !state.running {
            break;
        }
        now = now.saturating_add(step);
    }

    info!(
        "headless run finished at {} ms after {} frames, peak {:.1} mbps",
        now,
        frames,
        controller.peak().value()
    );
}

fn log_sample(
    now: Millis,
    state: &DisplayState,
) {
    info!(
        "t={:>5} ms  arc={:.3}  speed={:>5}  ping={:>5}  max={}",
        now,
        state.arc_value,
        state.speed_text.as_str(),
        state.ping_text.as_str(),
        state.max_speed_text.as_str(),
    );
}
