//! Common types, state and widgets for the speed-test gauge screen.
//!
//! This crate contains everything that does not depend on a particular
//! display or clock, so the same code drives the desktop simulator and any
//! `DrawTarget<Color = Rgb565>` panel:
//!
//! - [`easing`]: cubic-bezier and linear easing curves
//! - [`animator`]: keyframe curve and the time-driven progress animator
//! - [`metrics`]: display strings derived from progress
//! - [`controller`]: START handling, peak tracking and per-frame sampling
//! - [`nav`]: navigation bar selection state
//! - [`colors`]: RGB565 theme colors and blending
//! - [`config`]: layout constants and hit testing
//! - [`styles`]: pre-computed text styles
//! - [`widgets`]: gauge renderer and screen chrome
//!
//! # Time
//!
//! Nothing here reads a clock. Callers pass the current time in milliseconds
//! ([`animator::Millis`]) to [`controller::ScreenController::tick`], which
//! keeps every frame a pure function of its inputs.
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible. Text lives in `heapless` strings and
//! trigonometry goes through `micromath`.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animator;
pub mod colors;
pub mod config;
pub mod controller;
pub mod easing;
pub mod metrics;
pub mod nav;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use animator::{Millis, ProgressAnimator, SPEED_TEST_CURVE};
pub use controller::{ControllerConfig, PeakSpeed, ScreenController};
pub use metrics::DisplayState;
pub use nav::{NavBar, NavItem};
