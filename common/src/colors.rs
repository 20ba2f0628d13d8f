//! Theme color tokens for the speed-test screen.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The screen is drawn on a dark navy background with a green gauge. Widgets
//! only reference these names; the actual shades can change freely.
//!
//! # Alpha Blending
//!
//! Rgb565 has no alpha channel. Translucent effects (the gauge glow) are
//! pre-composited against a known background with [`blend_rgb565`] and then
//! drawn opaque.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure white (31, 63, 31). Header title and value text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Theme Colors
// =============================================================================

/// Screen background. Dark navy, roughly #1B2133.
pub const DARK_COLOR: Rgb565 = Rgb565::new(3, 8, 6);

/// START button fill. Slightly lighter navy, roughly #2A334A.
pub const DARK_COLOR_2: Rgb565 = Rgb565::new(5, 12, 9);

/// Gauge tick marks. Muted blue-gray, roughly #818CA3.
pub const LIGHT_COLOR: Rgb565 = Rgb565::new(16, 35, 20);

/// Secondary labels ("DOWNLOAD", "PING", unselected nav icons), roughly #9FA8BF.
pub const LIGHT_COLOR_2: Rgb565 = Rgb565::new(19, 42, 23);

/// Glow tint around the gauge arc, roughly #90F5C8.
pub const GREEN_200: Rgb565 = Rgb565::new(18, 61, 25);

/// Crisp arc edge, roughly #19C68C.
pub const GREEN_500: Rgb565 = Rgb565::new(3, 49, 17);

/// Gradient fill at the start of the sweep, roughly #14E0A9.
pub const GREEN_GRADIENT_START: Rgb565 = Rgb565::new(2, 56, 21);

/// Gradient fill at the end of the sweep, roughly #7BF553.
pub const GREEN_GRADIENT_END: Rgb565 = Rgb565::new(15, 61, 10);

/// Selected navigation icon, roughly #F73C8A.
pub const PINK: Rgb565 = Rgb565::new(30, 15, 17);

/// Vertical divider in the info row, #414D66.
pub const DIVIDER: Rgb565 = Rgb565::new(8, 19, 12);

// =============================================================================
// Blending
// =============================================================================

/// Composite `fg` over `bg` with coverage `alpha` (clamped to 0.0-1.0).
///
/// Each channel is interpolated in its native bit depth and rounded to the
/// nearest step, so very small alphas leave the background untouched.
pub fn blend_rgb565(bg: Rgb565, fg: Rgb565, alpha: f32) -> Rgb565 {
    let alpha = alpha.clamp(0.0, 1.0);
    let bg_raw = bg.into_storage();
    let fg_raw = fg.into_storage();

    let mix = |shift: u16, mask: u16| -> u8 {
        let from = f32::from((bg_raw >> shift) & mask);
        let to = f32::from((fg_raw >> shift) & mask);
        let value = (to - from) * alpha + from + 0.5;
        (value as u16).min(mask) as u8
    };

    Rgb565::new(mix(11, 0x1F), mix(5, 0x3F), mix(0, 0x1F))
}

// =============================================================================
// Unit Tests
// =============================================================================
