//! Header bar: "SPEEDTEST" title, optional FPS readout and a bottom divider.
//!
//! All positions are `const Point` values derived from the layout constants,
//! and the fill/stroke styles are `const` as well (`PrimitiveStyle::with_fill`
//! and `with_stroke` are const fn in embedded-graphics 0.8).

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{DARK_COLOR_2, DIVIDER},
    config::{CENTER_X, HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, FPS_STYLE, RIGHT_ALIGNED, TITLE_STYLE},
};

/// Title text.
pub const HEADER_TITLE: &str = "SPEEDTEST";

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Title baseline (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new(CENTER_X, 35);

/// FPS readout baseline (right-aligned, 8px from the edge).
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 8) as i32, 33);

const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

const DIVIDER_START: Point = Point::new(0, (HEADER_HEIGHT - 1) as i32);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, (HEADER_HEIGHT - 1) as i32);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_COLOR_2);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER, 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar, with the FPS readout on the right when `fps` is set.
pub fn draw_header<D>(
    display: &mut D,
    fps: Option<f32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(HEADER_TITLE, HEADER_TITLE_POS, TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    if let Some(fps) = fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, FPS_STYLE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
