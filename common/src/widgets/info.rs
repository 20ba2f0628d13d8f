//! PING | MAX SPEED info row below the gauge.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};

use crate::{
    colors::DIVIDER,
    config::{CENTER_X, INFO_HEIGHT, INFO_TOP, SCREEN_WIDTH},
    styles::{CENTERED, INFO_TITLE_STYLE, INFO_VALUE_STYLE},
};

// =============================================================================
// Info Row Layout Constants
// =============================================================================

/// Horizontal center of the left (PING) column.
const LEFT_COLUMN_X: i32 = (SCREEN_WIDTH / 4) as i32;

/// Horizontal center of the right (MAX SPEED) column.
const RIGHT_COLUMN_X: i32 = (SCREEN_WIDTH * 3 / 4) as i32;

const TITLE_Y: i32 = INFO_TOP as i32 + 16;
const VALUE_Y: i32 = INFO_TOP as i32 + 42;

const DIVIDER_START: Point = Point::new(CENTER_X, INFO_TOP as i32 + 8);
const DIVIDER_END: Point = Point::new(CENTER_X, (INFO_TOP + INFO_HEIGHT) as i32 - 8);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER, 1);

/// Draw the two captioned values with a vertical divider between them.
pub fn draw_info_row<D>(
    display: &mut D,
    ping_text: &str,
    max_speed_text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_column(display, LEFT_COLUMN_X, "PING", ping_text);

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    draw_column(display, RIGHT_COLUMN_X, "MAX SPEED", max_speed_text);
}

fn draw_column<D>(
    display: &mut D,
    x: i32,
    title: &str,
    value: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(title, Point::new(x, TITLE_Y), INFO_TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(value, Point::new(x, VALUE_Y), INFO_VALUE_STYLE, CENTERED)
        .draw(display)
        .ok();
}
