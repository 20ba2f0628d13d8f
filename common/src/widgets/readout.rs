//! Live speed readout in the middle of the gauge.
//!
//! Three centered lines stacked around the gauge center: a "DOWNLOAD"
//! caption, the speed value and the "mbps" unit.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};

use crate::{
    config::GAUGE_CENTER,
    styles::{CAPTION_STYLE, CENTERED, SPEED_VALUE_STYLE},
};

const CAPTION_POS: Point = Point::new(GAUGE_CENTER.x, GAUGE_CENTER.y - 28);
const VALUE_POS: Point = Point::new(GAUGE_CENTER.x, GAUGE_CENTER.y + 10);
const UNIT_POS: Point = Point::new(GAUGE_CENTER.x, GAUGE_CENTER.y + 34);

/// Draw the DOWNLOAD / value / mbps stack.
pub fn draw_speed_readout<D>(
    display: &mut D,
    speed_text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("DOWNLOAD", CAPTION_POS, CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(speed_text, VALUE_POS, SPEED_VALUE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("mbps", UNIT_POS, CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}
