//! START button under the gauge.
//!
//! A rounded rectangle with a 2px border and a centered label. The disabled
//! variant (start gated while a run is in progress) uses muted colors.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{CornerRadii, PrimitiveStyle, PrimitiveStyleBuilder, RoundedRectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};

use crate::{
    colors::{DARK_COLOR, DARK_COLOR_2, LIGHT_COLOR, LIGHT_COLOR_2},
    config::START_BUTTON_RECT,
    styles::{BUTTON_DISABLED_STYLE, BUTTON_STYLE},
};

/// Button label.
pub const START_LABEL: &str = "START";

const CORNER_RADIUS: u32 = 18;
const BORDER_WIDTH: u32 = 2;

const BUTTON_SHAPE: RoundedRectangle = RoundedRectangle::new(
    START_BUTTON_RECT,
    CornerRadii::new(Size::new(CORNER_RADIUS, CORNER_RADIUS)),
);

/// Label centered both ways on the button.
const LABEL_TEXT_STYLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

const ENABLED_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(DARK_COLOR_2)
    .stroke_color(LIGHT_COLOR_2)
    .stroke_width(BORDER_WIDTH)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();

const DISABLED_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(DARK_COLOR)
    .stroke_color(LIGHT_COLOR)
    .stroke_width(BORDER_WIDTH)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();

/// Draw the START button.
pub fn draw_start_button<D>(
    display: &mut D,
    enabled: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (shape_style, label_style) = if enabled {
        (ENABLED_STYLE, BUTTON_STYLE)
    } else {
        (DISABLED_STYLE, BUTTON_DISABLED_STYLE)
    };

    BUTTON_SHAPE.into_styled(shape_style).draw(display).ok();
    Text::with_text_style(START_LABEL, START_BUTTON_RECT.center(), label_style, LABEL_TEXT_STYLE)
        .draw(display)
        .ok();
}
