//! Pre-computed static text styles.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder` are `const fn`, so every style
//! the screen uses is built at compile time and referenced directly by the
//! widgets instead of being constructed per frame.
//!
//! | Style                 | Font          | Used for                          |
//! |-----------------------|---------------|-----------------------------------|
//! | `TITLE_STYLE`         | 10x20         | "SPEEDTEST" header                |
//! | `CAPTION_STYLE`       | 9x15          | "DOWNLOAD" / "mbps" around value  |
//! | `SPEED_VALUE_STYLE`   | `ProFont` 24pt| live speed in the gauge center    |
//! | `INFO_TITLE_STYLE`    | 6x10          | "PING" / "MAX SPEED" captions     |
//! | `INFO_VALUE_STYLE`    | `ProFont` 18pt| ping and max speed values         |
//! | `BUTTON_STYLE`        | 9x15          | START label                       |
//! | `FPS_STYLE`           | 6x10          | FPS readout in the header         |

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{LIGHT_COLOR_2, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for nearly all text on the screen.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Right-aligned text. Used for the FPS readout.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Header title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Muted caption above and below the live speed.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, LIGHT_COLOR_2);

/// Live speed value.
pub const SPEED_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Info row captions.
pub const INFO_TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_COLOR_2);

/// Info row values.
pub const INFO_VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// START label while the button is enabled.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WHITE);

/// START label while the button is disabled.
pub const BUTTON_DISABLED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, LIGHT_COLOR_2);

/// FPS readout.
pub const FPS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_COLOR_2);
