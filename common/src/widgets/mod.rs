//! Widget components for the speed-test screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod button;
mod gauge;
mod header;
mod info;
mod nav;
mod readout;
mod screen;

pub use button::{START_LABEL, draw_start_button};
pub use gauge::{
    ARC_LAYER_COUNT,
    ArcLayer,
    GLOW_LAYER_COUNT,
    GaugeGeometry,
    LayerPaint,
    MAJOR_TICK_EVERY,
    START_ANGLE_DEGREES,
    SWEEP_DEGREES,
    TICK_COUNT,
    arc_layers,
    draw_gauge,
    is_tick_visible,
    sweep_angle,
    tick_angle,
    visible_tick_count,
};
pub use header::{HEADER_TITLE, draw_header};
pub use info::draw_info_row;
pub use nav::{draw_icon, draw_nav_bar};
pub use readout::draw_speed_readout;
pub use screen::{SCREEN_BACKGROUND, ScreenView, draw_screen};
