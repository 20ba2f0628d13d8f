//! Full-frame composition of the speed-test screen.
//!
//! Draw order matters: the gauge glow spills past the gauge box, so the
//! header, button and info row are drawn over it afterwards.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use super::{
    button::draw_start_button,
    gauge::{GaugeGeometry, draw_gauge},
    header::draw_header,
    info::draw_info_row,
    nav::draw_nav_bar,
    readout::draw_speed_readout,
};
use crate::{
    colors::DARK_COLOR,
    config::{GAUGE_CANVAS_ORIGIN, GAUGE_CANVAS_SIZE},
    metrics::DisplayState,
    nav::NavBar,
};

/// Screen background.
pub const SCREEN_BACKGROUND: Rgb565 = DARK_COLOR;

/// Everything one frame needs besides the display.
#[derive(Clone, Copy, Debug)]
pub struct ScreenView<'a> {
    pub state: &'a DisplayState,
    pub nav: &'a NavBar,
    /// Whether START currently accepts presses.
    pub start_enabled: bool,
    /// FPS to show in the header, if the readout is on.
    pub fps: Option<f32>,
}

/// Redraw the whole screen.
pub fn draw_screen<D>(
    display: &mut D,
    view: &ScreenView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(SCREEN_BACKGROUND).ok();

    let geometry = GaugeGeometry::new(GAUGE_CANVAS_ORIGIN, GAUGE_CANVAS_SIZE);
    draw_gauge(display, &geometry, view.state.arc_value, SCREEN_BACKGROUND);
    draw_speed_readout(display, &view.state.speed_text);

    draw_header(display, view.fps);
    draw_start_button(display, view.start_enabled);
    draw_info_row(display, &view.state.ping_text, &view.state.max_speed_text);
    draw_nav_bar(display, view.nav);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN_500, LIGHT_COLOR, PINK};
    use crate::widgets::test_support::ColorCounter;

    fn count(color: Rgb565, state: &DisplayState, start_enabled: bool) -> usize {
        let nav = NavBar::new();
        let view = ScreenView {
            state,
            nav: &nav,
            start_enabled,
            fps: None,
        };
        let mut counter = ColorCounter::new(color);
        draw_screen(&mut counter, &view);
        counter.count()
    }

    #[test]
    fn test_idle_screen_shows_ticks_without_arc() {
        let state = DisplayState::default();
        assert!(count(LIGHT_COLOR, &state, true) > 0, "Ticks visible when idle");
        assert_eq!(count(GREEN_500, &state, true), 0, "No arc when idle");
    }

    #[test]
    fn test_running_screen_draws_arc() {
        let state = DisplayState::derive(0.72, 72.0, true);
        assert!(count(GREEN_500, &state, true) > 0);
    }

    #[test]
    fn test_nav_highlight_present() {
        let state = DisplayState::default();
        assert!(count(PINK, &state, true) > 0);
    }

    #[test]
    fn test_frames_are_deterministic() {
        let a = DisplayState::derive(0.5, 50.0, true);
        let b = DisplayState::derive(0.5, 50.0, true);
        assert_eq!(count(GREEN_500, &a, true), count(GREEN_500, &b, true));
    }

    #[test]
    fn test_disabled_start_changes_button() {
        let state = DisplayState::derive(0.5, 50.0, true);
        // Ticks share LIGHT_COLOR with the disabled border
        assert!(count(LIGHT_COLOR, &state, false) > count(LIGHT_COLOR, &state, true));
    }
}
