//! Bottom navigation bar with four primitive-drawn icons.
//!
//! Icons are built from arcs, circles and lines around each slot's center
//! (no bitmaps). The selected slot is drawn in pink, the others muted.

use embedded_graphics::{
    geometry::Angle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle},
};

use crate::{
    colors::{DARK_COLOR_2, DIVIDER, LIGHT_COLOR_2, PINK},
    config::{NAV_HEIGHT, NAV_TOP, SCREEN_WIDTH, nav_slot_center},
    nav::{NavBar, NavItem},
};

const ICON_STROKE: u32 = 2;

const NAV_RECT: Rectangle = Rectangle::new(Point::new(0, NAV_TOP as i32), Size::new(SCREEN_WIDTH, NAV_HEIGHT));
const NAV_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_COLOR_2);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER, 1);

/// Draw the navigation bar, highlighting the selected slot.
pub fn draw_nav_bar<D>(
    display: &mut D,
    nav: &NavBar,
) where
    D: DrawTarget<Color = Rgb565>,
{
    NAV_RECT.into_styled(NAV_FILL_STYLE).draw(display).ok();
    Line::new(NAV_RECT.top_left, NAV_RECT.top_left + Point::new(SCREEN_WIDTH as i32 - 1, 0))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    for (slot, item) in NavItem::ALL.into_iter().enumerate() {
        let color = if slot == nav.selected() { PINK } else { LIGHT_COLOR_2 };
        draw_icon(display, item, nav_slot_center(slot), color);
    }
}

/// Draw one icon centered on `center`.
pub fn draw_icon<D>(
    display: &mut D,
    item: NavItem,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(color, ICON_STROKE);
    let fill = PrimitiveStyle::with_fill(color);

    match item {
        NavItem::Wifi => {
            // Three nested arcs opening upward above a dot
            let base = center + Point::new(0, 8);
            for diameter in [10, 20, 30] {
                Arc::with_center(base, diameter, Angle::from_degrees(225.0), Angle::from_degrees(90.0))
                    .into_styled(stroke)
                    .draw(display)
                    .ok();
            }
            Circle::with_center(base, 4).into_styled(fill).draw(display).ok();
        }
        NavItem::Account => {
            Circle::with_center(center - Point::new(0, 5), 10)
                .into_styled(fill)
                .draw(display)
                .ok();
            Arc::with_center(center + Point::new(0, 12), 20, Angle::from_degrees(180.0), Angle::from_degrees(180.0))
                .into_styled(stroke)
                .draw(display)
                .ok();
        }
        NavItem::Speed => {
            let hub = center + Point::new(0, 3);
            Arc::with_center(hub, 24, Angle::from_degrees(150.0), Angle::from_degrees(240.0))
                .into_styled(stroke)
                .draw(display)
                .ok();
            Line::new(hub, hub + Point::new(5, -6)).into_styled(stroke).draw(display).ok();
            Circle::with_center(hub, 4).into_styled(fill).draw(display).ok();
        }
        NavItem::Settings => {
            Circle::with_center(center, 16).into_styled(stroke).draw(display).ok();
            Circle::with_center(center, 5).into_styled(fill).draw(display).ok();
            for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let inner = center + Point::new(dx * 8, dy * 8);
                let outer = center + Point::new(dx * 11, dy * 11);
                Line::new(inner, outer).into_styled(stroke).draw(display).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NAV_SLOT_WIDTH, nav_slot_at};
    use crate::widgets::test_support::ColorCounter;

    #[test]
    fn test_selected_icon_is_pink() {
        for slot in 0..NavItem::ALL.len() {
            let mut nav = NavBar::new();
            nav.select(slot);

            let mut counter = ColorCounter::new(PINK);
            draw_nav_bar(&mut counter, &nav);
            assert!(counter.count() > 0, "Slot {slot} should be highlighted");

            let left = nav_slot_at(Point::new(counter.min_x(), NAV_TOP as i32 + 1));
            let right = nav_slot_at(Point::new(counter.max_x(), NAV_TOP as i32 + 1));
            assert_eq!(left, Some(slot), "Highlight must stay inside slot {slot}");
            assert_eq!(right, Some(slot), "Highlight must stay inside slot {slot}");
        }
    }

    #[test]
    fn test_unselected_icons_are_muted() {
        let nav = NavBar::new();
        let mut counter = ColorCounter::new(LIGHT_COLOR_2);
        draw_nav_bar(&mut counter, &nav);
        assert!(counter.count() > 0);
        assert!(counter.min_x() < NAV_SLOT_WIDTH as i32, "First slot icon is muted");
    }

    #[test]
    fn test_icons_fit_the_bar() {
        let mut counter = ColorCounter::new(PINK);
        for (slot, item) in NavItem::ALL.into_iter().enumerate() {
            draw_icon(&mut counter, item, nav_slot_center(slot), PINK);
        }
        assert!(counter.min_y() > NAV_TOP as i32);
        assert!(counter.max_y() < (NAV_TOP + NAV_HEIGHT) as i32);
    }
}
