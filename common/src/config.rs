//! Screen layout constants.
//!
//! The screen is a 320x480 portrait display split top to bottom into:
//!
//! ```text
//! +---------------------------+  0
//! |        SPEEDTEST      fps |  header
//! +---------------------------+  HEADER_HEIGHT
//! |                           |
//! |      gauge (square)       |  GAUGE_BOX_SIZE
//! |         [START]           |
//! +-------------+-------------+  INFO_TOP
//! |    PING     |  MAX SPEED  |  info row
//! +------+------+------+------+  NAV_TOP
//! | wifi | user | speed| gear |  navigation bar
//! +------+------+------+------+  SCREEN_HEIGHT
//! ```
//!
//! Everything is `const` so widgets never do layout math per frame.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Header
// =============================================================================

/// Header band height.
pub const HEADER_HEIGHT: u32 = 56;

// =============================================================================
// Gauge
// =============================================================================

/// Top edge of the square gauge box (full screen width).
pub const GAUGE_TOP: u32 = HEADER_HEIGHT;

/// Side of the square gauge box.
pub const GAUGE_BOX_SIZE: u32 = SCREEN_WIDTH;

/// Inset between the gauge box and the drawing canvas on every side.
pub const GAUGE_PADDING: u32 = 16;

/// Side of the square canvas the gauge renderer draws into.
pub const GAUGE_CANVAS_SIZE: u32 = GAUGE_BOX_SIZE - 2 * GAUGE_PADDING;

/// Top-left corner of the gauge canvas.
pub const GAUGE_CANVAS_ORIGIN: Point = Point::new(GAUGE_PADDING as i32, (GAUGE_TOP + GAUGE_PADDING) as i32);

/// Center of the gauge.
pub const GAUGE_CENTER: Point = Point::new(CENTER_X, (GAUGE_TOP + GAUGE_BOX_SIZE / 2) as i32);

// =============================================================================
// START Button
// =============================================================================

/// START button width.
pub const START_BUTTON_WIDTH: u32 = 112;

/// START button height.
pub const START_BUTTON_HEIGHT: u32 = 36;

/// Gap between the START button and the bottom of the gauge box.
pub const START_BUTTON_MARGIN: u32 = 12;

/// START button bounds, bottom-centered in the gauge box.
pub const START_BUTTON_RECT: Rectangle = Rectangle::new(
    Point::new(
        CENTER_X - (START_BUTTON_WIDTH / 2) as i32,
        (GAUGE_TOP + GAUGE_BOX_SIZE - START_BUTTON_MARGIN - START_BUTTON_HEIGHT) as i32,
    ),
    Size::new(START_BUTTON_WIDTH, START_BUTTON_HEIGHT),
);

// =============================================================================
// Info Row (PING | MAX SPEED)
// =============================================================================

/// Top edge of the info row.
pub const INFO_TOP: u32 = GAUGE_TOP + GAUGE_BOX_SIZE;

/// Info row height.
pub const INFO_HEIGHT: u32 = 56;

// =============================================================================
// Navigation Bar
// =============================================================================

/// Top edge of the navigation bar.
pub const NAV_TOP: u32 = INFO_TOP + INFO_HEIGHT;

/// Navigation bar height (fills the rest of the screen).
pub const NAV_HEIGHT: u32 = SCREEN_HEIGHT - NAV_TOP;

/// Number of icon slots in the navigation bar.
pub const NAV_SLOTS: usize = 4;

/// Width of one navigation slot.
pub const NAV_SLOT_WIDTH: u32 = SCREEN_WIDTH / NAV_SLOTS as u32;

const _: () = assert!(NAV_TOP < SCREEN_HEIGHT);
const _: () = assert!(GAUGE_CANVAS_SIZE > 0);

// =============================================================================
// Hit Testing
// =============================================================================

/// Whether a screen point lands on the START button.
#[inline]
pub fn hits_start_button(point: Point) -> bool { START_BUTTON_RECT.contains(point) }

/// Navigation slot under a screen point, if any.
pub fn nav_slot_at(point: Point) -> Option<usize> {
    if point.y < NAV_TOP as i32 || point.y >= SCREEN_HEIGHT as i32 {
        return None;
    }
    if point.x < 0 || point.x >= SCREEN_WIDTH as i32 {
        return None;
    }
    Some((point.x as u32 / NAV_SLOT_WIDTH) as usize)
}

/// Center point of a navigation slot's icon.
#[inline]
pub const fn nav_slot_center(slot: usize) -> Point {
    Point::new(
        (slot as u32 * NAV_SLOT_WIDTH + NAV_SLOT_WIDTH / 2) as i32,
        (NAV_TOP + NAV_HEIGHT / 2) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_screen() {
        assert_eq!(NAV_TOP + NAV_HEIGHT, SCREEN_HEIGHT);
        assert_eq!(NAV_SLOT_WIDTH * NAV_SLOTS as u32, SCREEN_WIDTH);
    }

    #[test]
    fn test_start_button_inside_gauge_box() {
        let top = START_BUTTON_RECT.top_left.y;
        let bottom = top + START_BUTTON_HEIGHT as i32;
        assert!(top >= GAUGE_TOP as i32, "Button must start inside the gauge box");
        assert!(bottom <= INFO_TOP as i32, "Button must end above the info row");
    }

    #[test]
    fn test_hits_start_button() {
        let center = START_BUTTON_RECT.center();
        assert!(hits_start_button(center));
        assert!(!hits_start_button(GAUGE_CENTER), "Gauge center is not the button");
        assert!(!hits_start_button(Point::new(0, 0)));
    }

    #[test]
    fn test_nav_slot_at() {
        let y = (NAV_TOP + 5) as i32;
        assert_eq!(nav_slot_at(Point::new(0, y)), Some(0));
        assert_eq!(nav_slot_at(Point::new(NAV_SLOT_WIDTH as i32, y)), Some(1));
        assert_eq!(nav_slot_at(Point::new((SCREEN_WIDTH - 1) as i32, y)), Some(3));
        assert_eq!(nav_slot_at(Point::new(10, (NAV_TOP - 1) as i32)), None, "Above the bar");
        assert_eq!(nav_slot_at(Point::new(-1, y)), None);
        assert_eq!(nav_slot_at(Point::new(10, SCREEN_HEIGHT as i32)), None);
    }

    #[test]
    fn test_nav_slot_center_maps_back() {
        for slot in 0..NAV_SLOTS {
            assert_eq!(nav_slot_at(nav_slot_center(slot)), Some(slot));
        }
    }
}
