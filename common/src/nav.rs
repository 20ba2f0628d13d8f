//! Bottom navigation bar state.
//!
//! Four icon slots with one selected index. Selecting a slot only changes
//! which icon is highlighted; no other screen exists to navigate to.

use crate::config::NAV_SLOTS;

/// Icons in the navigation bar, left to right.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavItem {
    Wifi,
    Account,
    Speed,
    Settings,
}

impl NavItem {
    /// All items in display order.
    pub const ALL: [Self; NAV_SLOTS] = [Self::Wifi, Self::Account, Self::Speed, Self::Settings];

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Account => "account",
            Self::Speed => "speed",
            Self::Settings => "settings",
        }
    }
}

/// Selected slot of the navigation bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavBar {
    selected: usize,
}

impl NavBar {
    /// Slot highlighted on launch (the speed icon).
    pub const DEFAULT_SELECTED: usize = 2;

    pub const fn new() -> Self { Self { selected: Self::DEFAULT_SELECTED } }

    #[inline]
    pub const fn selected(&self) -> usize { self.selected }

    #[inline]
    pub const fn selected_item(&self) -> NavItem { NavItem::ALL[self.selected] }

    /// Highlight `slot`. Returns `true` if the selection changed.
    ///
    /// Out-of-range slots are ignored.
    pub fn select(&mut self, slot: usize) -> bool {
        if slot >= NAV_SLOTS || slot == self.selected {
            return false;
        }
        self.selected = slot;
        true
    }

    /// Move the highlight one slot right, wrapping around.
    pub fn select_next(&mut self) -> NavItem {
        self.selected = (self.selected + 1) % NAV_SLOTS;
        self.selected_item()
    }
}

impl Default for NavBar {
    fn default() -> Self { Self::new() }
}
