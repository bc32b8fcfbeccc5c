//! Navigation: the mobile menu, in-page anchors, and the navbar shadow.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::NAVBAR_SCROLL_THRESHOLD_PX;

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Element id targeted by an in-page link, e.g. `"#about"` -> `"about"`.
///
/// Returns `None` for anything that is not a fragment link, and for a bare
/// `"#"`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether the navbar should carry its scrolled shadow at this offset.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD_PX
}
