//! Shared constants for the page crate.

// ── Slideshow ───────────────────────────────────────────────────

/// Period between automatic slide advances, in milliseconds.
pub const SLIDE_INTERVAL_MS: u32 = 2000;

/// Minimum horizontal travel, in screen pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Class toggled on the visible slide and the selected indicator.
pub const ACTIVE_CLASS: &str = "active";

pub const SLIDE_SELECTOR: &str = ".slide";
pub const INDICATOR_SELECTOR: &str = ".dot";
pub const SLIDESHOW_CONTAINER_SELECTOR: &str = ".slideshow-container";

/// Container attribute overriding [`SLIDE_INTERVAL_MS`].
pub const INTERVAL_ATTR: &str = "data-interval-ms";

/// Container attribute overriding [`SWIPE_THRESHOLD_PX`].
pub const SWIPE_THRESHOLD_ATTR: &str = "data-swipe-threshold";

/// Indicator attribute carrying its 1-based slide position.
pub const INDICATOR_POSITION_ATTR: &str = "data-slide";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on `<html>` that the stylesheet keys off.
pub const THEME_ATTR: &str = "data-theme";

pub const THEME_BUTTON_ID: &str = "theme-toggle-btn";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";

// ── Navigation ──────────────────────────────────────────────────

/// Scroll offset in pixels past which the navbar gets its shadow.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SCROLLED_CLASS: &str = "scrolled";

// ── Contact ─────────────────────────────────────────────────────

pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";

// ── Reveal ──────────────────────────────────────────────────────

pub const SECTION_SELECTOR: &str = "section";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";

/// Fraction of a target that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the bottom inset delays reveals slightly.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Vertical offset, in pixels, that hidden targets start from.
pub const REVEAL_OFFSET_PX: u32 = 30;

/// Fade/slide duration in seconds.
pub const REVEAL_DURATION_S: f64 = 0.6;

/// Extra delay per portfolio item, in seconds.
pub const REVEAL_STAGGER_S: f64 = 0.1;

/// Delay before the body fades in after `load`, in milliseconds.
pub const BODY_FADE_DELAY_MS: u32 = 100;

/// Body fade-in duration in seconds.
pub const BODY_FADE_DURATION_S: f64 = 0.5;
