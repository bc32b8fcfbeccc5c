//! Browser interactivity for the portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by `website/index.html`.
//! It owns every piece of behaviour on the page: the auto-advancing slideshow,
//! the persisted light/dark theme, the mobile menu and smooth-scroll links,
//! the contact form validator, and the fade-in animations.
//!
//! Each feature is split in two. A browser-free core holds the state and the
//! rules and is tested natively; the [`dom`] layer binds that core to the
//! document through `web-sys` and owns the event listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slideshow`] | Slideshow controller, swipe tracking, key mapping |
//! | [`theme`] | Light/dark theme and the preference store seam |
//! | [`nav`] | Mobile menu state, anchor parsing, navbar shadow threshold |
//! | [`contact`] | Contact form validation |
//! | [`reveal`] | Fade-in animation styles and observer options |
//! | [`config`] | Slideshow configuration and attribute overrides |
//! | [`consts`] | Shared constants (timings, thresholds, selectors) |
//! | [`dom`] | `web-sys` bindings for all of the above |
//! | [`boot`] | WebAssembly entry point and the single init path |

pub mod boot;
pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod nav;
pub mod reveal;
pub mod slideshow;
pub mod theme;
