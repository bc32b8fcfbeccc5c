//! Fade-in animations for sections and portfolio items.
//!
//! Targets start transparent and shifted down; once an intersection observer
//! reports them on screen they move to [`revealed_style`]. Portfolio items are
//! staggered by their position.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{BODY_FADE_DURATION_S, REVEAL_DURATION_S, REVEAL_OFFSET_PX, REVEAL_STAGGER_S};

/// Inline style values applied to a reveal target.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    /// `None` leaves the element's transition untouched.
    pub transition: Option<String>,
}

/// Style of a target once it has scrolled into view.
#[must_use]
pub fn revealed_style() -> RevealStyle {
    RevealStyle { opacity: "1", transform: "translateY(0)".to_owned(), transition: None }
}

/// Hidden starting style with a transition delayed by `delay_s` seconds.
#[must_use]
pub fn hidden_style(delay_s: f64) -> RevealStyle {
    let delay = if delay_s > 0.0 { format!(" {}s", trim_float(delay_s)) } else { String::new() };
    RevealStyle {
        opacity: "0",
        transform: format!("translateY({REVEAL_OFFSET_PX}px)"),
        transition: Some(format!(
            "opacity {d}s ease{delay}, transform {d}s ease{delay}",
            d = trim_float(REVEAL_DURATION_S),
        )),
    }
}

/// Starting style for a page section.
#[must_use]
pub fn section_style() -> RevealStyle {
    hidden_style(0.0)
}

/// Starting style for the `index`-th portfolio item.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn portfolio_item_style(index: usize) -> RevealStyle {
    hidden_style(index as f64 * REVEAL_STAGGER_S)
}

/// Hide each target with its starting style, carrying on past failures.
///
/// Returns the index and error of every target that could not be hidden.
pub fn hide_all<T, E>(
    targets: &[T],
    style_for: impl Fn(usize) -> RevealStyle,
    mut hide: impl FnMut(&T, &RevealStyle) -> Result<(), E>,
) -> Vec<(usize, E)> {
    targets
        .iter()
        .enumerate()
        .filter_map(|(index, target)| hide(target, &style_for(index)).err().map(|e| (index, e)))
        .collect()
}

/// When the body fade starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFade {
    /// `load` has already fired.
    Now,
    OnLoad,
}

impl BodyFade {
    /// A complete document has already dispatched `load`, so waiting for it
    /// would never fade.
    #[must_use]
    pub fn for_document(complete: bool) -> Self {
        if complete { Self::Now } else { Self::OnLoad }
    }
}

/// Transition applied to `<body>` for the fade-in after `load`.
#[must_use]
pub fn body_transition() -> String {
    format!("opacity {}s ease", trim_float(BODY_FADE_DURATION_S))
}

/// Format seconds without float noise: `0.30000000000000004` -> `0.3`.
fn trim_float(value: f64) -> String {
    let rounded = format!("{value:.3}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() { "0".to_owned() } else { trimmed.to_owned() }
}
