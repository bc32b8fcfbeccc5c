//! Slideshow configuration.
//!
//! Defaults come from [`crate::consts`]. The slideshow container may override
//! them with `data-interval-ms` and `data-swipe-threshold`; values that do not
//! parse, or are not positive, keep the default and log a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{INTERVAL_ATTR, SLIDE_INTERVAL_MS, SWIPE_THRESHOLD_ATTR, SWIPE_THRESHOLD_PX};

/// Tunables for the slideshow controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds.
    pub interval_ms: u32,
    /// Swipe distance in screen pixels that must be exceeded to change slides.
    pub swipe_threshold: f64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { interval_ms: SLIDE_INTERVAL_MS, swipe_threshold: SWIPE_THRESHOLD_PX }
    }
}

impl SlideshowConfig {
    /// Build a config from the raw container attribute values.
    #[must_use]
    pub fn from_attrs(interval: Option<&str>, swipe_threshold: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = interval {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.interval_ms = ms,
                _ => log::warn!("ignoring {INTERVAL_ATTR}={raw:?}; using {}ms", config.interval_ms),
            }
        }

        if let Some(raw) = swipe_threshold {
            match raw.trim().parse::<f64>() {
                Ok(px) if px.is_finite() && px > 0.0 => config.swipe_threshold = px,
                _ => log::warn!("ignoring {SWIPE_THRESHOLD_ATTR}={raw:?}; using {}px", config.swipe_threshold),
            }
        }

        config
    }
}
