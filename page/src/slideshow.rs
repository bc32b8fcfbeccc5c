//! Slideshow controller: a cyclic position over a fixed slide set plus one
//! repeating advance timer.
//!
//! [`Slideshow`] is browser-free. The slides and indicators sit behind
//! [`SlideSurface`], and the timer is an opaque handle `T` whose drop cancels
//! it; the caller supplies a closure that arms a new one. The `dom` layer
//! plugs in real elements and `gloo_timers::callback::Interval`, the tests
//! plug in recording fakes.
//!
//! Every entry point (timer tick, indicator click, arrow keys, swipes)
//! converges on [`Slideshow::render`], which leaves exactly one slide and at
//! most one indicator marked active, at `current`.
//!
//! An empty slide set is a valid steady state: every operation is a no-op.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

use crate::config::SlideshowConfig;

/// The slide and indicator elements a [`Slideshow`] drives.
///
/// Both sets are fixed for the lifetime of the surface. Indicators run
/// parallel to slides but may be fewer (or absent); the controller never
/// asks for an indicator index at or past [`SlideSurface::indicator_count`].
pub trait SlideSurface {
    /// Number of slides (N).
    fn slide_count(&self) -> usize;

    /// Number of indicators present.
    fn indicator_count(&self) -> usize;

    /// Show (`active = true`, fully opaque) or hide (transparent) a slide.
    fn set_slide_active(&mut self, index: usize, active: bool);

    /// Mark or unmark an indicator as selected.
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// One step of navigation through the slide ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Forward, wrapping from the last slide to the first.
    Next,
    /// Backward, wrapping from the first slide to the last.
    Previous,
}

impl Step {
    /// Map a browser key name to a step. Only the horizontal arrows navigate.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Classify a finished swipe.
    ///
    /// `delta_x` is `start - end`, so a leftward drag is positive and means
    /// "next". Travel must strictly exceed `threshold` to count.
    #[must_use]
    pub fn from_swipe(delta_x: f64, threshold: f64) -> Option<Self> {
        if delta_x.abs() <= threshold {
            return None;
        }
        if delta_x > 0.0 { Some(Self::Next) } else { Some(Self::Previous) }
    }
}

/// Tracks a single touch from start to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swipe {
    start_x: Option<f64>,
}

impl Swipe {
    /// Record where the touch began.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the touch and return `start - end`, or `None` if no touch began.
    pub fn end(&mut self, x: f64) -> Option<f64> {
        self.start_x.take().map(|start| start - x)
    }
}

/// The slideshow controller.
pub struct Slideshow<S, T> {
    surface: S,
    config: SlideshowConfig,
    current: usize,
    timer: Option<T>,
}

impl<S: SlideSurface, T> Slideshow<S, T> {
    /// Wrap a surface. Nothing is rendered and no timer runs until
    /// [`Slideshow::initialize`].
    #[must_use]
    pub fn new(surface: S, config: SlideshowConfig) -> Self {
        Self { surface, config, current: 0, timer: None }
    }

    /// Whether there is anything to show. An empty slideshow stays inert.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.surface.slide_count() > 0
    }

    /// Reset to the first slide, render it, and start auto-advance.
    ///
    /// `arm` receives the advance period and returns the new timer handle.
    pub fn initialize(&mut self, arm: impl FnOnce(u32) -> T) {
        if !self.is_active() {
            return;
        }
        self.current = 0;
        self.render();
        self.start_timer(arm);
    }

    /// Synchronise slide and indicator state with `current`.
    pub fn render(&mut self) {
        let count = self.surface.slide_count();
        if count == 0 {
            return;
        }
        for i in 0..count {
            self.surface.set_slide_active(i, false);
        }
        for i in 0..self.surface.indicator_count() {
            self.surface.set_indicator_active(i, false);
        }
        self.surface.set_slide_active(self.current, true);
        if self.current < self.surface.indicator_count() {
            self.surface.set_indicator_active(self.current, true);
        }
    }

    /// Jump to a 1-based position, as carried by indicator clicks.
    ///
    /// Positions outside `1..=N` are ignored so `current` never leaves the
    /// slide range.
    pub fn go_to(&mut self, position: usize) {
        if position == 0 || position > self.surface.slide_count() {
            log::debug!("slideshow: ignoring out-of-range position {position}");
            return;
        }
        self.current = position - 1;
        self.render();
    }

    /// Move to the next slide, wrapping to the first.
    pub fn advance(&mut self) {
        let count = self.surface.slide_count();
        if count == 0 {
            return;
        }
        self.current += 1;
        if self.current >= count {
            self.current = 0;
        }
        self.render();
    }

    /// Move to the previous slide, wrapping to the last.
    pub fn retreat(&mut self) {
        let count = self.surface.slide_count();
        if count == 0 {
            return;
        }
        self.current = (self.current + count - 1) % count;
        self.render();
    }

    /// Apply one navigation step.
    pub fn step(&mut self, step: Step) {
        match step {
            Step::Next => self.advance(),
            Step::Previous => self.retreat(),
        }
    }

    /// Replace any running timer with a fresh one.
    ///
    /// The old handle is dropped before `arm` runs, so two timers never
    /// overlap.
    pub fn start_timer(&mut self, arm: impl FnOnce(u32) -> T) {
        if !self.is_active() {
            return;
        }
        self.stop_timer();
        self.timer = Some(arm(self.config.interval_ms));
    }

    /// Cancel the running timer, if any.
    pub fn stop_timer(&mut self) {
        self.timer = None;
    }

    /// Whether an auto-advance timer is currently held.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Handle a finished touch gesture. Returns the step taken, if any.
    pub fn on_gesture_end(&mut self, delta_x: f64) -> Option<Step> {
        if !self.is_active() {
            return None;
        }
        let step = Step::from_swipe(delta_x, self.config.swipe_threshold)?;
        self.step(step);
        Some(step)
    }

    /// Handle a key press. Returns the step taken, if any.
    pub fn on_key(&mut self, key: &str) -> Option<Step> {
        if !self.is_active() {
            return None;
        }
        let step = Step::from_key(key)?;
        self.step(step);
        Some(step)
    }

    // --- Queries ---

    /// Zero-based index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn config(&self) -> SlideshowConfig {
        self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
