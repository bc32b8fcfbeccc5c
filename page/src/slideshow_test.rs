#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Records slide/indicator flags and counts every write.
#[derive(Debug, Clone, Default)]
struct FakeSurface {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    writes: usize,
}

impl FakeSurface {
    fn new(slides: usize, indicators: usize) -> Self {
        Self { slides: vec![false; slides], indicators: vec![false; indicators], writes: 0 }
    }

    fn active_slides(&self) -> Vec<usize> {
        self.slides.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }

    fn active_indicators(&self) -> Vec<usize> {
        self.indicators.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }
}

impl SlideSurface for FakeSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.slides[index] = active;
        self.writes += 1;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators[index] = active;
        self.writes += 1;
    }
}

/// Timer handle that tracks how many handles are alive.
struct FakeTimer {
    live: Rc<Cell<usize>>,
    period_ms: u32,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Stand-in for the browser timer queue: arms handles and fires their ticks
/// into the slideshow as time passes.
#[derive(Default)]
struct FakeClock {
    live: Rc<Cell<usize>>,
    armed: Cell<usize>,
}

impl FakeClock {
    fn arm(&self) -> impl FnOnce(u32) -> FakeTimer + '_ {
        move |period_ms| {
            self.live.set(self.live.get() + 1);
            self.armed.set(self.armed.get() + 1);
            FakeTimer { live: Rc::clone(&self.live), period_ms }
        }
    }

    fn live(&self) -> usize {
        self.live.get()
    }

    /// Let `elapsed_ms` pass, advancing `show` once per tick of every live
    /// timer. Returns the number of ticks fired.
    fn run(&self, show: &mut TestShow, elapsed_ms: u32) -> usize {
        let Some(period_ms) = show.timer.as_ref().map(|t| t.period_ms) else {
            return 0;
        };
        let ticks = self.live() * (elapsed_ms / period_ms) as usize;
        for _ in 0..ticks {
            show.advance();
        }
        ticks
    }
}

type TestShow = Slideshow<FakeSurface, FakeTimer>;

fn show(slides: usize, indicators: usize) -> TestShow {
    Slideshow::new(FakeSurface::new(slides, indicators), SlideshowConfig::default())
}

fn started(slides: usize, indicators: usize, clock: &FakeClock) -> TestShow {
    let mut s = show(slides, indicators);
    s.initialize(clock.arm());
    s
}

fn assert_single_active(s: &TestShow) {
    assert_eq!(s.surface().active_slides(), vec![s.current()]);
    if s.current() < s.surface().indicator_count() {
        assert_eq!(s.surface().active_indicators(), vec![s.current()]);
    } else {
        assert!(s.surface().active_indicators().is_empty());
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_shows_first_slide_and_starts_timer() {
    let clock = FakeClock::default();
    let s = started(3, 3, &clock);
    assert_eq!(s.current(), 0);
    assert_single_active(&s);
    assert!(s.timer_running());
    assert_eq!(clock.live(), 1);
}

#[test]
fn initialize_uses_configured_period() {
    let clock = FakeClock::default();
    let mut s = Slideshow::new(
        FakeSurface::new(2, 2),
        SlideshowConfig { interval_ms: 4500, ..SlideshowConfig::default() },
    );
    s.initialize(clock.arm());
    assert_eq!(s.config().interval_ms, 4500);
    assert_eq!(s.timer.as_ref().map(|t| t.period_ms), Some(4500));
}

#[test]
fn initialize_default_period_is_2000() {
    let clock = FakeClock::default();
    let s = started(2, 2, &clock);
    assert_eq!(s.timer.as_ref().map(|t| t.period_ms), Some(2000));
}

#[test]
fn initialize_resets_index() {
    let clock = FakeClock::default();
    let mut s = started(4, 4, &clock);
    s.advance();
    s.advance();
    s.initialize(clock.arm());
    assert_eq!(s.current(), 0);
    assert_eq!(clock.live(), 1);
}

#[test]
fn initialize_empty_is_inert() {
    let clock = FakeClock::default();
    let s = started(0, 0, &clock);
    assert!(!s.is_active());
    assert!(!s.timer_running());
    assert_eq!(clock.armed.get(), 0);
    assert_eq!(s.surface().writes, 0);
}

// =============================================================
// Advance / retreat
// =============================================================

#[test]
fn advance_cycles_through_three() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    let mut seen = Vec::new();
    for _ in 0..3 {
        s.advance();
        seen.push(s.current());
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn retreat_wraps_from_first_to_last() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    s.retreat();
    assert_eq!(s.current(), 2);
    assert_single_active(&s);
}

#[test]
fn advance_stays_in_range_and_matches_modulo() {
    for n in 1..=7 {
        let mut s = show(n, n);
        s.render();
        for count in 1..=25 {
            s.advance();
            assert!(s.current() < n);
            assert_eq!(s.current(), count % n, "n={n} count={count}");
        }
    }
}

#[test]
fn retreat_inverts_advance() {
    for n in 1..=5 {
        for start in 0..n {
            let mut s = show(n, n);
            s.go_to(start + 1);

            s.retreat();
            s.advance();
            assert_eq!(s.current(), start);

            s.advance();
            s.retreat();
            assert_eq!(s.current(), start);
        }
    }
}

#[test]
fn single_slide_always_index_zero() {
    let mut s = show(1, 1);
    s.advance();
    assert_eq!(s.current(), 0);
    s.retreat();
    assert_eq!(s.current(), 0);
    assert_single_active(&s);
}

#[test]
fn step_dispatches() {
    let mut s = show(4, 4);
    s.step(Step::Next);
    assert_eq!(s.current(), 1);
    s.step(Step::Previous);
    s.step(Step::Previous);
    assert_eq!(s.current(), 3);
}

#[test]
fn empty_operations_are_noops() {
    let mut s = show(0, 0);
    s.advance();
    s.retreat();
    s.render();
    s.go_to(1);
    assert_eq!(s.current(), 0);
    assert_eq!(s.surface().writes, 0);
}

// =============================================================
// Render
// =============================================================

#[test]
fn render_marks_exactly_one_active() {
    let mut s = show(5, 5);
    s.go_to(4);
    assert_single_active(&s);
    assert_eq!(s.surface().active_slides(), vec![3]);
}

#[test]
fn render_is_idempotent() {
    let mut s = show(3, 3);
    s.go_to(2);
    let first = s.surface().clone();
    s.render();
    assert_eq!(s.surface().slides, first.slides);
    assert_eq!(s.surface().indicators, first.indicators);
    assert_eq!(s.current(), 1);
}

#[test]
fn render_without_indicators() {
    let mut s = show(3, 0);
    s.advance();
    assert_eq!(s.surface().active_slides(), vec![1]);
    assert!(s.surface().active_indicators().is_empty());
}

#[test]
fn render_with_fewer_indicators_than_slides() {
    let mut s = show(4, 2);
    s.go_to(2);
    assert_eq!(s.surface().active_indicators(), vec![1]);
    s.go_to(4);
    assert_eq!(s.surface().active_slides(), vec![3]);
    assert!(s.surface().active_indicators().is_empty());
}

#[test]
fn render_clears_previous_active() {
    let mut s = show(3, 3);
    s.render();
    s.advance();
    assert_eq!(s.surface().active_slides(), vec![1]);
    assert_eq!(s.surface().active_indicators(), vec![1]);
}

// =============================================================
// go_to
// =============================================================

#[test]
fn go_to_is_one_based() {
    let mut s = show(5, 5);
    for k in 1..=5 {
        s.go_to(k);
        assert_eq!(s.current(), k - 1);
        assert_single_active(&s);
    }
}

#[test]
fn go_to_out_of_range_ignored() {
    let mut s = show(3, 3);
    s.go_to(2);
    s.go_to(0);
    assert_eq!(s.current(), 1);
    s.go_to(4);
    assert_eq!(s.current(), 1);
}

// =============================================================
// Timer
// =============================================================

#[test]
fn start_timer_twice_keeps_one() {
    let clock = FakeClock::default();
    let mut s = show(3, 3);
    s.start_timer(clock.arm());
    s.start_timer(clock.arm());
    assert_eq!(clock.live(), 1);
    assert_eq!(clock.armed.get(), 2);

    assert_eq!(clock.run(&mut s, 2000), 1);
    assert_eq!(s.current(), 1);
    assert_eq!(clock.run(&mut s, 4000), 2);
    assert_eq!(s.current(), 0);
}

#[test]
fn restart_does_not_double_advance() {
    let clock = FakeClock::default();
    let mut s = started(4, 4, &clock);
    s.stop_timer();
    s.start_timer(clock.arm());
    s.start_timer(clock.arm());
    clock.run(&mut s, 6000);
    assert_eq!(s.current(), 3);
    assert_single_active(&s);
}

#[test]
fn stopped_timer_does_not_advance() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    s.stop_timer();
    assert_eq!(clock.run(&mut s, 10_000), 0);
    assert_eq!(s.current(), 0);
}

#[test]
fn stop_timer_cancels() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    s.stop_timer();
    assert!(!s.timer_running());
    assert_eq!(clock.live(), 0);
}

#[test]
fn stop_timer_is_idempotent() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    s.stop_timer();
    s.stop_timer();
    assert_eq!(clock.live(), 0);
}

#[test]
fn hover_pause_resume_cycle() {
    let clock = FakeClock::default();
    let mut s = started(3, 3, &clock);
    for _ in 0..5 {
        s.stop_timer();
        assert_eq!(clock.live(), 0);
        s.start_timer(clock.arm());
        assert_eq!(clock.live(), 1);
    }
}

#[test]
fn start_timer_on_empty_does_not_arm() {
    let clock = FakeClock::default();
    let mut s = show(0, 0);
    s.start_timer(clock.arm());
    assert_eq!(clock.armed.get(), 0);
    assert!(!s.timer_running());
}

#[test]
fn dropping_slideshow_cancels_timer() {
    let clock = FakeClock::default();
    let s = started(2, 2, &clock);
    drop(s);
    assert_eq!(clock.live(), 0);
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn swipe_above_threshold_positive_advances() {
    let mut s = show(3, 3);
    s.render();
    assert_eq!(s.on_gesture_end(60.0), Some(Step::Next));
    assert_eq!(s.current(), 1);
}

#[test]
fn swipe_above_threshold_negative_retreats() {
    let mut s = show(3, 3);
    s.render();
    assert_eq!(s.on_gesture_end(-60.0), Some(Step::Previous));
    assert_eq!(s.current(), 2);
}

#[test]
fn swipe_below_threshold_is_noop() {
    let mut s = show(3, 3);
    s.render();
    assert_eq!(s.on_gesture_end(20.0), None);
    assert_eq!(s.on_gesture_end(-20.0), None);
    assert_eq!(s.current(), 0);
}

#[test]
fn swipe_exactly_threshold_is_noop() {
    let mut s = show(3, 3);
    assert_eq!(s.on_gesture_end(50.0), None);
    assert_eq!(s.on_gesture_end(-50.0), None);
    assert_eq!(s.current(), 0);
}

#[test]
fn swipe_respects_configured_threshold() {
    let mut s: TestShow =
        Slideshow::new(FakeSurface::new(3, 3), SlideshowConfig { swipe_threshold: 100.0, ..Default::default() });
    assert_eq!(s.on_gesture_end(60.0), None);
    assert_eq!(s.on_gesture_end(120.0), Some(Step::Next));
}

#[test]
fn swipe_on_empty_is_noop() {
    let mut s = show(0, 0);
    assert_eq!(s.on_gesture_end(200.0), None);
    assert_eq!(s.surface().writes, 0);
}

#[test]
fn swipe_tracker_computes_start_minus_end() {
    let mut swipe = Swipe::default();
    swipe.begin(300.0);
    assert_eq!(swipe.end(220.0), Some(80.0));
}

#[test]
fn swipe_tracker_end_without_begin() {
    let mut swipe = Swipe::default();
    assert_eq!(swipe.end(10.0), None);
}

#[test]
fn swipe_tracker_resets_after_end() {
    let mut swipe = Swipe::default();
    swipe.begin(0.0);
    assert_eq!(swipe.end(-70.0), Some(70.0));
    assert_eq!(swipe.end(-70.0), None);
}

#[test]
fn arrow_keys_navigate() {
    let mut s = show(3, 3);
    assert_eq!(s.on_key("ArrowRight"), Some(Step::Next));
    assert_eq!(s.current(), 1);
    assert_eq!(s.on_key("ArrowLeft"), Some(Step::Previous));
    assert_eq!(s.on_key("ArrowLeft"), Some(Step::Previous));
    assert_eq!(s.current(), 2);
}

#[test]
fn other_keys_ignored() {
    let mut s = show(3, 3);
    assert_eq!(s.on_key("ArrowUp"), None);
    assert_eq!(s.on_key("Enter"), None);
    assert_eq!(s.current(), 0);
}

#[test]
fn arrow_keys_on_empty_ignored() {
    let mut s = show(0, 0);
    assert_eq!(s.on_key("ArrowRight"), None);
    assert_eq!(s.surface().writes, 0);
}

#[test]
fn step_from_key_mapping() {
    assert_eq!(Step::from_key("ArrowLeft"), Some(Step::Previous));
    assert_eq!(Step::from_key("ArrowRight"), Some(Step::Next));
    assert_eq!(Step::from_key("arrowright"), None);
}
