//! Slideshow bindings: `.slide` / `.dot` elements, the advance interval, and
//! hover, touch, key and indicator-click wiring.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, TouchEvent};

use crate::config::SlideshowConfig;
use crate::consts::{
    ACTIVE_CLASS, INDICATOR_POSITION_ATTR, INDICATOR_SELECTOR, INTERVAL_ATTR, SLIDE_SELECTOR,
    SLIDESHOW_CONTAINER_SELECTOR, SWIPE_THRESHOLD_ATTR,
};
use crate::dom::{Listeners, query_all, query_all_html, report, set_class};
use crate::slideshow::{SlideSurface, Slideshow, Swipe};

/// Slides and indicators captured from the document at mount time.
pub struct DomSlides {
    slides: Vec<HtmlElement>,
    indicators: Vec<Element>,
}

impl SlideSurface for DomSlides {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        report("slide opacity", slide.style().set_property("opacity", if active { "1" } else { "0" }));
        report("slide class", set_class(slide, ACTIVE_CLASS, active));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.indicators.get(index) {
            report("indicator class", set_class(dot, ACTIVE_CLASS, active));
        }
    }
}

pub type DomSlideshow = Slideshow<DomSlides, Interval>;

/// The slideshow shared between its event handlers.
pub type SharedSlideshow = Rc<RefCell<DomSlideshow>>;

/// Timer factory whose ticks advance the slideshow behind `weak`.
fn arm(weak: Weak<RefCell<DomSlideshow>>) -> impl FnOnce(u32) -> Interval {
    move |period_ms| {
        Interval::new(period_ms, move || {
            if let Some(show) = weak.upgrade() {
                show.borrow_mut().advance();
            }
        })
    }
}

/// (Re)start auto-advance.
pub fn start_timer(show: &SharedSlideshow) {
    let weak = Rc::downgrade(show);
    show.borrow_mut().start_timer(arm(weak));
}

/// Horizontal screen position of the first changed touch.
fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}

/// Capture slides and indicators, render the first slide, start the timer,
/// and wire every gesture.
///
/// Returns `Ok(None)` when the page has no slides; nothing is wired then.
///
/// # Errors
///
/// Returns `Err` if a selector query or listener registration fails.
pub fn mount(document: &Document, listeners: &mut Listeners) -> Result<Option<SharedSlideshow>, JsValue> {
    let slides = query_all_html(document, SLIDE_SELECTOR)?;
    let indicators = query_all(document, INDICATOR_SELECTOR)?;
    log::info!("found {} slides, {} indicators", slides.len(), indicators.len());

    let container = document.query_selector(SLIDESHOW_CONTAINER_SELECTOR)?;
    let config = container.as_ref().map_or_else(SlideshowConfig::default, |c| {
        SlideshowConfig::from_attrs(
            c.get_attribute(INTERVAL_ATTR).as_deref(),
            c.get_attribute(SWIPE_THRESHOLD_ATTR).as_deref(),
        )
    });

    // Positions are read before the elements move into the surface.
    let positions: Vec<usize> = indicators
        .iter()
        .enumerate()
        .map(|(i, dot)| {
            dot.get_attribute(INDICATOR_POSITION_ATTR)
                .map_or(i + 1, |raw| raw.trim().parse::<usize>().unwrap_or(i + 1))
        })
        .collect();
    let dots = indicators.clone();

    let show: SharedSlideshow = Rc::new(RefCell::new(Slideshow::new(DomSlides { slides, indicators }, config)));
    if !show.borrow().is_active() {
        log::info!("no slides found, slideshow not initialized");
        return Ok(None);
    }

    {
        let weak = Rc::downgrade(&show);
        show.borrow_mut().initialize(arm(weak));
    }

    for (dot, position) in dots.iter().zip(positions) {
        let weak = Rc::downgrade(&show);
        listeners.on(dot, "click", move |_| {
            if let Some(show) = weak.upgrade() {
                show.borrow_mut().go_to(position);
            }
        })?;
    }

    if let Some(container) = container {
        let weak = Rc::downgrade(&show);
        listeners.on(&container, "mouseenter", move |_| {
            if let Some(show) = weak.upgrade() {
                show.borrow_mut().stop_timer();
            }
        })?;

        let weak = Rc::downgrade(&show);
        listeners.on(&container, "mouseleave", move |_| {
            if let Some(show) = weak.upgrade() {
                start_timer(&show);
            }
        })?;

        let swipe = Rc::new(RefCell::new(Swipe::default()));

        let swipe_start = Rc::clone(&swipe);
        listeners.on_passive(&container, "touchstart", move |event| {
            if let Some(x) = touch_x(&event) {
                swipe_start.borrow_mut().begin(x);
            }
        })?;

        let weak = Rc::downgrade(&show);
        listeners.on_passive(&container, "touchend", move |event| {
            let Some(delta_x) = touch_x(&event).and_then(|x| swipe.borrow_mut().end(x)) else {
                return;
            };
            if let Some(show) = weak.upgrade() {
                if let Some(step) = show.borrow_mut().on_gesture_end(delta_x) {
                    log::debug!("swipe {delta_x}px -> {step:?}");
                }
            }
        })?;
    }

    let weak = Rc::downgrade(&show);
    listeners.on(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(show) = weak.upgrade() {
            show.borrow_mut().on_key(&key);
        }
    })?;

    log::info!("slideshow initialized");
    Ok(Some(show))
}
