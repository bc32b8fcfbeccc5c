//! Reveal bindings: an `IntersectionObserver` fading in sections and
//! portfolio items, and the body fade-in after `load`.

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::consts::{
    BODY_FADE_DELAY_MS, PORTFOLIO_ITEM_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_SELECTOR,
};
use crate::dom::{Listeners, query_all_html, report};
use crate::reveal::{
    BodyFade, RevealStyle, body_transition, hide_all, portfolio_item_style, revealed_style, section_style,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// The live observer and the callback it calls into.
pub struct Reveal {
    pub observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// Write a [`RevealStyle`] into an element's inline style.
///
/// # Errors
///
/// Returns `Err` if a style property is rejected.
pub fn apply_style(element: &HtmlElement, style: &RevealStyle) -> Result<(), JsValue> {
    let css = element.style();
    css.set_property("opacity", style.opacity)?;
    css.set_property("transform", &style.transform)?;
    if let Some(transition) = &style.transition {
        css.set_property("transition", transition)?;
    }
    Ok(())
}

fn on_intersections(entries: Array) {
    let revealed = revealed_style();
    for entry in entries.iter() {
        let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        if let Some(target) = entry.target().dyn_ref::<HtmlElement>() {
            report("reveal", apply_style(target, &revealed));
        }
    }
}

/// Hide sections and portfolio items and observe them for reveal.
///
/// # Errors
///
/// Returns `Err` if the observer cannot be created. A target that cannot be
/// hidden is logged and still observed.
pub fn mount(document: &Document) -> Result<Reveal, JsValue> {
    let callback: ObserverCallback =
        Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| on_intersections(entries))
            as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let sections = query_all_html(document, SECTION_SELECTOR)?;
    for (index, e) in hide_all(&sections, |_| section_style(), apply_style) {
        log::warn!("hiding section {index} failed: {e:?}");
    }
    let items = query_all_html(document, PORTFOLIO_ITEM_SELECTOR)?;
    for (index, e) in hide_all(&items, portfolio_item_style, apply_style) {
        log::warn!("hiding portfolio item {index} failed: {e:?}");
    }
    for target in sections.iter().chain(&items) {
        observer.observe(target);
    }

    log::debug!("observing {} sections, {} portfolio items", sections.len(), items.len());
    Ok(Reveal { observer, _callback: callback })
}

fn fade_in_body(body: &HtmlElement) {
    let css = body.style();
    report("body opacity", css.set_property("opacity", "0"));
    report("body transition", css.set_property("transition", &body_transition()));
    let body = body.clone();
    Timeout::new(BODY_FADE_DELAY_MS, move || {
        report("body fade", body.style().set_property("opacity", "1"));
    })
    .forget();
}

/// Fade the body in shortly after the window finishes loading, or right away
/// when loading finished before the module started.
///
/// # Errors
///
/// Returns `Err` if listener registration fails.
pub fn mount_body_fade(window: &Window, document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let complete = document.ready_state() == "complete";
    match BodyFade::for_document(complete) {
        BodyFade::Now => {
            if let Some(body) = document.body() {
                fade_in_body(&body);
            }
        }
        BodyFade::OnLoad => {
            let document = document.clone();
            listeners.on(window, "load", move |_| {
                if let Some(body) = document.body() {
                    fade_in_body(&body);
                }
            })?;
        }
    }
    Ok(())
}
