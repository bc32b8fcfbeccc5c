//! `web-sys` bindings: the only layer that touches the document.
//!
//! Each submodule wires one feature's browser-free core to its markup and
//! returns whatever must stay alive (shared state, observers). Listener
//! closures are parked in [`Listeners`], which the page keeps for its whole
//! lifetime.
//!
//! Fallible DOM calls propagate `JsValue` errors with `?` up to the wiring
//! function. Inside event handlers there is no caller to return to, so
//! failures there go through [`report`].

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod slideshow;
pub mod theme;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

/// A DOM event listener closure.
pub type Listener = Closure<dyn FnMut(Event)>;

/// Event listener closures held for the lifetime of the page.
///
/// Dropping a registered closure would leave the browser calling into freed
/// memory, so closures are only ever added.
#[derive(Default)]
pub struct Listeners {
    held: Vec<Listener>,
}

impl Listeners {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the registration.
    pub fn on(
        &mut self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        self.held.push(cb);
        Ok(())
    }

    /// Like [`Listeners::on`], marked passive so the browser never waits on it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the registration.
    pub fn on_passive(
        &mut self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &options,
        )?;
        self.held.push(cb);
        Ok(())
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// The global `window`.
///
/// # Errors
///
/// Returns `Err` outside a browser window context (e.g. in a worker).
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The window's document.
///
/// # Errors
///
/// Returns `Err` if the window has no document.
pub fn document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| JsValue::from_str("window has no document"))
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns `Err` if `selector` is not valid CSS.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// All HTML elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns `Err` if `selector` is not valid CSS.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

/// Add or remove a class.
///
/// # Errors
///
/// Returns `Err` if the class name is rejected by the token list.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on { element.class_list().add_1(class) } else { element.class_list().remove_1(class) }
}

/// Log a failed DOM call made where no caller can receive the error.
pub fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

/// Run `f` on the next animation frame.
///
/// # Errors
///
/// Returns `Err` if the browser refuses the frame request.
pub fn next_frame(window: &Window, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let cb = Closure::once_into_js(f);
    window.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}
