//! WebAssembly entry point.
//!
//! [`start`] runs when the module is instantiated. It installs the panic hook
//! and console logger, then mounts the page exactly once: immediately if the
//! document has finished parsing, otherwise from `DOMContentLoaded`. The
//! mounted [`Page`] is parked in a thread-local for the life of the document.
//!
//! Features mount independently. One that fails is logged and skipped; the
//! rest still come up.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::dom::reveal::Reveal;
use crate::dom::slideshow::SharedSlideshow;
use crate::dom::theme::SharedTheme;
use crate::dom::{self, Listeners};

/// Everything that must outlive initialization.
pub struct Page {
    pub listeners: Listeners,
    pub slideshow: Option<SharedSlideshow>,
    pub theme: Option<SharedTheme>,
    pub reveal: Option<Reveal>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Log a feature's mount failure and carry on without it.
fn feature<T>(name: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{name} not mounted: {e:?}");
            None
        }
    }
}

impl Page {
    /// Mount every feature against the current document.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when there is no window or document at all.
    pub fn mount() -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let mut listeners = Listeners::default();

        let theme = feature("theme", dom::theme::mount(&window, &document, &mut listeners)).flatten();
        let slideshow = feature("slideshow", dom::slideshow::mount(&document, &mut listeners)).flatten();
        feature("navigation", dom::nav::mount(&window, &document, &mut listeners));
        feature("contact form", dom::contact::mount(&window, &document, &mut listeners));
        let reveal = feature("reveal", dom::reveal::mount(&document));
        feature("body fade", dom::reveal::mount_body_fade(&window, &document, &mut listeners));

        log::debug!("page mounted with {} listeners", listeners.len());
        Ok(Self { listeners, slideshow, theme, reveal })
    }
}

/// Mount the page unless it already is.
fn init() {
    if PAGE.with(|page| page.borrow().is_some()) {
        log::debug!("page already mounted");
        return;
    }
    match Page::mount() {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(e) => log::error!("page mount failed: {e:?}"),
    }
}

/// Run [`init`] once the document is parsed.
fn when_ready() -> Result<(), JsValue> {
    let document = dom::document(&dom::window()?)?;
    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(init);
        document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())?;
    } else {
        init();
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {e}");
    }
    if let Err(e) = when_ready() {
        log::error!("page boot failed: {e:?}");
    }
}

/// Jump the slideshow to a 1-based position, for inline `onclick` handlers.
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide(position: u32) {
    PAGE.with(|page| {
        if let Some(show) = page.borrow().as_ref().and_then(|p| p.slideshow.as_ref()) {
            show.borrow_mut().go_to(position as usize);
        }
    });
}
