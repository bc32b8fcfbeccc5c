//! Navigation bindings: hamburger menu, smooth-scroll anchors, and the
//! navbar scroll shadow.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::consts::{
    ACTIVE_CLASS, ANCHOR_SELECTOR, HAMBURGER_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_SELECTOR, NAVBAR_SELECTOR,
    SCROLLED_CLASS,
};
use crate::dom::{Listeners, next_frame, query_all, report, set_class};
use crate::nav::{MenuState, anchor_target, navbar_scrolled};

/// Reflect the menu state on both the hamburger and the menu.
fn show_menu(hamburger: &Element, menu: &Element, open: bool) {
    report("hamburger class", set_class(hamburger, ACTIVE_CLASS, open));
    report("menu class", set_class(menu, ACTIVE_CLASS, open));
}

/// Wire the hamburger toggle and close-on-link-click.
fn mount_menu(document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) =
        (document.query_selector(HAMBURGER_SELECTOR)?, document.query_selector(NAV_MENU_SELECTOR)?)
    else {
        log::debug!("no hamburger menu on page");
        return Ok(());
    };
    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let state = Rc::clone(&state);
        let (h, m) = (hamburger.clone(), menu.clone());
        listeners.on(&hamburger, "click", move |_| {
            let mut menu_state = state.get();
            let open = menu_state.toggle();
            state.set(menu_state);
            show_menu(&h, &m, open);
        })?;
    }

    for link in query_all(document, NAV_LINK_SELECTOR)? {
        let state = Rc::clone(&state);
        let (h, m) = (hamburger.clone(), menu.clone());
        listeners.on(&link, "click", move |_| {
            let mut menu_state = state.get();
            menu_state.close();
            state.set(menu_state);
            show_menu(&h, &m, false);
        })?;
    }
    Ok(())
}

/// Scroll the element targeted by `anchor` into view.
fn scroll_to_anchor(document: &Document, anchor: &Element) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replace the default jump of every `#fragment` link with a smooth scroll.
fn mount_anchors(document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    for anchor in query_all(document, ANCHOR_SELECTOR)? {
        let document = document.clone();
        let target = anchor.clone();
        listeners.on(&anchor, "click", move |event: Event| {
            event.prevent_default();
            scroll_to_anchor(&document, &target);
        })?;
    }
    Ok(())
}

/// Toggle the navbar shadow on scroll, at most once per animation frame.
fn mount_navbar(window: &Window, document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    let Some(navbar) = document.query_selector(NAVBAR_SELECTOR)? else {
        return Ok(());
    };
    let ticking = Rc::new(Cell::new(false));
    let win = window.clone();
    listeners.on_passive(window, "scroll", move |_| {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        let (win_frame, navbar, ticking_frame) = (win.clone(), navbar.clone(), Rc::clone(&ticking));
        let requested = next_frame(&win, move || {
            match win_frame.scroll_y() {
                Ok(y) => report("navbar class", set_class(&navbar, SCROLLED_CLASS, navbar_scrolled(y))),
                Err(e) => log::warn!("reading scroll offset failed: {e:?}"),
            }
            ticking_frame.set(false);
        });
        if requested.is_err() {
            ticking.set(false);
        }
        report("navbar frame", requested);
    })?;
    Ok(())
}

/// Wire the menu, anchors, and navbar.
///
/// # Errors
///
/// Returns `Err` if a selector query or listener registration fails.
pub fn mount(window: &Window, document: &Document, listeners: &mut Listeners) -> Result<(), JsValue> {
    mount_menu(document, listeners)?;
    mount_anchors(document, listeners)?;
    mount_navbar(window, document, listeners)
}
