//! Theme toggle bindings.
//!
//! Reads the saved theme from `localStorage` and applies it as the
//! `data-theme` attribute on `<html>`, with the matching icon in the toggle
//! button. A click flips the theme, persists it, and applies it on the next
//! animation frame.
//!
//! When the browser denies `localStorage` (private modes, sandboxed frames)
//! the preference lives in memory for the visit.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Storage, Window};

use crate::consts::{THEME_ATTR, THEME_BUTTON_ID, THEME_ICON_SELECTOR};
use crate::dom::{Listeners, next_frame, report};
use crate::theme::{MemoryStore, PreferenceStore, Theme, ThemeToggle};

/// Preference storage backed by `localStorage` when available.
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open `localStorage`, falling back to memory.
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => Self::Memory(MemoryStore::default()),
            Err(e) => {
                log::warn!("localStorage unavailable, theme will not persist: {e:?}");
                Self::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("reading {key} from localStorage failed: {e:?}");
                    None
                }
            },
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => report("localStorage write", storage.set_item(key, value)),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

pub type SharedTheme = Rc<RefCell<ThemeToggle<BrowserStore>>>;

/// Set `data-theme` on the root element and swap the button icon.
///
/// # Errors
///
/// Returns `Err` if the attribute cannot be set.
pub fn apply(root: &Element, icon: &Element, theme: Theme) -> Result<(), JsValue> {
    root.set_attribute(THEME_ATTR, theme.as_str())?;
    icon.set_text_content(Some(theme.icon()));
    Ok(())
}

/// Apply the saved theme and wire the toggle button.
///
/// Returns `Ok(None)` when the button or its icon is missing.
///
/// # Errors
///
/// Returns `Err` if a DOM query, the initial apply, or listener registration
/// fails.
pub fn mount(window: &Window, document: &Document, listeners: &mut Listeners) -> Result<Option<SharedTheme>, JsValue> {
    let Some(button) = document.get_element_by_id(THEME_BUTTON_ID) else {
        log::debug!("no #{THEME_BUTTON_ID}; theme toggle not wired");
        return Ok(None);
    };
    let Some(icon) = button.query_selector(THEME_ICON_SELECTOR)? else {
        log::debug!("no {THEME_ICON_SELECTOR} in #{THEME_BUTTON_ID}; theme toggle not wired");
        return Ok(None);
    };
    let Some(root) = document.document_element() else {
        return Ok(None);
    };

    let toggle = Rc::new(RefCell::new(ThemeToggle::load(BrowserStore::open(window))));
    let theme = toggle.borrow().theme();
    apply(&root, &icon, theme)?;
    log::info!("theme: {}", theme.as_str());

    let shared = Rc::clone(&toggle);
    let window = window.clone();
    listeners.on(&button, "click", move |_| {
        let theme = shared.borrow_mut().toggle();
        let root = root.clone();
        let icon = icon.clone();
        report("theme frame", next_frame(&window, move || report("theme apply", apply(&root, &icon, theme))));
    })?;

    Ok(Some(toggle))
}
