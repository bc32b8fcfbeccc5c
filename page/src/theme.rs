//! Light/dark theme and its persisted preference.
//!
//! The preference is a single string under [`THEME_STORAGE_KEY`]. Storage is
//! reached through [`PreferenceStore`] so the toggle logic can be tested
//! without a browser; `dom::theme` provides the `localStorage` backend.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::consts::THEME_STORAGE_KEY;

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the theme a click would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Key/value string storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when the browser refuses `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeToggle<P> {
    store: P,
    theme: Theme,
}

impl<P: PreferenceStore> ThemeToggle<P> {
    /// Read the saved preference, defaulting to light.
    #[must_use]
    pub fn load(store: P) -> Self {
        let theme = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { store, theme }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }
}
