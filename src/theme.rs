//! Effective theme and the toggle controller.
//!
//! Precedence at initialization: an explicit stored preference wins, then
//! the ambient (system) dark-mode signal, then light. Initialization never
//! writes the store; only a user toggle does.

use crate::prefs::{PreferenceStore, ThemePreference};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Effective presentation state. Derived, never persisted directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the effective theme from a preference and the ambient signal.
#[must_use]
pub fn effective(pref: ThemePreference, ambient_dark: bool) -> Theme {
    match pref {
        ThemePreference::Enabled => Theme::Dark,
        ThemePreference::Disabled => Theme::Light,
        ThemePreference::Unset => {
            if ambient_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Theme controller over an injected preference store.
///
/// The ambient signal is sampled once at construction; the page does not
/// react to system theme changes mid-session.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    ambient_dark: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    #[must_use]
    pub fn new(store: S, ambient_dark: bool) -> Self {
        Self { store, ambient_dark }
    }

    /// Determine the theme to apply at page load. Does not write the store.
    #[must_use]
    pub fn init(&self) -> Theme {
        effective(self.store.load(), self.ambient_dark)
    }

    /// Flip the effective theme and persist the new explicit preference.
    ///
    /// The store is re-read first to tolerate external changes since
    /// initialization. Flipping the effective state (rather than the raw
    /// stored value) means the first toggle from an ambient-dark page turns
    /// the theme off, which is what the user sees as "currently on".
    pub fn toggle(&mut self) -> Theme {
        let current = effective(self.store.load(), self.ambient_dark);
        let next = if current.is_dark() {
            self.store.store(ThemePreference::Disabled);
            Theme::Light
        } else {
            self.store.store(ThemePreference::Enabled);
            Theme::Dark
        };
        log::debug!("theme toggled to {next:?}");
        next
    }
}
