//! Persisted theme preference.
//!
//! The preference is a tri-state value kept in a durable key-value store
//! under a single fixed key. `Unset` defers to the host's ambient dark-mode
//! signal; the two explicit states pin the theme regardless of it. The store
//! itself is an injected seam so the controller can be exercised without a
//! browser.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Fixed storage key for the theme preference.
pub const STORAGE_KEY: &str = "veneer_dark";

/// Persisted user choice between dark and light presentation, or unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Enabled,
    Disabled,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decode the stored form.
    ///
    /// Absence means `Unset`. Any stored value other than `"enabled"` decodes
    /// as `Disabled`: an explicit-but-unrecognized entry must not re-arm the
    /// ambient fallback.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some("enabled") => Self::Enabled,
            Some(_) => Self::Disabled,
        }
    }

    /// Encode for storage. `None` means the key should be absent.
    #[must_use]
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Enabled => Some("enabled"),
            Self::Disabled => Some("disabled"),
            Self::Unset => None,
        }
    }

    /// Whether this preference pins the theme (either direction).
    #[must_use]
    pub fn is_explicit(self) -> bool {
        self != Self::Unset
    }
}

/// Durable store for the theme preference.
///
/// Implementations must be synchronous: a toggle writes the new preference
/// before returning. There is a single writer (the main thread's event
/// handler), so no coordination is required.
pub trait PreferenceStore {
    /// Read the current preference.
    fn load(&self) -> ThemePreference;

    /// Persist a new preference, replacing any previous value.
    fn store(&mut self, pref: ThemePreference);
}

/// In-memory store for tests and headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStore {
    pref: ThemePreference,
}

impl MemoryStore {
    #[must_use]
    pub fn new(pref: ThemePreference) -> Self {
        Self { pref }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> ThemePreference {
        self.pref
    }

    fn store(&mut self, pref: ThemePreference) {
        self.pref = pref;
    }
}
