//! `localStorage`-backed preference store and the ambient dark-mode signal.

use crate::prefs::{PreferenceStore, STORAGE_KEY, ThemePreference};

/// Preference store over the window's `localStorage`.
///
/// Storage failures degrade to `Unset` on read and are logged on write;
/// persistence here is best-effort decoration, not application state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> ThemePreference {
        let Some(storage) = storage() else {
            return ThemePreference::Unset;
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(_) => ThemePreference::Unset,
        }
    }

    fn store(&mut self, pref: ThemePreference) {
        let Some(storage) = storage() else {
            log::warn!("localStorage unavailable; theme preference not persisted");
            return;
        };
        let result = match pref.as_stored() {
            Some(value) => storage.set_item(STORAGE_KEY, value),
            None => storage.remove_item(STORAGE_KEY),
        };
        if result.is_err() {
            log::warn!("failed to persist theme preference");
        }
    }
}

/// Whether the host reports a system-level dark-mode preference.
///
/// Consulted only when no explicit preference is stored.
#[must_use]
pub fn ambient_prefers_dark() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}
