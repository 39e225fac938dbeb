use super::*;
use crate::prefs::{MemoryStore, PreferenceStore, ThemePreference};

/// Store wrapper that counts writes, for asserting init is read-only.
struct SpyStore {
    inner: MemoryStore,
    writes: usize,
}

impl SpyStore {
    fn new(pref: ThemePreference) -> Self {
        Self { inner: MemoryStore::new(pref), writes: 0 }
    }
}

impl PreferenceStore for SpyStore {
    fn load(&self) -> ThemePreference {
        self.inner.load()
    }

    fn store(&mut self, pref: ThemePreference) {
        self.writes += 1;
        self.inner.store(pref);
    }
}

// =============================================================
// Effective-theme precedence
// =============================================================

#[test]
fn explicit_enabled_is_dark_regardless_of_ambient() {
    assert_eq!(effective(ThemePreference::Enabled, false), Theme::Dark);
    assert_eq!(effective(ThemePreference::Enabled, true), Theme::Dark);
}

#[test]
fn explicit_disabled_is_light_regardless_of_ambient() {
    assert_eq!(effective(ThemePreference::Disabled, false), Theme::Light);
    assert_eq!(effective(ThemePreference::Disabled, true), Theme::Light);
}

#[test]
fn unset_defers_to_ambient_signal() {
    assert_eq!(effective(ThemePreference::Unset, true), Theme::Dark);
    assert_eq!(effective(ThemePreference::Unset, false), Theme::Light);
}

#[test]
fn init_matches_effective_for_all_starting_states() {
    let prefs = [
        ThemePreference::Enabled,
        ThemePreference::Disabled,
        ThemePreference::Unset,
    ];
    for pref in prefs {
        for ambient in [false, true] {
            let ctl = ThemeController::new(MemoryStore::new(pref), ambient);
            assert_eq!(ctl.init(), effective(pref, ambient), "pref {pref:?} ambient {ambient}");
        }
    }
}

#[test]
fn init_never_writes_the_store() {
    for pref in [
        ThemePreference::Enabled,
        ThemePreference::Disabled,
        ThemePreference::Unset,
    ] {
        let ctl = ThemeController::new(SpyStore::new(pref), true);
        let _theme = ctl.init();
        assert_eq!(ctl.store.writes, 0, "pref {pref:?}");
    }
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_dark_disables_and_persists() {
    let mut ctl = ThemeController::new(SpyStore::new(ThemePreference::Enabled), false);
    assert_eq!(ctl.toggle(), Theme::Light);
    assert_eq!(ctl.store.load(), ThemePreference::Disabled);
    assert_eq!(ctl.store.writes, 1);
}

#[test]
fn toggle_from_light_enables_and_persists() {
    let mut ctl = ThemeController::new(SpyStore::new(ThemePreference::Disabled), true);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.store.load(), ThemePreference::Enabled);
    assert_eq!(ctl.store.writes, 1);
}

#[test]
fn toggle_twice_restores_an_explicit_preference() {
    for pref in [ThemePreference::Enabled, ThemePreference::Disabled] {
        for ambient in [false, true] {
            let mut ctl = ThemeController::new(MemoryStore::new(pref), ambient);
            let first = ctl.toggle();
            let second = ctl.toggle();
            assert_ne!(first, second);
            assert_eq!(ctl.store.load(), pref, "pref {pref:?} ambient {ambient}");
        }
    }
}

#[test]
fn toggle_twice_restores_the_effective_theme_from_unset() {
    for ambient in [false, true] {
        let mut ctl = ThemeController::new(MemoryStore::new(ThemePreference::Unset), ambient);
        let original = ctl.init();
        ctl.toggle();
        ctl.toggle();
        assert_eq!(ctl.init(), original, "ambient {ambient}");
    }
}

#[test]
fn toggle_respects_external_store_changes_since_init() {
    let mut ctl = ThemeController::new(MemoryStore::new(ThemePreference::Disabled), false);
    assert_eq!(ctl.init(), Theme::Light);

    // Another tab flipped the preference after our init.
    ctl.store.store(ThemePreference::Enabled);

    // Toggle must act on the re-read value: effective dark, so disable.
    assert_eq!(ctl.toggle(), Theme::Light);
    assert_eq!(ctl.store.load(), ThemePreference::Disabled);
}

// =============================================================
// Scenario: absent preference, ambient dark
// =============================================================

#[test]
fn ambient_dark_applies_without_writing_then_first_toggle_disables() {
    let mut ctl = ThemeController::new(SpyStore::new(ThemePreference::Unset), true);

    assert_eq!(ctl.init(), Theme::Dark);
    assert_eq!(ctl.store.writes, 0);

    assert_eq!(ctl.toggle(), Theme::Light);
    assert_eq!(ctl.store.load(), ThemePreference::Disabled);
    assert_eq!(ctl.store.writes, 1);
}
