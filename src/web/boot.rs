//! Page bootstrap.
//!
//! The host page loads the module and calls [`boot`] once. Bootstrap runs to
//! completion synchronously: pick and apply a background, resolve and apply
//! the theme, and wire the toggle control. A page missing its required
//! structure fails fast — the error propagates out of [`boot`] as a JS
//! exception at load time.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::backdrop::BackgroundCatalog;
use crate::theme::ThemeController;
use crate::web::prefs::{LocalStorageStore, ambient_prefers_dark};
use crate::web::{backdrop_dom, init_logging, theme_dom};

/// Selector for the toggle control the page is required to ship.
const TOGGLE_SELECTOR: &str = "#theme-toggle";

#[derive(Debug, Error)]
pub enum BootError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("toggle control #theme-toggle not found")]
    MissingToggle,
    #[error("failed to query the toggle control")]
    BadSelector,
    #[error("failed to attach the toggle listener")]
    ListenerRejected,
}

impl From<BootError> for JsValue {
    fn from(err: BootError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Bootstrap the page chrome.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    randomize_background();
    init_theme(&document)?;

    log::debug!("page chrome initialized");
    Ok(())
}

/// Pick one shipped background at random and apply it.
fn randomize_background() {
    let catalog = BackgroundCatalog::shipped();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    backdrop_dom::apply(catalog.choose(&mut rng));
}

/// Apply the effective theme and wire the toggle control.
fn init_theme(document: &web_sys::Document) -> Result<(), BootError> {
    let mut controller = ThemeController::new(LocalStorageStore, ambient_prefers_dark());
    theme_dom::apply(controller.init());

    let toggle = document
        .query_selector(TOGGLE_SELECTOR)
        .map_err(|_| BootError::BadSelector)?
        .ok_or(BootError::MissingToggle)?;

    let on_click = Closure::<dyn FnMut()>::new(move || {
        theme_dom::apply(controller.toggle());
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| BootError::ListenerRejected)?;
    on_click.forget();

    Ok(())
}
