//! Page background application.

use crate::backdrop;

/// Write the background-image declaration to the body's `style` attribute.
pub fn apply(image: &str) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("document body unavailable; background not applied");
        return;
    };
    if body.set_attribute("style", &backdrop::style_declaration(image)).is_err() {
        log::warn!("failed to set the page background");
    }
}
