//! Theme reflection on the document root.

use crate::theme::Theme;

/// Class added to the `<html>` element while dark mode is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Apply or remove the dark-mode class to match the theme.
pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("document root unavailable; theme not applied");
        return;
    };

    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1(DARK_CLASS)
    } else {
        class_list.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        log::warn!("failed to update the {DARK_CLASS} class");
    }
}
