//! Browser bindings, compiled to WebAssembly behind the `hydrate` feature.
//!
//! Two execution contexts use this module. The page thread calls
//! [`boot::boot`] once after the module loads; the worker context calls
//! [`worker::boot_worker`] from its host script. The two share no memory —
//! everything crosses the boundary as copied JSON strings.

pub mod backdrop_dom;
pub mod boot;
pub mod prefs;
pub mod seed_worker;
pub mod theme_dom;
pub mod worker;

/// Route `log` records to the console and panics to `console.error`.
///
/// Safe to call more than once; the first installed logger wins.
pub(crate) fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
