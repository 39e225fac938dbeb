//! Presentation shim for the seed-generator page.
//!
//! This crate owns the page chrome around the seed generator: the dark/light
//! theme with a persisted preference, the per-load random page background,
//! and the message relay to the worker that hosts the generator itself. The
//! generator is an external module loaded by the worker host script; this
//! crate never looks inside its payloads.
//!
//! The core modules below are pure and build natively with default features.
//! Everything that touches the browser (`localStorage`, `matchMedia`, DOM,
//! worker message ports) lives in [`web`] behind the `hydrate` feature and
//! compiles to WebAssembly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`prefs`] | Persisted theme preference and the [`prefs::PreferenceStore`] seam |
//! | [`theme`] | Effective-theme precedence and the toggle controller |
//! | [`backdrop`] | Background image catalog and uniform selection |
//! | [`relay`] | Worker-side relay state machine and reply envelope |
//! | [`seed_client`] | Main-thread single-flight guard for seed requests |
//! | [`web`] | Browser bindings and the page/worker entry points (`hydrate` only) |

pub mod backdrop;
pub mod prefs;
pub mod relay;
pub mod seed_client;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;
