//! # storefront
//!
//! Leptos + WASM client for browsing a remote product catalog.
//!
//! The catalog is fetched once per application load from a public demo API
//! and shared with every page through a reactive context. Pages cover the
//! catalog list, a per-product detail view, and static home/about/fallback
//! views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(crate::app::App);
}
