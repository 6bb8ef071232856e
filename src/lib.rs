//! Cognify - Online Course Platform
//!
//! Leptos front end for browsing courses, following lessons and managing an
//! account against the remote user-management API. `core` holds the
//! UI-independent logic (auth client, validation, forms, catalog); `ui` holds
//! the components and pages.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
