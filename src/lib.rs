//! Mooj-Tech - marketing site for an AI supply chain intelligence platform
//!
//! Server-rendered with Leptos and hydrated in the browser. The motion layer
//! (scroll reveals, header condensing, menu and page transitions, button
//! feedback) lives in [`core`] as timestamp-driven state machines; [`ui`]
//! binds them to DOM events.

#![recursion_limit = "4096"]

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
