//! MyLabelDesk - marketing site for the record label operating system
//!
//! Server-rendered with Leptos and hydrated in the browser. All content is
//! static; the only state is local widget selection and the home page
//! hero sequence.

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
