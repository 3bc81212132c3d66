//! integration-loader web server and UI.
//!
//! This crate provides the Leptos-based interface for loading records from
//! connected integrations (Notion, Airtable, HubSpot) and browsing them
//! grouped by container.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
