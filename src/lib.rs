//! # classifier-ui
//!
//! Leptos + WASM frontend for the message-classification page. Replaces the
//! hand-written fetch/DOM script with a Rust-native UI layer that talks to
//! the same two server endpoints: `POST /` submits a message for
//! classification and returns the re-rendered page, `DELETE
//! /delete_message/{id}` removes a history entry.
//!
//! This crate contains the page component, application state, the toast
//! stack, network helpers, and the fragment-splicing DOM layer. Browser-only
//! code is gated behind the `csr` feature; without it the crate compiles to
//! inert stubs so the pure logic can be unit tested on the host.

pub mod app;
pub mod components;
pub mod dom;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook, wire `log` to the browser
/// console, and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
