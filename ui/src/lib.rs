//! # ui
//!
//! Leptos + WASM front end for the shipdock fulfillment desk.
//!
//! The interesting piece is [`components::dock_toolbar::DockToolbar`], a
//! floating action dock that can be dragged anywhere and snaps to the
//! nearest viewport edge on release. Placement math and the drag state
//! machine live in the browser-free `dock` crate; this crate measures the
//! DOM, wires pointer events, and renders.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
