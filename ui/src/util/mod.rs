//! Browser glue and pure helpers for the dock toolbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Measurement and listener registration touch `web-sys` and only do real
//! work under the `hydrate` feature. Style derivation is pure so it can be
//! tested natively.

pub mod dock_style;
pub mod drag_listeners;
pub mod measure;
