//! Routed pages.

pub mod desk;
