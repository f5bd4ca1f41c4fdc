//! Reusable UI component modules.

pub mod dock_toolbar;
