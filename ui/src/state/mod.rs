//! Shared client-side state modules.
//!
//! Dock placement is owned by the toolbar component itself; only state that
//! hosting pages share through context lives here.

pub mod counter;
