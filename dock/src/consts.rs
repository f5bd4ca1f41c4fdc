//! Shared numeric constants for the dock crate.

// ── Placement ───────────────────────────────────────────────────

/// Gap between the dock and the viewport edge it is pinned to, in CSS pixels.
/// Also the minimum distance kept from the two adjacent edges.
pub const EDGE_INSET_PX: f64 = 20.0;

/// Fraction of the viewport height used for the reset position's top offset.
pub const RESET_HEIGHT_FRACTION: f64 = 0.25;

/// Seed position used at mount, before the first snap.
pub const MOUNT_SEED_X: f64 = 20.0;
pub const MOUNT_SEED_Y: f64 = 200.0;

// ── Transition ──────────────────────────────────────────────────

/// Duration of the settle animation after a snap or reset, in milliseconds.
pub const SNAP_TRANSITION_MS: u32 = 200;

/// CSS timing function for the settle animation.
pub const SNAP_EASING: &str = "ease-out";
