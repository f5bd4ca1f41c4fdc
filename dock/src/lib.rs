//! Placement and gesture engine for the floating action dock.
//!
//! The dock is a small toolbar that the user drags around the dashboard. When
//! released it snaps flush against whichever viewport edge is nearest and
//! re-orients its controls to suit that edge. This crate owns all of that
//! logic with no browser dependencies so it can be tested natively; the `ui`
//! crate only measures the DOM, forwards pointer events, and renders the
//! resulting [`gesture::Dock`] state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gesture`] | Idle/dragging state machine and the [`gesture::Dock`] driver |
//! | [`snap`] | Nearest-edge selection, clamping, and the reset placement |
//! | [`edge`] | Viewport edges and what they imply for layout and tooltips |
//! | [`geom`] | Points and sizes in viewport pixels |
//! | [`config`] | Tunable inset, transition timing, and reset height |
//! | [`consts`] | Default numeric constants |

pub mod config;
pub mod consts;
pub mod edge;
pub mod geom;
pub mod gesture;
pub mod snap;
