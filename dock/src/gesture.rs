//! Drag gesture state machine for the dock.
//!
//! `DockState` is either resting against an edge or following the pointer.
//! The grab offset only exists inside `Dragging`, so there is no way to hold
//! an offset while idle or to drag without one. `Dock` drives the transitions
//! and reports what each event did as an [`Outcome`] so the host can log it
//! and attach or detach its document listeners.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::DockConfig;
use crate::consts::{MOUNT_SEED_X, MOUNT_SEED_Y};
use crate::edge::Edge;
use crate::geom::{Point, Size};
use crate::snap::{Metrics, Placement, reset_placement, snap};

/// Pointer button that pressed the drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
    /// Back, forward, pen eraser, and any other auxiliary button.
    Other(i16),
}

impl Button {
    /// Map a DOM `PointerEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DockState {
    /// Resting; position reflects the last snap or reset.
    Idle { placement: Placement },
    /// Following the pointer. `edge` is the edge held before the drag began
    /// and keeps the layout stable until release.
    Dragging { position: Point, edge: Edge, grab: Point },
}

/// What a single event did to the dock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Event did not apply in the current state.
    Ignored,
    DragStarted { grab: Point },
    Moved { position: Point },
    Snapped(Placement),
    /// Drag ended but sizes could not be measured; the dock rests where it
    /// was released.
    SnapSkipped { position: Point },
    Reset(Placement),
}

/// Settle animation to apply to the next position change.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: String,
}

#[derive(Debug, Clone)]
pub struct Dock {
    state: DockState,
    config: DockConfig,
}

impl Dock {
    /// Create the dock from the default seed, snapped if sizes are known.
    #[must_use]
    pub fn new(config: DockConfig, metrics: Option<Metrics>) -> Self {
        Self::mount(config, Point::new(MOUNT_SEED_X, MOUNT_SEED_Y), metrics)
    }

    /// Create the dock at `seed`. With usable metrics the seed is snapped so
    /// the dock starts flush against an edge; otherwise it rests on the left
    /// edge at the raw seed until the first successful snap.
    #[must_use]
    pub fn mount(config: DockConfig, seed: Point, metrics: Option<Metrics>) -> Self {
        let placement = match metrics.filter(Metrics::is_measurable) {
            Some(metrics) => snap(seed, &metrics, config.inset_px),
            None => Placement { position: seed, edge: Edge::Left },
        };
        Self { state: DockState::Idle { placement }, config }
    }

    // --- Events ---

    /// Pointer pressed on the drag handle.
    pub fn pointer_down(&mut self, pointer: Point, button: Button) -> Outcome {
        let DockState::Idle { placement } = self.state else {
            return Outcome::Ignored;
        };
        if button != Button::Primary {
            return Outcome::Ignored;
        }
        let grab = pointer.offset_from(placement.position);
        self.state = DockState::Dragging { position: placement.position, edge: placement.edge, grab };
        Outcome::DragStarted { grab }
    }

    /// Pointer moved anywhere in the document. Movement is unclamped; the
    /// dock may leave the viewport until it is released.
    pub fn pointer_move(&mut self, pointer: Point) -> Outcome {
        let DockState::Dragging { edge, grab, .. } = self.state else {
            return Outcome::Ignored;
        };
        let position = pointer.offset_from(grab);
        self.state = DockState::Dragging { position, edge, grab };
        Outcome::Moved { position }
    }

    /// Pointer released anywhere in the document: snap the release position
    /// to the nearest edge.
    pub fn pointer_up(&mut self, metrics: Option<Metrics>) -> Outcome {
        let DockState::Dragging { position, edge, .. } = self.state else {
            return Outcome::Ignored;
        };
        match metrics.filter(Metrics::is_measurable) {
            Some(metrics) => {
                let placement = snap(position, &metrics, self.config.inset_px);
                self.state = DockState::Idle { placement };
                Outcome::Snapped(placement)
            }
            None => {
                self.state = DockState::Idle { placement: Placement { position, edge } };
                Outcome::SnapSkipped { position }
            }
        }
    }

    /// The browser took the pointer away mid-drag; settle as if released.
    pub fn pointer_cancel(&mut self, metrics: Option<Metrics>) -> Outcome {
        self.pointer_up(metrics)
    }

    /// Return to the left edge, a fixed fraction of the viewport down. Ends
    /// any drag in progress.
    pub fn reset_position(&mut self, viewport: Option<Size>) -> Outcome {
        let Some(viewport) = viewport.filter(|v| v.is_measurable()) else {
            return Outcome::Ignored;
        };
        let placement = reset_placement(viewport, self.config.inset_px, self.config.reset_fraction);
        self.state = DockState::Idle { placement };
        Outcome::Reset(placement)
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> DockState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> Point {
        match self.state {
            DockState::Idle { placement } => placement.position,
            DockState::Dragging { position, .. } => position,
        }
    }

    #[must_use]
    pub fn edge(&self) -> Edge {
        match self.state {
            DockState::Idle { placement } => placement.edge,
            DockState::Dragging { edge, .. } => edge,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DockState::Dragging { .. })
    }

    #[must_use]
    pub fn grab_offset(&self) -> Option<Point> {
        match self.state {
            DockState::Dragging { grab, .. } => Some(grab),
            DockState::Idle { .. } => None,
        }
    }

    /// Animation for position changes: none while following the pointer.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        if self.is_dragging() {
            return None;
        }
        Some(Transition { duration_ms: self.config.transition_ms, easing: self.config.easing.clone() })
    }

    /// CSS cursor for the drag handle.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() { "grabbing" } else { "grab" }
    }
}

impl Default for Dock {
    fn default() -> Self {
        Self::new(DockConfig::default(), None)
    }
}
