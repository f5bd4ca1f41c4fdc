//! Viewport edges and the layout each one implies.

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;

use serde::{Deserialize, Serialize};

/// The viewport side the dock is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

/// How the dock lays out its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Controls stacked top to bottom (left/right edges).
    Vertical,
    /// Controls in a single row (top/bottom edges).
    Horizontal,
}

/// Which way tooltips open relative to the control they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipSide {
    Right,
    Left,
    Below,
    Above,
}

impl Edge {
    /// All edges in tie-break order: an earlier edge wins an equal distance.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Vertical,
            Self::Top | Self::Bottom => Orientation::Horizontal,
        }
    }

    /// Tooltips point toward the viewport interior so they are never clipped.
    #[must_use]
    pub fn tooltip_side(self) -> TooltipSide {
        match self {
            Self::Left => TooltipSide::Right,
            Self::Right => TooltipSide::Left,
            Self::Top => TooltipSide::Below,
            Self::Bottom => TooltipSide::Above,
        }
    }

    /// Rotation applied to the drag-handle glyph, in degrees.
    #[must_use]
    pub fn handle_rotation_deg(self) -> f64 {
        match self.orientation() {
            Orientation::Vertical => 90.0,
            Orientation::Horizontal => 0.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl TooltipSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Below => "below",
            Self::Above => "above",
        }
    }
}
