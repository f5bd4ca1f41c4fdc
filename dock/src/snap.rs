//! Nearest-edge snapping.
//!
//! A candidate top-left position is measured against all four viewport edges.
//! The closest edge wins (earlier entries of [`Edge::ALL`] win ties), the
//! dock is pinned `inset` pixels from it, and the coordinate running along
//! that edge is clamped so the dock stays on screen and clear of the corners.
//! Distances are signed: a dock dragged past an edge has a negative distance
//! to it and therefore always prefers that edge.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::edge::Edge;
use crate::geom::{Point, Size};

/// Viewport and dock sizes sampled at the moment of a snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub viewport: Size,
    pub widget: Size,
}

impl Metrics {
    #[must_use]
    pub fn new(viewport: Size, widget: Size) -> Self {
        Self { viewport, widget }
    }

    /// Both boxes have real, positive extents.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.viewport.is_measurable() && self.widget.is_measurable()
    }
}

/// Signed distance from each side of the dock to the matching viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistances {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EdgeDistances {
    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// The closest edge. Only a strictly smaller distance displaces an earlier
    /// edge, so ties go to left, then right, then top.
    #[must_use]
    pub fn nearest(&self) -> Edge {
        let mut best = Edge::Left;
        for edge in Edge::ALL {
            if self.get(edge) < self.get(best) {
                best = edge;
            }
        }
        best
    }
}

/// Where the dock rests and which edge it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub edge: Edge,
}

#[must_use]
pub fn edge_distances(candidate: Point, metrics: &Metrics) -> EdgeDistances {
    let Metrics { viewport, widget } = *metrics;
    EdgeDistances {
        left: candidate.x,
        right: viewport.width - (candidate.x + widget.width),
        top: candidate.y,
        bottom: viewport.height - (candidate.y + widget.height),
    }
}

#[must_use]
pub fn nearest_edge(candidate: Point, metrics: &Metrics) -> Edge {
    edge_distances(candidate, metrics).nearest()
}

/// Snap `candidate` to the nearest edge.
#[must_use]
pub fn snap(candidate: Point, metrics: &Metrics, inset: f64) -> Placement {
    let edge = nearest_edge(candidate, metrics);
    Placement { position: pin_to_edge(candidate, edge, metrics, inset), edge }
}

/// Absolute reset: left edge, `inset` from the left and
/// `inset + viewport_height * fraction` from the top.
#[must_use]
pub fn reset_placement(viewport: Size, inset: f64, fraction: f64) -> Placement {
    Placement {
        position: Point::new(inset, inset + viewport.height * fraction),
        edge: Edge::Left,
    }
}

fn pin_to_edge(candidate: Point, edge: Edge, metrics: &Metrics, inset: f64) -> Point {
    let Metrics { viewport, widget } = *metrics;
    let max_x = viewport.width - widget.width - inset;
    let max_y = viewport.height - widget.height - inset;
    match edge {
        Edge::Left => Point::new(inset, clamp_along(candidate.y, inset, max_y)),
        Edge::Right => Point::new(max_x, clamp_along(candidate.y, inset, max_y)),
        Edge::Top => Point::new(clamp_along(candidate.x, inset, max_x), inset),
        Edge::Bottom => Point::new(clamp_along(candidate.x, inset, max_x), max_y),
    }
}

/// Clamp without panicking when the range is inverted (a viewport too small
/// for the dock); the lower bound wins so the dock hugs the leading corner.
fn clamp_along(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
