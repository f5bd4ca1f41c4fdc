//! Inline style and class derivation for the dock toolbar.
//!
//! Kept free of Leptos so the drag/idle presentation rules are testable
//! natively: no transition while the dock follows the pointer, an eased
//! transition while it settles, and layout classes keyed off the edge.

#[cfg(test)]
#[path = "dock_style_test.rs"]
mod dock_style_test;

use dock::edge::Edge;
use dock::gesture::Dock;

/// Position and transition for the dock root.
#[must_use]
pub fn root_style(dock: &Dock) -> String {
    let p = dock.position();
    let transition = match dock.transition() {
        Some(t) => format!(
            "left {ms}ms {easing}, top {ms}ms {easing}",
            ms = t.duration_ms,
            easing = t.easing
        ),
        None => "none".to_owned(),
    };
    format!("left: {}px; top: {}px; transition: {transition};", p.x, p.y)
}

/// BEM classes for the dock root, plus any caller-supplied class.
#[must_use]
pub fn root_class(dock: &Dock, extra: Option<&str>) -> String {
    let edge = dock.edge();
    let mut class = format!("dock dock--{} dock--edge-{}", edge.orientation().as_str(), edge.as_str());
    if dock.is_dragging() {
        class.push_str(" dock--dragging");
    }
    if let Some(extra) = extra.map(str::trim).filter(|c| !c.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Cursor and glyph rotation for the drag handle.
#[must_use]
pub fn handle_style(dock: &Dock) -> String {
    format!("cursor: {}; transform: rotate({}deg);", dock.cursor(), dock.edge().handle_rotation_deg())
}

/// Tooltip class opening toward the viewport interior.
#[must_use]
pub fn tooltip_class(edge: Edge) -> String {
    format!("dock__tip dock__tip--{}", edge.tooltip_side().as_str())
}
