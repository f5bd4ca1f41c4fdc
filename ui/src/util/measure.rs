//! Viewport and element measurement for dock snapping.
//!
//! Sizes are read fresh on every snap; nothing here caches or subscribes to
//! resize events. A failed measurement is not surfaced to the user: callers
//! log it and skip the snap.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use dock::geom::Size;
use dock::snap::Metrics;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasureError {
    #[error("no browser window")]
    NoWindow,
    #[error("dock element is not mounted")]
    NotMounted,
    #[error("{what} size is not a number")]
    NotANumber { what: &'static str },
    #[error("{what} has unusable size {width}x{height}")]
    Degenerate { what: &'static str, width: f64, height: f64 },
}

/// Accept a measured box only if both extents are finite and positive.
///
/// # Errors
///
/// Returns [`MeasureError::Degenerate`] for zero, negative, or non-finite sizes.
pub fn checked_size(what: &'static str, width: f64, height: f64) -> Result<Size, MeasureError> {
    let size = Size::new(width, height);
    if size.is_measurable() {
        Ok(size)
    } else {
        Err(MeasureError::Degenerate { what, width, height })
    }
}

/// Current `innerWidth` × `innerHeight` of the browser window.
///
/// # Errors
///
/// Fails outside the browser, or when the window reports no usable size.
pub fn viewport_size() -> Result<Size, MeasureError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
        let width = window
            .inner_width()
            .map_err(|_| MeasureError::NotANumber { what: "viewport" })?
            .as_f64()
            .ok_or(MeasureError::NotANumber { what: "viewport" })?;
        let height = window
            .inner_height()
            .map_err(|_| MeasureError::NotANumber { what: "viewport" })?
            .as_f64()
            .ok_or(MeasureError::NotANumber { what: "viewport" })?;
        checked_size("viewport", width, height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(MeasureError::NoWindow)
    }
}

/// Rendered size of the dock's root element.
///
/// # Errors
///
/// Fails before mount, outside the browser, or for an element with no layout.
pub fn element_size(node: NodeRef<leptos::html::Div>) -> Result<Size, MeasureError> {
    #[cfg(feature = "hydrate")]
    {
        let el = node.get_untracked().ok_or(MeasureError::NotMounted)?;
        let rect = el.get_bounding_client_rect();
        checked_size("dock", rect.width(), rect.height())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        Err(MeasureError::NoWindow)
    }
}

/// Viewport and dock sizes together, as needed by a snap.
///
/// # Errors
///
/// Propagates the first failed measurement.
pub fn metrics(node: NodeRef<leptos::html::Div>) -> Result<Metrics, MeasureError> {
    Ok(Metrics::new(viewport_size()?, element_size(node)?))
}
