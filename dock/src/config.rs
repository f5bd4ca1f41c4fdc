//! Dock tuning: edge inset, settle transition, and reset height.
//!
//! Hosts pass a `DockConfig` to the toolbar component; anything omitted from
//! a serialized config falls back to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_INSET_PX, RESET_HEIGHT_FRACTION, SNAP_EASING, SNAP_TRANSITION_MS};

/// Errors from [`DockConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DockConfigError {
    #[error("inset must be a finite, non-negative pixel count (got {0})")]
    InvalidInset(f64),
    #[error("reset fraction must be within 0.0..=1.0 (got {0})")]
    InvalidResetFraction(f64),
    #[error("easing must not be empty")]
    EmptyEasing,
    #[error("easing must be a single CSS timing function (got {0:?})")]
    InvalidEasing(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Gap kept between the dock and every viewport edge it is near.
    pub inset_px: f64,
    /// Settle animation length for snaps and resets.
    pub transition_ms: u32,
    /// CSS timing function for the settle animation.
    pub easing: String,
    /// Reset places the dock this fraction of the viewport height down,
    /// plus the inset.
    pub reset_fraction: f64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            inset_px: EDGE_INSET_PX,
            transition_ms: SNAP_TRANSITION_MS,
            easing: SNAP_EASING.to_owned(),
            reset_fraction: RESET_HEIGHT_FRACTION,
        }
    }
}

impl DockConfig {
    /// Check that every field is usable for placement math and CSS output.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), DockConfigError> {
        if !self.inset_px.is_finite() || self.inset_px < 0.0 {
            return Err(DockConfigError::InvalidInset(self.inset_px));
        }
        if !(0.0..=1.0).contains(&self.reset_fraction) {
            return Err(DockConfigError::InvalidResetFraction(self.reset_fraction));
        }
        if self.easing.trim().is_empty() {
            return Err(DockConfigError::EmptyEasing);
        }
        if self.easing.contains([';', '{', '}']) {
            return Err(DockConfigError::InvalidEasing(self.easing.clone()));
        }
        Ok(())
    }

    /// Validate, falling back to the defaults when invalid.
    #[must_use]
    pub fn validated_or_default(self) -> (Self, Option<DockConfigError>) {
        match self.validate() {
            Ok(()) => (self, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
