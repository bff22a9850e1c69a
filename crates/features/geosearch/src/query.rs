//! Search queries and their flat-compiled forms.
//!
//! A query arrives in signed geographic coordinates (the representation the
//! surrounding service validates and passes down). Compilation converts the
//! query's own coordinates to the flat representation exactly once, so the
//! per-record loop only pays for the candidate's conversion and the
//! predicate itself.

use crate::error::{GeoSearchError, Result};
use geohub_rings::{CoordinateSystem, FlatPoint, GeoPoint};
use serde::Deserialize;
use tracing::debug;

/// A circular search area: all records within `radius_meters` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RadiusQuery {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl RadiusQuery {
    /// Converts the query center to flat coordinates once.
    ///
    /// # Errors
    /// Returns [`GeoSearchError::InvalidQuery`] if the center is outside the
    /// valid geographic domain.
    pub fn compile(self, system: &CoordinateSystem) -> Result<CompiledRadius> {
        let center = system
            .to_flat(self.center)
            .map_err(|source| GeoSearchError::InvalidQuery { source })?;

        debug!(
            latitude = self.center.latitude,
            longitude = self.center.longitude,
            radius_meters = self.radius_meters,
            "Radius query compiled"
        );
        Ok(CompiledRadius { center, radius_meters: self.radius_meters })
    }
}

/// A [`RadiusQuery`] with its center already in flat coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledRadius {
    center: FlatPoint,
    radius_meters: f64,
}

impl CompiledRadius {
    /// Evaluates circular containment for one candidate point.
    #[must_use]
    pub fn contains(&self, system: &CoordinateSystem, point: FlatPoint) -> bool {
        system.in_circle(point, self.radius_meters, self.center)
    }
}

/// A rectangular search area spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FrameQuery {
    pub corner_a: GeoPoint,
    pub corner_b: GeoPoint,
}

impl FrameQuery {
    /// Converts both corners to flat coordinates once.
    ///
    /// # Errors
    /// Returns [`GeoSearchError::InvalidQuery`] if either corner is outside
    /// the valid geographic domain.
    pub fn compile(self, system: &CoordinateSystem) -> Result<CompiledFrame> {
        let corner_a = system
            .to_flat(self.corner_a)
            .map_err(|source| GeoSearchError::InvalidQuery { source })?;
        let corner_b = system
            .to_flat(self.corner_b)
            .map_err(|source| GeoSearchError::InvalidQuery { source })?;

        debug!(?corner_a, ?corner_b, "Frame query compiled");
        Ok(CompiledFrame { corner_a, corner_b })
    }
}

/// A [`FrameQuery`] with its corners already in flat coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledFrame {
    corner_a: FlatPoint,
    corner_b: FlatPoint,
}

impl CompiledFrame {
    /// Evaluates rectangular containment for one candidate point.
    #[must_use]
    pub fn contains(&self, system: &CoordinateSystem, point: FlatPoint) -> bool {
        system.in_frame(self.corner_a, point, self.corner_b)
    }
}
