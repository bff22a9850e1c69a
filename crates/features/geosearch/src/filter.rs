//! Per-record filtering of candidate sets.

use crate::error::{GeoSearchError, Result};
use crate::query::{FrameQuery, RadiusQuery};
use geohub_rings::{CoordinateSystem, GeoPoint};
use tracing::debug;

/// A candidate record that exposes its geographic position.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> GeoPoint {
        (*self).location()
    }
}

/// Keeps the candidates within the query's circular area, preserving input
/// order.
///
/// # Errors
/// Returns [`GeoSearchError::InvalidQuery`] if the query center is out of
/// range, or [`GeoSearchError::InvalidRecord`] if any candidate is; an
/// invalid record fails the whole query rather than being skipped.
pub fn within_radius<T: Located>(
    system: &CoordinateSystem,
    query: RadiusQuery,
    candidates: impl IntoIterator<Item = T>,
) -> Result<Vec<T>> {
    let compiled = query.compile(system)?;

    let mut seen = 0usize;
    let mut matches = Vec::new();
    for candidate in candidates {
        seen += 1;
        let point = system
            .to_flat(candidate.location())
            .map_err(|source| GeoSearchError::InvalidRecord { source })?;
        if compiled.contains(system, point) {
            matches.push(candidate);
        }
    }

    debug!(seen, matched = matches.len(), "Radius filter evaluated");
    Ok(matches)
}

/// Keeps the candidates within the query's rectangular frame, preserving
/// input order.
///
/// # Errors
/// Returns [`GeoSearchError::InvalidQuery`] if either corner is out of
/// range, or [`GeoSearchError::InvalidRecord`] if any candidate is; an
/// invalid record fails the whole query rather than being skipped.
pub fn within_frame<T: Located>(
    system: &CoordinateSystem,
    query: FrameQuery,
    candidates: impl IntoIterator<Item = T>,
) -> Result<Vec<T>> {
    let compiled = query.compile(system)?;

    let mut seen = 0usize;
    let mut matches = Vec::new();
    for candidate in candidates {
        seen += 1;
        let point = system
            .to_flat(candidate.location())
            .map_err(|source| GeoSearchError::InvalidRecord { source })?;
        if compiled.contains(system, point) {
            matches.push(candidate);
        }
    }

    debug!(seen, matched = matches.len(), "Frame filter evaluated");
    Ok(matches)
}
