//! # Geosearch Errors
//!
//! Conversion failures from the ring layer, split by whose coordinates were
//! at fault: the query's own input or a candidate record. The caller above
//! this layer owns the policy for either case.

use geohub_rings::RingError;
use thiserror::Error;

/// A specialized [`Result`] type for geosearch operations.
pub type Result<T> = std::result::Result<T, GeoSearchError>;

/// A specialized [`GeoSearchError`] enum for search failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoSearchError {
    /// The query's own coordinates are outside the valid geographic domain.
    #[error("query coordinates are out of range: {source}")]
    InvalidQuery {
        #[source]
        source: RingError,
    },

    /// A candidate record carries coordinates outside the valid geographic
    /// domain. The whole query fails; no record is silently skipped.
    #[error("candidate record coordinates are out of range: {source}")]
    InvalidRecord {
        #[source]
        source: RingError,
    },
}
