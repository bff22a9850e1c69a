//! Geographic search over candidate record sets.
//!
//! This crate is the query layer sitting on top of `geohub_rings`: it takes a
//! radius or frame query in signed geographic coordinates, compiles it to the
//! flat representation exactly once, then evaluates the containment predicate
//! per candidate record and keeps the matches. Candidates come from the
//! caller as plain in-memory sequences; storage and transport stay outside.
//!
//! ## Example
//!
//! ```rust
//! use geohub_geosearch::prelude::*;
//! use geohub_rings::{CoordinateSystem, GeoPoint};
//!
//! # fn main() -> Result<(), GeoSearchError> {
//! let earth = CoordinateSystem::earth();
//! let query = RadiusQuery {
//!     center: GeoPoint::new(55.7558, 37.6173),
//!     radius_meters: 10_000.0,
//! };
//!
//! let candidates = vec![GeoPoint::new(55.7600, 37.6200), GeoPoint::new(48.8566, 2.3522)];
//! let matches = within_radius(&earth, query, candidates)?;
//! assert_eq!(matches.len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod filter;
mod query;

pub use error::{GeoSearchError, Result};
pub use filter::{Located, within_frame, within_radius};
pub use query::{CompiledFrame, CompiledRadius, FrameQuery, RadiusQuery};

pub mod prelude {
    pub use crate::error::GeoSearchError;
    pub use crate::filter::{Located, within_frame, within_radius};
    pub use crate::query::{FrameQuery, RadiusQuery};
}
