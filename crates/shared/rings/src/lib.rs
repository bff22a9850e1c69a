//! Wraparound coordinate axes as modular-arithmetic rings.
//!
//! Geographic axes wrap: longitude at the ±180° antimeridian, latitude (for
//! frame edge cases) at the poles. Plain linear comparison breaks at those
//! seams, so this crate models each axis as a ring `R/nR` with a fixed
//! modulus and centralizes the seam handling in one place:
//!
//! - [`Ring`] — arithmetic mod `n`, normalisation into `[0, n)`, conversions
//!   between the signed geographic and the unsigned flat representation, and
//!   a wraparound-aware `in_between` interval predicate.
//! - [`CoordinateSystem`] — a latitude `Ring(180)` and a longitude
//!   `Ring(360)` composed into the two spatial predicates consumed by the
//!   query layer: rectangular-frame containment and circular containment.
//!
//! ## Model limits
//!
//! Circular containment is a flat-approximation: the metric radius is turned
//! into an angular radius with a mean Earth radius and compared against the
//! planar squared distance in degree units, with no `cos(latitude)` scaling
//! of the longitude axis. That keeps the predicate exact for the bounded
//! local radii it is used with and cheap to evaluate per record; it is not a
//! geodesic distance and must not be treated as one.
//!
//! All operations are pure and synchronous over immutable inputs; any number
//! of calls may run concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use geohub_rings::prelude::*;
//!
//! # fn main() -> Result<(), RingError> {
//! let earth = CoordinateSystem::earth();
//!
//! let center = earth.to_flat(GeoPoint::new(55.7558, 37.6173))?;
//! let probe = earth.to_flat(GeoPoint::new(55.7600, 37.6200))?;
//!
//! assert!(earth.in_circle(probe, 2_000.0, center));
//! # Ok(())
//! # }
//! ```

mod coords;
mod error;
mod ring;

pub use coords::{CoordinateSystem, EARTH_RADIUS_M, FlatPoint, GeoPoint};
pub use error::{Result, RingError};
pub use ring::Ring;

pub mod prelude {
    pub use crate::coords::{CoordinateSystem, FlatPoint, GeoPoint};
    pub use crate::error::RingError;
    pub use crate::ring::Ring;
}
