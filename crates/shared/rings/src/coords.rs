//! The geographic composition: two rings, two containment predicates.

use crate::error::Result;
use crate::ring::Ring;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean Earth radius in meters, used to convert metric radii into angular
/// degrees for [`CoordinateSystem::in_circle`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A coordinate pair in the conventional signed representation:
/// `latitude` in `[-90, 90]`, `longitude` in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A coordinate pair in the ring-normalised flat representation:
/// `x` (longitude axis) in `[0, 360)`, `y` (latitude axis) in `[0, 180)`.
///
/// All predicate math runs on flat points; convert via
/// [`CoordinateSystem::to_flat`] before evaluating containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatPoint {
    pub x: f64,
    pub y: f64,
}

impl FlatPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A latitude ring and a longitude ring composed into geographic predicates.
///
/// The two rings are held by value; the whole system is an immutable, cheap
/// `Copy` composition with no record-specific state, constructed once per
/// request or kept around as a stateless singleton.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    latitude: Ring,
    longitude: Ring,
}

impl CoordinateSystem {
    /// The Earth composition: latitude on a 180-ring, longitude on a
    /// 360-ring.
    #[must_use]
    pub fn earth() -> Self {
        Self { latitude: Ring::new(180), longitude: Ring::new(360) }
    }

    /// Returns the latitude axis ring.
    #[must_use]
    pub const fn latitude_ring(&self) -> Ring {
        self.latitude
    }

    /// Returns the longitude axis ring.
    #[must_use]
    pub const fn longitude_ring(&self) -> Ring {
        self.longitude
    }

    /// Converts a signed geographic point to the flat representation,
    /// component-wise.
    ///
    /// # Errors
    /// Returns [`RingError::Range`](crate::RingError::Range) if either
    /// component is outside its ring's signed half-range.
    pub fn to_flat(&self, point: GeoPoint) -> Result<FlatPoint> {
        Ok(FlatPoint {
            x: self.longitude.to_flat(point.longitude)?,
            y: self.latitude.to_flat(point.latitude)?,
        })
    }

    /// Converts a flat point back to the signed geographic representation,
    /// component-wise. Inverse of [`CoordinateSystem::to_flat`] over the
    /// valid domains.
    ///
    /// # Errors
    /// Returns [`RingError::Range`](crate::RingError::Range) if either
    /// component is outside `[0, n]` for its axis.
    pub fn to_geographical(&self, point: FlatPoint) -> Result<GeoPoint> {
        Ok(GeoPoint {
            latitude: self.latitude.to_geographical(point.y)?,
            longitude: self.longitude.to_geographical(point.x)?,
        })
    }

    /// Normalises both components onto their rings.
    #[must_use]
    pub fn normalise(&self, point: FlatPoint) -> FlatPoint {
        FlatPoint { x: self.longitude.normalise(point.x), y: self.latitude.normalise(point.y) }
    }

    /// Returns `true` iff `query` lies inside the axis-aligned rectangle
    /// spanned by the two corners. Symmetric in the corner arguments.
    ///
    /// Each axis takes the plain numeric min/max of the two corner
    /// components and then checks wraparound-aware interval membership on
    /// that axis's ring. The min/max step itself is *not* wraparound-aware:
    /// corners supplied "the wrong way" across the antimeridian span the
    /// literal long-way rectangle, and no corner reordering is inferred.
    #[must_use]
    pub fn in_frame(&self, corner_a: FlatPoint, query: FlatPoint, corner_b: FlatPoint) -> bool {
        let (x_min, x_max) = (corner_a.x.min(corner_b.x), corner_a.x.max(corner_b.x));
        let (y_min, y_max) = (corner_a.y.min(corner_b.y), corner_a.y.max(corner_b.y));

        self.longitude.in_between(x_min, query.x, x_max)
            && self.latitude.in_between(y_min, query.y, y_max)
    }

    /// Returns `true` iff `point` lies within `radius_meters` of `center`.
    ///
    /// The metric radius becomes an angular radius via the mean Earth
    /// radius, and the comparison is the planar Euclidean squared distance
    /// in degree units. There is deliberately no `cos(latitude)` correction
    /// of the longitude delta: the predicate is a small-region
    /// flat-approximation whose result set downstream consumers rely on.
    #[must_use]
    pub fn in_circle(&self, point: FlatPoint, radius_meters: f64, center: FlatPoint) -> bool {
        let angular_radius = radius_meters / EARTH_RADIUS_M * 180.0 / PI;
        let dx = point.x - center.x;
        let dy = point.y - center.y;

        dx * dx + dy * dy <= angular_radius * angular_radius
    }
}
