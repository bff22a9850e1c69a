//! Modular arithmetic and wraparound interval logic over a fixed modulus.

use crate::error::{Result, RingError};

/// An immutable modular-arithmetic ring `R/nR` over a positive integer
/// modulus `n`.
///
/// The ring operates on real-valued scalars interpreted as residues in
/// `[0, n)` and holds no state beyond its modulus, so it is `Copy` and can be
/// shared freely across threads. Two signed/unsigned representations are
/// supported for each axis:
///
/// - **flat**: the unsigned internal representation in `[0, n)`, convenient
///   for modular comparison;
/// - **geographic**: the conventional signed representation in
///   `[-n/2, n/2)`.
///
/// [`Ring::in_between`] answers interval membership across the `n -> 0` seam
/// where plain linear comparison fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    modulus: f64,
    half: f64,
}

impl Ring {
    /// Creates a ring over the given modulus.
    ///
    /// The half-range used by the signed conversions is the *integer* half
    /// of the modulus.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    #[must_use]
    pub fn new(modulus: u32) -> Self {
        assert!(modulus > 0, "ring modulus must be positive");
        Self { modulus: f64::from(modulus), half: f64::from(modulus / 2) }
    }

    /// Returns the modulus `n` as a real number.
    #[must_use]
    pub const fn modulus(self) -> f64 {
        self.modulus
    }

    /// Maps any real value onto the ring, into `[0, n)`.
    ///
    /// Negative values wrap around the seam rather than truncating toward
    /// zero: `-10` on a 360-ring lands on `350`. The reduction is the exact
    /// two-step `(n - (|v| mod n)) mod n`, whose outer `mod` degenerates the
    /// `|v| mod n == 0` case back to `0`.
    #[must_use]
    pub fn normalise(self, value: f64) -> f64 {
        if value < 0.0 {
            let reduced = value.abs() % self.modulus;
            (self.modulus - reduced) % self.modulus
        } else {
            value % self.modulus
        }
    }

    /// Adds two values on the ring.
    #[must_use]
    pub fn add(self, a: f64, b: f64) -> f64 {
        self.normalise(a + b)
    }

    /// Subtracts `b` from `a` on the ring.
    #[must_use]
    pub fn sub(self, a: f64, b: f64) -> f64 {
        self.normalise(a - b)
    }

    /// Multiplies two values on the ring.
    #[must_use]
    pub fn mul(self, a: f64, b: f64) -> f64 {
        self.normalise(a * b)
    }

    /// Divides `a` by `b` on the ring. This is real division followed by
    /// normalisation, not a modular inverse.
    ///
    /// # Errors
    /// Returns [`RingError::DivisionByZero`] if `b` is zero.
    pub fn div(self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(RingError::DivisionByZero);
        }
        Ok(self.normalise(a / b))
    }

    /// Raises `a` to the power `b` on the ring.
    #[must_use]
    pub fn pow(self, a: f64, b: f64) -> f64 {
        self.normalise(a.powf(b))
    }

    /// Takes the square root of `a` on the ring.
    ///
    /// # Errors
    /// Returns [`RingError::Domain`] if `a` is negative.
    pub fn sqrt(self, a: f64) -> Result<f64> {
        if a < 0.0 {
            return Err(RingError::Domain { function: "sqrt", argument: a });
        }
        Ok(self.normalise(a.sqrt()))
    }

    /// Raises Euler's number to the power `a` on the ring.
    #[must_use]
    pub fn exp(self, a: f64) -> f64 {
        self.normalise(a.exp())
    }

    /// Takes the base-`base` logarithm of `a` on the ring.
    ///
    /// # Errors
    /// Returns [`RingError::Domain`] if `a` or `base` is not positive.
    pub fn log(self, a: f64, base: f64) -> Result<f64> {
        if a <= 0.0 {
            return Err(RingError::Domain { function: "log", argument: a });
        }
        if base <= 0.0 {
            return Err(RingError::Domain { function: "log", argument: base });
        }
        Ok(self.normalise(a.log(base)))
    }

    /// Maps a flat value in `[0, n]` to the signed geographic representation
    /// by shifting it down by the integer half of the modulus.
    ///
    /// The closed upper endpoint `n` is accepted and maps to `n/2`.
    ///
    /// # Errors
    /// Returns [`RingError::Range`] if `value` is negative or exceeds the
    /// modulus.
    pub fn to_geographical(self, value: f64) -> Result<f64> {
        if value < 0.0 || value > self.modulus {
            return Err(RingError::Range { value, min: 0.0, max: self.modulus });
        }
        Ok(value - self.half)
    }

    /// Maps a signed geographic value in `[-n/2, n/2]` to the unsigned flat
    /// representation in `[0, n)`.
    ///
    /// # Errors
    /// Returns [`RingError::Range`] if `|value|` exceeds the integer half of
    /// the modulus.
    pub fn to_flat(self, value: f64) -> Result<f64> {
        if value.abs() > self.half {
            return Err(RingError::Range { value, min: -self.half, max: self.half });
        }
        Ok(self.normalise(value + self.half))
    }

    /// Returns `true` iff `probe` lies in the closed wraparound interval
    /// from `start` to `end`, going in the increasing direction.
    ///
    /// When the interval crosses the `n -> 0` seam (`start > end`), all
    /// three values are rotated by `-start` so the interval begins at zero,
    /// and the comparison proceeds linearly. An interval from `350` to `10`
    /// on a 360-ring therefore contains `5`.
    #[must_use]
    pub fn in_between(self, start: f64, probe: f64, end: f64) -> bool {
        if start > end {
            let end = self.sub(end, start);
            let probe = self.sub(probe, start);
            (0.0..=end).contains(&probe)
        } else {
            (start..=end).contains(&probe)
        }
    }
}
