//! Elliptic curve points and the chord-and-tangent group law

use crate::ec::curve::Curve;
use crate::modular;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// A point in the group of rational points of a curve.
///
/// The identity (point at infinity) is a distinct variant rather than a
/// magic coordinate value, so the genuine affine point (0, 0) stays
/// representable. Points are plain values compared by coordinates; they
/// carry no reference to the curve they were derived on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The group identity (point at infinity)
    Identity,
    /// An affine point with coordinates in [0, p) × [0, p)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// The group identity
    pub fn identity() -> Self {
        Point::Identity
    }

    /// An affine point from raw coordinates.
    ///
    /// Membership on any particular curve is not checked here; see
    /// [`Curve::contains`].
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

/// (a - b) mod p over non-negative operands
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    modular::reduce(&(BigInt::from(a.clone()) - BigInt::from(b.clone())), p)
}

impl Curve {
    /// Is `point` on this curve?
    ///
    /// The identity is on every curve; an affine point belongs iff
    /// y² ≡ x³ + ax + b (mod p).
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => (y * y) % self.p() == self.rhs(x),
        }
    }

    /// Group addition, total over the group.
    ///
    /// Case analysis in priority order: identity operands pass the other
    /// operand through; distinct x-coordinates take the chord; equal x
    /// with different y are mutual inverses; doubling takes the tangent;
    /// a 2-torsion point (y = 0) doubles to the identity. Degenerate
    /// denominators yield the identity rather than an error.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let (x1, y1) = match lhs.coordinates() {
            None => return rhs.clone(),
            Some(c) => c,
        };
        let (x2, y2) = match rhs.coordinates() {
            None => return lhs.clone(),
            Some(c) => c,
        };
        let p = self.p();

        if x1 != x2 {
            // chord through two distinct points
            let numerator = sub_mod(y2, y1, p);
            let denominator = sub_mod(x2, x1, p);
            if denominator.is_zero() {
                // unreduced inputs can collide mod p; degenerate
                return Point::Identity;
            }
            let slope = match modular::inverse(&denominator, p) {
                Ok(inv) => (numerator * inv) % p,
                Err(_) => return Point::Identity,
            };
            self.chord_tangent_result(&slope, x1, &((x1 + x2) % p), y1)
        } else if y1 != y2 {
            // mutual inverses: same x, opposite y
            Point::Identity
        } else if !y1.is_zero() {
            // tangent at a point with nonzero y
            let numerator = (x1 * x1 * 3u32 + self.a()) % p;
            let denominator = (y1 * 2u32) % p;
            let slope = match modular::inverse(&denominator, p) {
                Ok(inv) => (numerator * inv) % p,
                Err(_) => return Point::Identity,
            };
            self.chord_tangent_result(&slope, x1, &((x1 * 2u32) % p), y1)
        } else {
            // 2-torsion: the tangent is vertical
            Point::Identity
        }
    }

    /// The group inverse of `point`: (x, (p - y) mod p)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (self.p() - y) % self.p(),
            },
        }
    }

    /// Shared tail of the chord and tangent cases:
    /// x₃ = m² - s, y₃ = m(x₁ - x₃) - y₁, where s is x₁+x₂ (chord) or
    /// 2x₁ (tangent).
    fn chord_tangent_result(
        &self,
        slope: &BigUint,
        x1: &BigUint,
        x_sum: &BigUint,
        y1: &BigUint,
    ) -> Point {
        let p = self.p();
        let x3 = sub_mod(&((slope * slope) % p), x_sum, p);
        let y3 = sub_mod(&((slope * sub_mod(x1, &x3, p)) % p), y1, p);
        Point::Affine { x: x3, y: y3 }
    }
}
