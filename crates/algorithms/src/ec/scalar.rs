//! Scalar multiplication and the private-scalar type

use crate::ec::curve::Curve;
use crate::ec::point::Point;
use crate::random;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::Zeroize;

impl Curve {
    /// Scalar multiplication `n * point` by double-and-add.
    ///
    /// Walks the binary representation of `n` from the least significant
    /// bit, doubling a running power of `point` and accumulating it where
    /// the bit is set — O(log n) group operations. `n = 0` yields the
    /// identity, `n = 1` yields the point itself. Closure follows from the
    /// group law, so the result is on the same curve as the input.
    pub fn mul(&self, point: &Point, n: &BigUint) -> Point {
        if n.is_zero() || point.is_identity() {
            return Point::identity();
        }

        let mut power = point.clone();
        let mut acc = if n.bit(0) {
            point.clone()
        } else {
            Point::identity()
        };
        for i in 1..n.bits() {
            power = self.add(&power, &power);
            if n.bit(i) {
                acc = self.add(&acc, &power);
            }
        }
        acc
    }
}

/// A private scalar for key agreement.
///
/// Never transmitted; zeroed on drop. Zeroization is best effort: an
/// arbitrary-precision integer can leave stale copies behind when its
/// backing allocation grows, so this narrows the exposure window rather
/// than eliminating it. `Debug` redacts the value.
#[derive(Clone)]
pub struct SecretScalar(BigUint);

impl SecretScalar {
    /// Sample a random scalar of exactly `bits` bits.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R, bits: u64) -> Self {
        SecretScalar(random::random_bits(rng, bits))
    }

    /// Wrap an explicit scalar value.
    pub fn from_integer(n: BigUint) -> Self {
        SecretScalar(n)
    }

    /// Expose the scalar for group arithmetic.
    pub fn expose(&self) -> &BigUint {
        &self.0
    }
}

impl Zeroize for SecretScalar {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar(<redacted>)")
    }
}
