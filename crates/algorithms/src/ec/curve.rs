//! Curve parameters: validation, random generation, and point sampling

use crate::ec::point::Point;
use crate::error::{validate, Error, Result};
use crate::random;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng, RngCore};

/// Attempt budget for the nonsingularity and point searches.
///
/// Each point-sampling attempt succeeds with probability ~1/2 (half the
/// nonzero residues are squares) and a random (a, b) pair is singular with
/// negligible probability, so 256 attempts bound the failure rate far below
/// anything observable.
const CURVE_SEARCH_ATTEMPTS: u64 = 256;

/// Quadratic character of a field element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legendre {
    /// The element is zero mod p
    Zero,
    /// The element is a nonzero quadratic residue
    Residue,
    /// The element is a quadratic non-residue
    NonResidue,
}

/// A short Weierstrass curve y² = x³ + ax + b over the prime field 𝔽ₚ.
///
/// Immutable once constructed. Coefficients are stored fully reduced into
/// `[0, p)`. Nonsingularity (4a³ + 27b² ≢ 0 mod p) is enforced at
/// construction; primality of `p` is the caller's contract and is
/// guaranteed by [`Curve::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    a: BigUint,
    b: BigUint,
    p: BigUint,
}

impl Curve {
    /// Build a curve from explicit parameters.
    ///
    /// `a` and `b` are reduced mod `p`. Rejects moduli below 3, even
    /// moduli, and singular parameter pairs. Does not require
    /// p ≡ 3 (mod 4); only [`Curve::random_point`] needs that congruence
    /// and checks it itself.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Result<Self> {
        validate::parameter(p >= BigUint::from(3u32), "field modulus", "must be at least 3")?;
        validate::parameter(p.is_odd(), "field modulus", "must be odd")?;
        let curve = Curve {
            a: &a % &p,
            b: &b % &p,
            p,
        };
        validate::parameter(
            !curve.discriminant().is_zero(),
            "curve parameters",
            "singular: 4a³ + 27b² ≡ 0 (mod p)",
        )?;
        Ok(curve)
    }

    /// Generate a random nonsingular curve over a fresh prime field.
    ///
    /// The modulus comes from [`random::random_curve_prime`], so
    /// p ≡ 3 (mod 4) and p has `prime_bits + 2` bits. Coefficients are
    /// sampled with bit lengths drawn from `[2, prime_bits - 1]` until the
    /// pair is nonsingular; termination is probabilistic, so the search is
    /// bounded and can fail with an exhaustion error.
    pub fn generate<R: CryptoRng + RngCore>(
        rng: &mut R,
        prime_bits: u64,
        rounds: u32,
    ) -> Result<Self> {
        validate::parameter(prime_bits >= 4, "prime_bits", "must be at least 4")?;
        let p = random::random_curve_prime(rng, prime_bits, rounds)?;

        for _ in 0..CURVE_SEARCH_ATTEMPTS {
            let a_bits = rng.gen_range(2..prime_bits);
            let a = random::random_bits(rng, a_bits);
            let b_bits = rng.gen_range(2..prime_bits);
            let b = random::random_bits(rng, b_bits);
            match Curve::new(a, b, p.clone()) {
                Ok(curve) => return Ok(curve),
                Err(_) => continue,
            }
        }
        Err(Error::Exhausted {
            operation: "curve search",
            attempts: CURVE_SEARCH_ATTEMPTS,
        })
    }

    /// Coefficient `a`
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field modulus `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Discriminant-like quantity (4a³ + 27b²) mod p.
    ///
    /// Nonzero iff the curve has no repeated roots, which is what makes
    /// the group law total.
    pub fn discriminant(&self) -> BigUint {
        let a_cubed = self.a.modpow(&BigUint::from(3u32), &self.p);
        let b_squared = self.b.modpow(&BigUint::from(2u32), &self.p);
        (a_cubed * 4u32 + b_squared * 27u32) % &self.p
    }

    /// Right-hand side of the curve equation: (x³ + ax + b) mod p
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let x_cubed = x.modpow(&BigUint::from(3u32), &self.p);
        (x_cubed + &self.a * x + &self.b) % &self.p
    }

    /// Quadratic character of `v` mod p via Euler's criterion:
    /// v^((p-1)/2) mod p.
    pub fn legendre(&self, v: &BigUint) -> Legendre {
        let exponent = (&self.p - 1u32) >> 1u32;
        let r = v.modpow(&exponent, &self.p);
        if r.is_zero() {
            Legendre::Zero
        } else if r.is_one() {
            Legendre::Residue
        } else {
            Legendre::NonResidue
        }
    }

    /// Sample a random affine point on the curve.
    ///
    /// Rejection sampling: draw x, keep it when f = x³ + ax + b is a
    /// nonzero quadratic residue, and recover y = f^((p+1)/4) mod p. That
    /// square-root shortcut is valid only because p ≡ 3 (mod 4), which is
    /// checked up front. The recovered root is verified against f and a
    /// mismatch restarts the loop. Never yields the identity.
    pub fn random_point<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Point> {
        validate::parameter(
            (&self.p % 4u32) == BigUint::from(3u32),
            "field modulus",
            "point sampling requires p ≡ 3 (mod 4)",
        )?;
        let sqrt_exponent = (&self.p + 1u32) >> 2u32;

        for _ in 0..CURVE_SEARCH_ATTEMPTS {
            let x = random::random_bits(rng, self.p.bits()) % &self.p;
            let f = self.rhs(&x);
            if self.legendre(&f) != Legendre::Residue {
                continue;
            }
            let y = f.modpow(&sqrt_exponent, &self.p);
            // root check should always pass over a prime field; a failure
            // is treated as a retry signal, not a fatal error
            if (&y * &y) % &self.p == f {
                return Ok(Point::affine(x, y));
            }
        }
        Err(Error::Exhausted {
            operation: "point search",
            attempts: CURVE_SEARCH_ATTEMPTS,
        })
    }
}
