//! Elliptic curve group primitives over random prime fields
//!
//! The group of rational points of y² = x³ + ax + b over 𝔽ₚ:
//! - random generation of nonsingular curve parameters with p ≡ 3 (mod 4),
//! - random point sampling via the quadratic-residue filter,
//! - the full chord-and-tangent addition law with all special cases,
//! - double-and-add scalar multiplication.
//!
//! Unlike a fixed-curve implementation, every operation here is generic
//! over the curve parameters carried in [`Curve`], and all arithmetic is
//! arbitrary-precision and variable-time.

mod curve;
mod point;
mod scalar;

pub use curve::{Curve, Legendre};
pub use point::Point;
pub use scalar::SecretScalar;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Generate a keypair against published domain parameters: a random
/// private scalar of `scalar_bits` bits and the matching public point.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: &Curve,
    generator: &Point,
    scalar_bits: u64,
) -> (SecretScalar, Point) {
    let secret = SecretScalar::random(rng, scalar_bits);
    let public = curve.mul(generator, secret.expose());
    (secret, public)
}

/// Generate full domain parameters: a fresh random curve and a random
/// base point on it.
pub fn generate_domain<R: CryptoRng + RngCore>(
    rng: &mut R,
    prime_bits: u64,
    rounds: u32,
) -> Result<(Curve, Point)> {
    let curve = Curve::generate(rng, prime_bits, rounds)?;
    let base = curve.random_point(rng)?;
    Ok((curve, base))
}
