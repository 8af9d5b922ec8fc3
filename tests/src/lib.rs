//! Testing utilities for the curvedh library

use curvedh_algorithms::Curve;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible tests
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// The curve y² = x³ + x + 1 over 𝔽₅, small enough to check by hand
pub fn tiny_curve() -> Curve {
    Curve::new(BigUint::from(1u32), BigUint::from(1u32), BigUint::from(5u32))
        .expect("fixed test curve is nonsingular")
}

/// Every affine point of [`tiny_curve`], enumerated by brute force
pub fn tiny_curve_points() -> Vec<(u64, u64)> {
    vec![(0, 1), (0, 4), (2, 1), (2, 4), (3, 1), (3, 4), (4, 2), (4, 3)]
}
