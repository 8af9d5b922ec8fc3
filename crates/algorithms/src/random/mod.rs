//! Fixed-bit-length random integer and prime sampling
//!
//! Prime searches are rejection-sampling loops. They terminate only
//! probabilistically, so every search carries an attempt bound and fails
//! with [`Error::Exhausted`](crate::Error) instead of blocking forever.

use crate::error::{Error, Result};
use crate::primality;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};


/// Prime-search attempt budget per requested bit of length.
///
/// By the prime number theorem a random `bits`-bit odd integer is prime
/// with probability ~2 / (bits * ln 2), so the expected number of
/// candidates is well under one per bit; 64 per bit makes exhaustion a
/// sign of a broken randomness source rather than bad luck.
const PRIME_SEARCH_ATTEMPTS_PER_BIT: u64 = 64;

/// Random integer of exactly `bits` bits.
///
/// The most significant bit is forced to guarantee the requested bit
/// length; the remaining bits are independently uniform. Oddness is not
/// guaranteed. `bits == 0` yields zero.
pub fn random_bits<R: CryptoRng + RngCore>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let mut n = rng.gen_biguint(bits);
    n.set_bit(bits - 1, true);
    n
}

/// Uniform random integer in `[0, bound)`.
///
/// Returns zero for a zero bound.
pub fn random_below<R: CryptoRng + RngCore>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }
    rng.gen_biguint_below(bound)
}

/// Random probable prime of exactly `bits` bits.
///
/// Rejection-samples [`random_bits`] until a candidate passes `rounds`
/// Miller-Rabin trials.
pub fn random_prime<R: CryptoRng + RngCore>(
    rng: &mut R,
    bits: u64,
    rounds: u32,
) -> Result<BigUint> {
    let attempts = search_budget(bits);
    for _ in 0..attempts {
        let candidate = random_bits(rng, bits);
        if primality::is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
    Err(Error::Exhausted {
        operation: "prime search",
        attempts,
    })
}

/// Random probable prime of the form `4k + 3`, with `k` of exactly `bits` bits.
///
/// The congruence p ≡ 3 (mod 4) is what later allows square roots in the
/// field to be taken by a single exponentiation during point sampling.
pub fn random_curve_prime<R: CryptoRng + RngCore>(
    rng: &mut R,
    bits: u64,
    rounds: u32,
) -> Result<BigUint> {
    let attempts = search_budget(bits);
    for _ in 0..attempts {
        let k = random_bits(rng, bits);
        let candidate = (k << 2u32) + 3u32;
        if primality::is_probable_prime(&candidate, rounds, rng) {
            return Ok(candidate);
        }
    }
    Err(Error::Exhausted {
        operation: "curve prime search",
        attempts,
    })
}

fn search_budget(bits: u64) -> u64 {
    bits.max(2).saturating_mul(PRIME_SEARCH_ATTEMPTS_PER_BIT)
}
