//! Miller-Rabin probabilistic primality testing
//!
//! Each random witness either proves compositeness or fails to, so a
//! `Composite` verdict is certain while `Prime` carries a false-positive
//! probability of at most 4^-rounds. Composites are almost always rejected
//! by the first witness or two, which keeps the amortized cost of a high
//! round count low during prime searches.

use crate::random;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

#[cfg(test)]
mod tests;

/// Default number of independent witness rounds.
pub const DEFAULT_ROUNDS: u32 = 4000;

/// Verdict of a Miller-Rabin trial sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    /// No witness of compositeness found; error probability <= 4^-rounds
    Prime,
    /// A witness of compositeness was found; certain
    Composite,
}

/// Run `rounds` independent Miller-Rabin trials against `n`.
///
/// Returns `Composite` on the first witness found, else `Prime` once all
/// rounds pass. Small and even inputs are classified directly: n < 2 and
/// even n > 2 are composite, 2 and 3 are prime; the witness loop only ever
/// sees odd n >= 5.
pub fn test<R: CryptoRng + RngCore>(n: &BigUint, rounds: u32, rng: &mut R) -> Primality {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *n < two {
        return Primality::Composite;
    }
    if *n == two || *n == three {
        return Primality::Prime;
    }
    if n.is_even() {
        return Primality::Composite;
    }

    let n_minus_one = n - 1u32;
    let (t, u) = split_power_of_two(&n_minus_one);

    for _ in 0..rounds {
        // witness in [1, n-2]
        let a = random::random_below(rng, &(n - &two)) + 1u32;
        if witnesses_composite(&a, n, t, &u) {
            return Primality::Composite;
        }
    }

    Primality::Prime
}

/// Convenience wrapper: does `n` pass `rounds` Miller-Rabin trials?
pub fn is_probable_prime<R: CryptoRng + RngCore>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    test(n, rounds, rng) == Primality::Prime
}

/// Decompose an even value as `2^t * u` with `u` odd.
fn split_power_of_two(n_minus_one: &BigUint) -> (u64, BigUint) {
    let t = n_minus_one.trailing_zeros().unwrap_or(0);
    (t, n_minus_one >> t)
}

/// Does witness `a` prove `n` composite?
///
/// Computes x0 = a^u mod n, then squares up to t times. Compositeness is
/// witnessed when some x_i = 1 with x_{i-1} not in {1, n-1} (a nontrivial
/// square root of 1), or when the final value x_t != 1.
fn witnesses_composite(a: &BigUint, n: &BigUint, t: u64, u: &BigUint) -> bool {
    let n_minus_one = n - 1u32;
    let mut x = a.modpow(u, n);

    for _ in 0..t {
        let next = (&x * &x) % n;
        if next.is_one() && !x.is_one() && x != n_minus_one {
            return true;
        }
        x = next;
    }

    !x.is_one()
}
