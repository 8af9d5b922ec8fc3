//! Modular arithmetic over arbitrary-precision integers
//!
//! Leaf module for everything else in this crate: residue normalization and
//! the extended-Euclidean modular inverse. All reductions normalize to the
//! least non-negative residue, since `%` on a negative `BigInt` keeps the
//! sign of the dividend.

use crate::error::{validate, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};


/// Least non-negative residue of `a` mod `m`.
///
/// Handles negative `a`. Caller contract: `m > 0`.
pub fn reduce(a: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let r = ((a % &m) + &m) % &m;
    r.to_biguint().expect("residue of a positive modulus is non-negative")
}

/// Modular multiplicative inverse: the unique `x` in `[0, m)` with
/// `a * x ≡ 1 (mod m)`.
///
/// Extended Euclidean algorithm. Fails with a parameter error when
/// `gcd(a, m) != 1` or `m < 2`, rather than returning a meaningless value.
pub fn inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    validate::parameter(*m >= BigUint::from(2u32), "modulus", "must be at least 2")?;

    let modulus = BigInt::from(m.clone());
    let mut r0 = BigInt::from(a.clone()) % &modulus;
    let mut r1 = modulus.clone();
    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let x2 = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, x2);
    }

    // r0 is now gcd(a, m); invertibility requires it to be 1
    validate::parameter(r0.is_one(), "operand", "not coprime with the modulus")?;
    Ok(reduce(&x0, m))
}
