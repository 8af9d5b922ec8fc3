use super::*;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x70726d65)
}

fn verdict(n: u64, rounds: u32) -> Primality {
    test(&BigUint::from(n), rounds, &mut rng())
}

#[test]
fn test_known_primes() {
    for n in [2u64, 3, 5, 7, 97, 104729] {
        assert_eq!(verdict(n, 32), Primality::Prime, "{} should be prime", n);
    }
}

#[test]
fn test_known_composites() {
    for n in [4u64, 6, 8, 9, 560, 1024] {
        assert_eq!(verdict(n, 1), Primality::Composite, "{} should be composite", n);
    }
}

#[test]
fn test_small_inputs() {
    assert_eq!(verdict(0, 8), Primality::Composite);
    assert_eq!(verdict(1, 8), Primality::Composite);
}

#[test]
fn test_carmichael_numbers() {
    // Fermat pseudoprimes to every coprime base; Miller-Rabin must reject
    for n in [561u64, 1105, 1729, 41041] {
        assert_eq!(verdict(n, 16), Primality::Composite, "{} should be composite", n);
    }
}

#[test]
fn test_large_prime() {
    // 2^127 - 1, a Mersenne prime
    let m127 = (BigUint::from(1u32) << 127u32) - 1u32;
    assert_eq!(test(&m127, 16, &mut rng()), Primality::Prime);
}

#[test]
fn test_large_composite() {
    // 2^127 - 3 is divisible by 5
    let n = (BigUint::from(1u32) << 127u32) - 3u32;
    assert_eq!(test(&n, 16, &mut rng()), Primality::Composite);
}

#[test]
fn test_split_power_of_two() {
    // 560 = 2^4 * 35
    let (t, u) = split_power_of_two(&BigUint::from(560u32));
    assert_eq!(t, 4);
    assert_eq!(u, BigUint::from(35u32));

    // odd values decompose trivially
    let (t, u) = split_power_of_two(&BigUint::from(35u32));
    assert_eq!(t, 0);
    assert_eq!(u, BigUint::from(35u32));
}
