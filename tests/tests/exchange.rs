//! End-to-end key-exchange tests against generated domains

use curvedh_api::KeyAgreement;
use curvedh_kex::{DhDomain, DhParty, RandomCurveDh};
use curvedh_tests::{seeded_rng, tiny_curve};
use num_bigint::BigUint;

const ROUNDS: u32 = 32;

#[test]
fn end_to_end_agreement_across_field_sizes() {
    for (seed, prime_bits) in [(1u64, 16u64), (2, 24), (3, 32), (4, 48)] {
        let mut rng = seeded_rng(seed);
        let domain = DhDomain::generate(&mut rng, prime_bits, ROUNDS).unwrap();

        let alice = DhParty::new(&mut rng, &domain, 32);
        let bob = DhParty::new(&mut rng, &domain, 32);

        let shared_a = alice.agree(bob.public_point()).unwrap();
        let shared_b = bob.agree(alice.public_point()).unwrap();
        assert_eq!(shared_a, shared_b, "{}-bit field", prime_bits);
        assert!(domain.curve().contains(shared_a.point()));
    }
}

#[test]
fn scalar_multiplication_commutes_on_generated_curves() {
    let mut rng = seeded_rng(5);
    let domain = DhDomain::generate(&mut rng, 24, ROUNDS).unwrap();
    let curve = domain.curve();
    let g = domain.generator();

    for (n_a, n_b) in [(0u64, 7u64), (1, 1), (2, 3), (12345, 678), (u64::MAX, 2)] {
        let n_a = BigUint::from(n_a);
        let n_b = BigUint::from(n_b);
        let lhs = curve.mul(&curve.mul(g, &n_a), &n_b);
        let rhs = curve.mul(&curve.mul(g, &n_b), &n_a);
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn trait_surface_agrees_with_inherent_api() {
    let mut rng = seeded_rng(6);
    let domain = DhDomain::generate(&mut rng, 24, ROUNDS).unwrap();

    let (public_a, secret_a) = RandomCurveDh::keypair(&mut rng, &domain).unwrap();
    let (public_b, secret_b) = RandomCurveDh::keypair(&mut rng, &domain).unwrap();

    let shared_a = RandomCurveDh::shared_secret(&secret_a, &public_b, &domain).unwrap();
    let shared_b = RandomCurveDh::shared_secret(&secret_b, &public_a, &domain).unwrap();
    assert_eq!(shared_a, shared_b);
    assert_eq!(RandomCurveDh::name(), "ECDH-RandomCurve");
}

#[test]
fn exchange_works_on_a_fixed_hand_checked_curve() {
    // 𝔽₅ is tiny, so collisions between the parties are expected; only
    // the agreement contract matters here
    let curve = tiny_curve();
    let g = curvedh_algorithms::Point::affine(BigUint::from(0u32), BigUint::from(1u32));
    let domain = DhDomain::new(curve, g).unwrap();

    // the group has only 9 elements, so a party can land on the identity;
    // skip to the next seed when that happens
    let mut seed = 7;
    let (alice, bob) = loop {
        let mut rng = seeded_rng(seed);
        let a = DhParty::new(&mut rng, &domain, 16);
        let b = DhParty::new(&mut rng, &domain, 16);
        if !a.public_point().is_identity() && !b.public_point().is_identity() {
            break (a, b);
        }
        seed += 1;
    };
    assert_eq!(
        alice.agree(bob.public_point()).unwrap(),
        bob.agree(alice.public_point()).unwrap()
    );
}

#[test]
fn independent_seeds_give_independent_domains() {
    let d1 = DhDomain::generate(&mut seeded_rng(8), 24, ROUNDS).unwrap();
    let d2 = DhDomain::generate(&mut seeded_rng(9), 24, ROUNDS).unwrap();
    assert_ne!(d1, d2);
}

#[test]
#[ignore = "full 256-bit reference parameters; slow under a debug build"]
fn reference_size_exchange() {
    let mut rng = seeded_rng(10);
    let domain = RandomCurveDh::generate_domain(&mut rng).unwrap();

    let alice = DhParty::new(&mut rng, &domain, 64);
    let bob = DhParty::new(&mut rng, &domain, 64);
    assert_eq!(
        alice.agree(bob.public_point()).unwrap(),
        bob.agree(alice.public_point()).unwrap()
    );
}
