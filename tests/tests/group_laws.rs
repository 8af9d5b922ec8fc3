//! Property tests for the group law and scalar multiplication
//!
//! The hand-enumerable curve over 𝔽₅ gives exhaustive coverage of the
//! special cases (identity, mutual inverses, 2-torsion-free doubling);
//! proptest sweeps scalar combinations on top.

use curvedh_algorithms::Point;
use curvedh_tests::{tiny_curve, tiny_curve_points};
use num_bigint::BigUint;
use proptest::prelude::*;

fn point(pair: (u64, u64)) -> Point {
    Point::affine(BigUint::from(pair.0), BigUint::from(pair.1))
}

#[test]
fn identity_is_neutral_for_every_point() {
    let curve = tiny_curve();
    for &pair in tiny_curve_points().iter() {
        let p = point(pair);
        assert_eq!(curve.add(&p, &Point::identity()), p);
        assert_eq!(curve.add(&Point::identity(), &p), p);
    }
}

#[test]
fn every_point_cancels_with_its_inverse() {
    let curve = tiny_curve();
    for &pair in tiny_curve_points().iter() {
        let p = point(pair);
        let neg = curve.negate(&p);
        assert!(curve.contains(&neg));
        assert_eq!(curve.add(&p, &neg), Point::identity());
    }
}

#[test]
fn addition_is_closed_exhaustively() {
    let curve = tiny_curve();
    let points = tiny_curve_points();
    for &a in points.iter() {
        for &b in points.iter() {
            assert!(curve.contains(&curve.add(&point(a), &point(b))));
        }
    }
}

#[test]
fn addition_is_commutative_exhaustively() {
    let curve = tiny_curve();
    let points = tiny_curve_points();
    for &a in points.iter() {
        for &b in points.iter() {
            assert_eq!(curve.add(&point(a), &point(b)), curve.add(&point(b), &point(a)));
        }
    }
}

#[test]
fn addition_is_associative_exhaustively() {
    let curve = tiny_curve();
    let points = tiny_curve_points();
    for &a in points.iter() {
        for &b in points.iter() {
            for &c in points.iter() {
                assert_eq!(
                    curve.add(&curve.add(&point(a), &point(b)), &point(c)),
                    curve.add(&point(a), &curve.add(&point(b), &point(c))),
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn scalar_multiples_stay_on_curve(idx in 0usize..8, n in 0u64..10_000) {
        let curve = tiny_curve();
        let p = point(tiny_curve_points()[idx]);
        prop_assert!(curve.contains(&curve.mul(&p, &BigUint::from(n))));
    }

    #[test]
    fn scalar_multiplication_is_linear(idx in 0usize..8, m in 0u64..1_000, n in 0u64..1_000) {
        let curve = tiny_curve();
        let p = point(tiny_curve_points()[idx]);
        let lhs = curve.mul(&p, &BigUint::from(m + n));
        let rhs = curve.add(&curve.mul(&p, &BigUint::from(m)), &curve.mul(&p, &BigUint::from(n)));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn nested_scalar_multiplication_commutes(idx in 0usize..8, a in 0u64..1_000, b in 0u64..1_000) {
        let curve = tiny_curve();
        let g = point(tiny_curve_points()[idx]);
        let lhs = curve.mul(&curve.mul(&g, &BigUint::from(a)), &BigUint::from(b));
        let rhs = curve.mul(&curve.mul(&g, &BigUint::from(b)), &BigUint::from(a));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn doubling_matches_self_addition(idx in 0usize..8) {
        let curve = tiny_curve();
        let p = point(tiny_curve_points()[idx]);
        prop_assert_eq!(curve.mul(&p, &BigUint::from(2u32)), curve.add(&p, &p));
    }
}
