//! Multi-scalar multiplication against naive evaluation.

#![cfg(all(feature = "bls12377", feature = "p256"))]

use curves::{bls12377_g1, bls12377_g2, p256, Curve, CurveDescriptor, Error, Point, Scalar};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

fn naive<C: Curve>(points: &[Point<C>], scalars: &[Scalar<C>]) -> Point<C> {
    points.iter().zip(scalars).map(|(p, s)| p * s).sum()
}

fn generators_sum_scalars<C: Curve>(curve: CurveDescriptor<C>) {
    let points = vec![curve.generator(); 5];
    let scalars: Vec<_> = (8..=12).map(|i| curve.scalar.new(i)).collect();
    let actual = curve.point.sum_of_products(&points, &scalars).unwrap();
    assert!(actual.equal(Some(&(&curve.generator() * &curve.scalar.new(50)))));
}

fn random_terms<C: Curve>(curve: CurveDescriptor<C>, n: usize, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<_> = (0..n).map(|_| curve.point.random(Some(&mut rng)).unwrap()).collect();
    let scalars: Vec<_> = (0..n).map(|_| curve.scalar.random(Some(&mut rng)).unwrap()).collect();
    let actual = curve.point.sum_of_products(&points, &scalars).unwrap();
    assert_eq!(actual, naive(&points, &scalars));
}

#[test]
fn generators() {
    generators_sum_scalars(bls12377_g1());
    generators_sum_scalars(bls12377_g2());
    generators_sum_scalars(p256());
}

#[test]
fn small_inputs() {
    random_terms(bls12377_g1(), 1, 1);
    random_terms(bls12377_g2(), 7, 2);
    random_terms(p256(), 13, 3);
}

#[test]
fn wide_windows() {
    random_terms(bls12377_g1(), 40, 4);
    random_terms(p256(), 70, 5);
}

#[test]
fn extreme_scalars() {
    let curve = p256();
    let g = curve.generator();
    let h = curve.point.hash(b"second").unwrap();
    let points = [g, h, g];
    let scalars = [curve.scalar.new(-1), curve.scalar.zero(), curve.scalar.one()];
    let actual = curve.point.sum_of_products(&points, &scalars).unwrap();
    assert!(actual.is_identity());
}

#[test]
fn empty_input_is_identity() {
    let curve = bls12377_g1();
    assert_eq!(curve.point.sum_of_products(&[], &[]), Ok(curve.point.identity()));
}

#[test]
fn length_mismatch() {
    let curve = p256();
    let points = [curve.generator(); 2];
    let scalars = [curve.scalar.one(); 3];
    assert_eq!(
        curve.point.sum_of_products(&points, &scalars),
        Err(Error::LengthMismatch { points: 2, scalars: 3 })
    );
}
