//! Group law, encodings and absence handling for every descriptor.

#![cfg(all(feature = "bls12377", feature = "p256"))]

use curves::{BigUint, Bls12377G1, Bls12377G2, Curve, Error, Point, Scalar, P256};
use num_traits::Zero;
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};

macro_rules! point_tests {
    ($name:ident, $curve:ty, identity_compressed: $id_compressed:expr) => {
        mod $name {
            use super::*;
            use proptest::{prelude::any, prop_compose, proptest};

            type P = Point<$curve>;
            type S = Scalar<$curve>;

            prop_compose! {
                fn scalar()(hi in any::<[u8; 32]>(), lo in any::<[u8; 32]>()) -> S {
                    let mut bytes = [0u8; 64];
                    bytes[..32].copy_from_slice(&hi);
                    bytes[32..].copy_from_slice(&lo);
                    S::set_bytes_wide(&bytes).unwrap()
                }
            }

            prop_compose! {
                fn point()(k in scalar()) -> P {
                    &P::generator() * &k
                }
            }

            #[test]
            fn doubling() {
                let g = P::generator();
                assert_eq!(g.double(), g.add(Some(&g)).unwrap());
                assert!(g.double().equal(g.mul(Some(&S::new(2))).as_ref()));
                assert!(g.mul(Some(&S::new(3))).unwrap().equal(Some(&(&g.double() + &g))));
            }

            #[test]
            fn identity_laws() {
                let id = P::identity();
                assert!(id.double().is_identity());
                assert!(id.neg().is_identity());
                assert!(id.is_on_curve());
                assert!(P::generator().mul(Some(&S::zero())).unwrap().is_identity());
                assert!(P::generator().sub(Some(&P::generator())).unwrap().is_identity());
                assert_eq!(P::default(), id);
            }

            #[test]
            fn absent_operands() {
                let g = P::generator();
                assert_eq!(g.add(None), None);
                assert_eq!(g.sub(None), None);
                assert_eq!(g.mul(None), None);
                assert_eq!(P::random(None), None);
                assert!(!g.equal(None));
                assert!(!P::identity().equal(None));
            }

            #[test]
            fn identity_encodings() {
                let id = P::identity();
                let compressed = id.to_affine_compressed();
                assert_eq!(compressed, $id_compressed);
                assert_eq!(P::from_affine_compressed(&compressed), Ok(id));

                let uncompressed = id.to_affine_uncompressed();
                assert_eq!(uncompressed.len(), <$curve as Curve>::UNCOMPRESSED_SIZE);
                assert_eq!(P::from_affine_uncompressed(&uncompressed), Ok(id));
            }

            #[test]
            fn rejects_wrong_lengths() {
                let bytes = P::generator().to_affine_compressed();
                assert_eq!(
                    P::from_affine_compressed(&bytes[1..]),
                    Err(Error::InvalidEncodingLength {
                        expected: bytes.len(),
                        actual: bytes.len() - 1,
                    })
                );
                assert!(matches!(
                    P::from_affine_uncompressed(&bytes),
                    Err(Error::InvalidEncodingLength { .. })
                ));
            }

            #[test]
            fn coordinates() {
                let g = P::generator();
                assert_eq!(P::set(&g.x(), &g.y()), Ok(g));
                assert_eq!(P::set(&BigUint::zero(), &BigUint::zero()), Ok(P::identity()));
                assert!(P::identity().x().is_zero());
                assert_eq!(
                    P::set(&BigUint::from(1u8), &BigUint::from(1u8)),
                    Err(Error::PointNotOnCurve)
                );

                let too_wide = BigUint::from(1u8) << (8 * <$curve as Curve>::COORDINATE_SIZE);
                assert_eq!(P::set(&too_wide, &g.y()), Err(Error::InvalidEncoding));
            }

            #[test]
            fn hash_lands_in_group() {
                let p = P::hash(b"a message").unwrap();
                assert!(!p.is_identity());
                assert!(p.is_on_curve());
                assert_eq!(P::hash(b"a message"), Ok(p));
                assert_ne!(P::hash(b"another message"), Ok(p));
            }

            #[test]
            fn seeded_random() {
                let mut rng = ChaCha8Rng::seed_from_u64(11);
                let p = P::random(Some(&mut rng)).unwrap();
                assert!(p.is_on_curve());
                assert!(!p.is_identity());

                let mut rng = ChaCha8Rng::seed_from_u64(11);
                assert_eq!(P::random(Some(&mut rng)), Some(p));
            }

            #[test]
            fn random_is_hash_of_drawn_seed() {
                let mut seed = [0u8; 64];
                ChaCha8Rng::seed_from_u64(13).fill_bytes(&mut seed);
                let expected = P::hash(&seed).expect("built-in tag is valid");

                let mut rng = ChaCha8Rng::seed_from_u64(13);
                assert_eq!(P::random(Some(&mut rng)), Some(expected));
            }

            proptest! {
                #[test]
                fn add_then_sub(a in point(), b in point()) {
                    assert_eq!(a.add(Some(&b)).unwrap().sub(Some(&b)), Some(a));
                    assert!(a.sub(Some(&a)).unwrap().is_identity());
                }

                #[test]
                fn scalar_mul_distributes(a in scalar(), b in scalar()) {
                    let g = P::generator();
                    let lhs = g.mul(a.add(Some(&b)).as_ref()).unwrap();
                    let rhs = &(&g * &a) + &(&g * &b);
                    assert!(lhs.equal(Some(&rhs)));
                }

                #[test]
                fn negation(p in point()) {
                    assert!(p.add(Some(&p.neg())).unwrap().is_identity());
                    assert_eq!(-&p, p.neg());
                }

                #[test]
                fn encoding_roundtrip(p in point()) {
                    let compressed = p.to_affine_compressed();
                    assert_eq!(compressed.len(), <$curve as Curve>::COMPRESSED_SIZE);
                    assert_eq!(P::from_affine_compressed(&compressed), Ok(p));

                    let uncompressed = p.to_affine_uncompressed();
                    assert_eq!(uncompressed.len(), <$curve as Curve>::UNCOMPRESSED_SIZE);
                    assert_eq!(P::from_affine_uncompressed(&uncompressed), Ok(p));
                }
            }
        }
    };
}

fn flagged(flag: u8, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    bytes[0] = flag;
    bytes
}

point_tests!(bls12377_g1, Bls12377G1, identity_compressed: flagged(0xc0, 48));
point_tests!(bls12377_g2, Bls12377G2, identity_compressed: flagged(0xc0, 96));
point_tests!(p256, P256, identity_compressed: flagged(0x80, 33));

#[test]
fn bls12377_rejects_points_outside_subgroup() {
    // (0, 1) lies on y² = x³ + 1 and has order 3.
    let p = Point::<Bls12377G1>::set(&BigUint::zero(), &BigUint::from(1u8));
    assert_eq!(p, Err(Error::PointNotInSubgroup));
}

#[test]
fn p256_scalar_times_generator_compresses_to_33_bytes() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let k = Scalar::<P256>::random(Some(&mut rng)).unwrap();
    let p = Point::<P256>::generator().mul(Some(&k)).unwrap();
    let bytes = p.to_affine_compressed();
    assert_eq!(bytes.len(), 33);
    assert_eq!(Point::<P256>::from_affine_compressed(&bytes), Ok(p));
}

#[test]
fn g2_coordinates_concatenate_components() {
    let g = Point::<Bls12377G2>::generator();
    let uncompressed = g.to_affine_uncompressed();
    assert_eq!(g.x(), BigUint::from_bytes_be(&uncompressed[..96]));
    assert_eq!(g.y(), BigUint::from_bytes_be(&uncompressed[96..]));
}
