//! Scalar arithmetic through the uniform interface.

#![cfg(all(feature = "bls12377", feature = "p256"))]

use core::cmp::Ordering;
use curves::{BigInt, BigUint, Bls12377G1, Curve, Error, Scalar, P256};
use hex_literal::hex;
use num_traits::Num;
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};

fn big(hex: &str) -> BigInt {
    BigInt::from_str_radix(hex, 16).unwrap()
}

fn order<C: Curve>() -> BigUint {
    BigUint::from_str_radix(&C::ORDER_HEX[2..], 16).unwrap()
}

macro_rules! scalar_tests {
    ($name:ident, $curve:ty) => {
        mod $name {
            use super::*;
            use proptest::{prelude::any, prop_compose, proptest};

            type S = Scalar<$curve>;

            prop_compose! {
                fn scalar()(hi in any::<[u8; 32]>(), lo in any::<[u8; 32]>()) -> S {
                    let mut bytes = [0u8; 64];
                    bytes[..32].copy_from_slice(&hi);
                    bytes[32..].copy_from_slice(&lo);
                    S::set_bytes_wide(&bytes).unwrap()
                }
            }

            #[test]
            fn small_values() {
                let three = S::new(3);
                assert_eq!(three.square(), S::new(9));
                assert_eq!(three.cube(), S::new(27));
                assert_eq!(three.double(), S::new(6));
                assert_eq!(S::new(9).invert().unwrap().mul(Some(&S::new(9))), Some(S::one()));
                assert_eq!(S::new(9).sub(Some(&S::new(6))), Some(S::new(3)));
                assert_eq!(S::new(9).mul(Some(&S::new(6))), Some(S::new(54)));
                assert_eq!(S::new(54).div(Some(&S::new(9))), Some(Ok(S::new(6))));
            }

            #[test]
            fn zero_and_one() {
                assert!(S::zero().is_zero());
                assert!(S::zero().is_even());
                assert!(S::one().is_one());
                assert!(S::one().is_odd());
                assert_eq!(S::zero().invert(), Err(Error::DivisionByZero));
            }

            #[test]
            fn negative_values_wrap() {
                let minus_one = S::new(-1);
                assert_eq!(minus_one.to_big_int(), order::<$curve>() - 1u8);
                assert_ne!(minus_one.is_odd(), S::new(-2).is_odd());
                assert_eq!(S::new(333333).mul(Some(&minus_one)), Some(S::new(-333333)));
                assert_eq!(minus_one.mul(Some(&minus_one)), Some(S::one()));

                let upper = S::set_big_int(Some(&(BigInt::from(order::<$curve>()) - 3))).unwrap();
                assert_eq!(upper.add(Some(&S::new(9))), Some(S::new(6)));
                assert_eq!(S::new(6).sub(Some(&S::new(9))), Some(upper));
            }

            #[test]
            fn serialize() {
                let bytes = S::new(255).bytes();
                let mut expected = [0u8; 32];
                expected[31] = 0xff;
                assert_eq!(bytes, expected);
                assert_eq!(S::set_bytes(&bytes), Ok(S::new(255)));

                assert_eq!(
                    S::set_bytes(&bytes[1..]),
                    Err(Error::InvalidEncodingLength { expected: 32, actual: 31 })
                );
                assert_eq!(
                    S::set_bytes_wide(&bytes),
                    Err(Error::InvalidEncodingLength { expected: 64, actual: 32 })
                );
                assert_eq!(
                    S::set_bytes(&order::<$curve>().to_bytes_be()),
                    Err(Error::ScalarOutOfRange)
                );
            }

            #[test]
            fn absent_operands() {
                let one = S::one();
                assert_eq!(one.add(None), None);
                assert_eq!(one.sub(None), None);
                assert_eq!(one.mul(None), None);
                assert_eq!(one.div(None), None);
                assert_eq!(one.cmp(None), None);
                assert_eq!(S::random(None), None);
                assert_eq!(S::set_big_int(None), Err(Error::NilOperand));
            }

            #[test]
            fn compare() {
                assert_eq!(S::new(3).cmp(Some(&S::new(4))), Some(Ordering::Less));
                assert_eq!(S::new(4).cmp(Some(&S::new(4))), Some(Ordering::Equal));
                assert_eq!(S::new(-1).cmp(Some(&S::new(4))), Some(Ordering::Greater));
            }

            #[test]
            fn seeded_random() {
                let mut rng = ChaCha8Rng::seed_from_u64(7);
                let a = S::random(Some(&mut rng)).unwrap();
                let b = S::random(Some(&mut rng)).unwrap();
                assert_ne!(a, b);
                assert!(!a.is_zero());

                let mut rng = ChaCha8Rng::seed_from_u64(7);
                assert_eq!(S::random(Some(&mut rng)), Some(a));
            }

            #[test]
            fn random_is_hash_of_drawn_bytes() {
                let mut bytes = [0u8; 64];
                ChaCha8Rng::seed_from_u64(9).fill_bytes(&mut bytes);
                let expected = S::hash(&bytes).expect("built-in tag is valid");

                let mut rng = ChaCha8Rng::seed_from_u64(9);
                assert_eq!(S::random(Some(&mut rng)), Some(expected));
            }

            proptest! {
                #[test]
                fn add_then_sub(a in scalar(), b in scalar()) {
                    assert_eq!(a.add(Some(&b)).unwrap().sub(Some(&b)), Some(a));
                }

                #[test]
                fn bytes_roundtrip(a in scalar()) {
                    let bytes = a.bytes();
                    assert_eq!(bytes.len(), <$curve as Curve>::SCALAR_SIZE);
                    assert_eq!(S::set_bytes(&bytes), Ok(a));
                }

                #[test]
                fn division_inverts_multiplication(a in scalar(), b in scalar()) {
                    if !b.is_zero() {
                        let product = a.mul(Some(&b)).unwrap();
                        assert_eq!(product.div(Some(&b)), Some(Ok(a)));
                    }
                }

                #[test]
                fn sqrt_of_square(a in scalar()) {
                    let root = a.square().sqrt().unwrap();
                    assert!(root == a || root == a.neg());
                }

                #[test]
                fn matches_big_integers(a in scalar(), b in scalar()) {
                    let r = order::<$curve>();
                    let product = a.mul(Some(&b)).unwrap();
                    assert_eq!(product.to_big_int(), (a.to_big_int() * b.to_big_int()) % r);
                }
            }
        }
    };
}

scalar_tests!(bls12377, Bls12377G1);
scalar_tests!(p256, P256);

#[test]
fn bls12377_hash_vector() {
    let s = Scalar::<Bls12377G1>::hash(&[0u8; 32]).unwrap();
    assert_eq!(
        s.bytes(),
        hex!("0c043edae82bf279180b9353139711c1fda5fa64a1f085b80760edaee8f0baca")
    );
}

#[test]
fn bls12377_invert_vector() {
    let expected = Scalar::<Bls12377G1>::set_big_int(Some(&big(
        "0a5f38510051b12ffcd5f1f46c1ef000c0095e8d9000000093d0d55555555556",
    )))
    .unwrap();
    assert_eq!(Scalar::<Bls12377G1>::new(9).invert(), Ok(expected));
}

#[test]
fn bls12377_sqrt_vector() {
    let expected = Scalar::<Bls12377G1>::set_big_int(Some(&big(
        "12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a117ffffffffffe",
    )))
    .unwrap();
    assert_eq!(Scalar::<Bls12377G1>::new(9).sqrt(), Ok(expected));
}

#[test]
fn non_residue_has_no_root() {
    // 11 is the smallest non-residue modulo the BLS12-377 scalar order.
    let eleven = Scalar::<Bls12377G1>::new(11);
    assert_eq!(eleven.sqrt(), Err(Error::NoSquareRoot));
}

#[test]
fn big_integers_reduce() {
    let r = BigInt::from(order::<P256>());
    let s = Scalar::<P256>::set_big_int(Some(&(r.clone() * 5 + 11))).unwrap();
    assert_eq!(s, Scalar::new(11));
    let s = Scalar::<P256>::set_big_int(Some(&(-r - 11))).unwrap();
    assert_eq!(s, Scalar::new(-11));
}
