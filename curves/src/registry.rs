//! Curve descriptors and the factories they bundle.

use crate::{Curve, Point, Result, Scalar};
use core::marker::PhantomData;
use elliptic_curve::rand_core::RngCore;
use num_bigint::{BigInt, BigUint};
use num_traits::Num;

#[cfg(feature = "bls12377")]
use crate::{Bls12377G1, Bls12377G2};
#[cfg(feature = "p256")]
use crate::P256;

/// Parses a `0x`-prefixed hexadecimal constant of a [`Curve`] implementation.
fn parse_hex(hex: &str) -> BigUint {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    BigUint::from_str_radix(digits, 16).unwrap_or_default()
}

/// Creates scalars of `C`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarFactory<C: Curve> {
    curve: PhantomData<C>,
}

impl<C: Curve> ScalarFactory<C> {
    /// See [`Scalar::new`].
    pub fn new(&self, i: i64) -> Scalar<C> {
        Scalar::new(i)
    }

    /// See [`Scalar::zero`].
    pub fn zero(&self) -> Scalar<C> {
        Scalar::zero()
    }

    /// See [`Scalar::one`].
    pub fn one(&self) -> Scalar<C> {
        Scalar::one()
    }

    /// See [`Scalar::random`].
    pub fn random(&self, rng: Option<&mut dyn RngCore>) -> Option<Scalar<C>> {
        Scalar::random(rng)
    }

    /// See [`Scalar::hash`].
    pub fn hash(&self, msg: &[u8]) -> Result<Scalar<C>> {
        Scalar::hash(msg)
    }

    /// See [`Scalar::set_big_int`].
    pub fn set_big_int(&self, n: Option<&BigInt>) -> Result<Scalar<C>> {
        Scalar::set_big_int(n)
    }

    /// See [`Scalar::set_bytes`].
    pub fn set_bytes(&self, bytes: &[u8]) -> Result<Scalar<C>> {
        Scalar::set_bytes(bytes)
    }

    /// See [`Scalar::set_bytes_wide`].
    pub fn set_bytes_wide(&self, bytes: &[u8]) -> Result<Scalar<C>> {
        Scalar::set_bytes_wide(bytes)
    }

    /// Point factory of the same curve.
    pub fn point(&self) -> PointFactory<C> {
        PointFactory::default()
    }
}

/// Creates points of `C`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointFactory<C: Curve> {
    curve: PhantomData<C>,
}

impl<C: Curve> PointFactory<C> {
    /// See [`Point::generator`].
    pub fn generator(&self) -> Point<C> {
        Point::generator()
    }

    /// See [`Point::identity`].
    pub fn identity(&self) -> Point<C> {
        Point::identity()
    }

    /// See [`Point::random`].
    pub fn random(&self, rng: Option<&mut dyn RngCore>) -> Option<Point<C>> {
        Point::random(rng)
    }

    /// See [`Point::hash`].
    pub fn hash(&self, msg: &[u8]) -> Result<Point<C>> {
        Point::hash(msg)
    }

    /// See [`Point::set`].
    pub fn set(&self, x: &BigUint, y: &BigUint) -> Result<Point<C>> {
        Point::set(x, y)
    }

    /// See [`Point::from_affine_compressed`].
    pub fn from_affine_compressed(&self, bytes: &[u8]) -> Result<Point<C>> {
        Point::from_affine_compressed(bytes)
    }

    /// See [`Point::from_affine_uncompressed`].
    pub fn from_affine_uncompressed(&self, bytes: &[u8]) -> Result<Point<C>> {
        Point::from_affine_uncompressed(bytes)
    }

    /// See [`Point::sum_of_products`].
    pub fn sum_of_products(&self, points: &[Point<C>], scalars: &[Scalar<C>]) -> Result<Point<C>> {
        Point::sum_of_products(points, scalars)
    }

    /// Scalar factory of the same curve.
    pub fn scalar(&self) -> ScalarFactory<C> {
        ScalarFactory::default()
    }
}

/// Immutable description of a supported group.
///
/// Descriptors carry no state of their own: every call for the same curve
/// returns an equal value, and they can be copied and shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurveDescriptor<C: Curve> {
    /// Scalar factory.
    pub scalar: ScalarFactory<C>,
    /// Point factory.
    pub point: PointFactory<C>,
}

impl<C: Curve> CurveDescriptor<C> {
    /// Name of the group.
    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Order of the prime-order subgroup.
    pub fn order(&self) -> BigUint {
        parse_hex(C::ORDER_HEX)
    }

    /// Modulus of the coordinate field. For groups over an extension field
    /// this is the characteristic.
    pub fn modulus(&self) -> BigUint {
        parse_hex(C::MODULUS_HEX)
    }

    /// Cofactor of the curve.
    pub fn cofactor(&self) -> BigUint {
        parse_hex(C::COFACTOR_HEX)
    }

    /// Fixed generator.
    pub fn generator(&self) -> Point<C> {
        Point::generator()
    }
}

/// BLS12-377 G1.
#[cfg(feature = "bls12377")]
pub fn bls12377_g1() -> CurveDescriptor<Bls12377G1> {
    CurveDescriptor::default()
}

/// BLS12-377 G2.
#[cfg(feature = "bls12377")]
pub fn bls12377_g2() -> CurveDescriptor<Bls12377G2> {
    CurveDescriptor::default()
}

/// NIST P-256.
#[cfg(feature = "p256")]
pub fn p256() -> CurveDescriptor<P256> {
    CurveDescriptor::default()
}
