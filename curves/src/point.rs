//! Group elements.

use crate::{msm, Curve, Error, Result, Scalar};
use core::{
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
};
use elliptic_curve::{group::Group, rand_core::RngCore};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

/// Number of bytes drawn from the entropy source by [`Point::random`].
const RANDOM_SEED_SIZE: usize = 64;

/// An element of the prime-order group of `C`.
///
/// Held in projective coordinates; equality and every encoding go through
/// the affine form, so two representations of the same element are
/// indistinguishable. Like [`Scalar`], binary arithmetic takes an `Option`
/// and yields `None` for an absent operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point<C: Curve> {
    inner: C::Point,
}

impl<C: Curve> Point<C> {
    /// Wraps a backend point.
    pub const fn from_inner(inner: C::Point) -> Self {
        Self { inner }
    }

    /// Returns the backend point.
    pub fn into_inner(self) -> C::Point {
        self.inner
    }

    /// Fixed generator of the group.
    pub fn generator() -> Self {
        Self::from_inner(C::Point::generator())
    }

    /// Identity element.
    pub fn identity() -> Self {
        Self::from_inner(C::Point::identity())
    }

    /// Random element of the prime-order subgroup, obtained by hashing 64
    /// bytes drawn from `rng`. Without an entropy source there is no point.
    pub fn random(rng: Option<&mut dyn RngCore>) -> Option<Self> {
        let rng = rng?;
        let mut seed = [0u8; RANDOM_SEED_SIZE];
        rng.fill_bytes(&mut seed);
        // The curve's own tag is short and non-empty, so hashing cannot fail.
        Self::hash(&seed).ok()
    }

    /// Hashes `msg` into the prime-order subgroup using the curve's tag.
    pub fn hash(msg: &[u8]) -> Result<Self> {
        Self::hash_with_dst(msg, C::POINT_DST)
    }

    /// Hashes `msg` into the prime-order subgroup under a caller-chosen
    /// domain separation tag.
    pub fn hash_with_dst(msg: &[u8], dst: &[u8]) -> Result<Self> {
        debug!(curve = C::NAME, len = msg.len(), "hashing to curve");
        C::hash_to_point_with_dst(msg, dst).map(Self::from_inner)
    }

    /// Builds a point from affine coordinates. `(0, 0)` denotes the identity.
    ///
    /// For groups over an extension field each coordinate is the integer
    /// whose big-endian encoding is the coordinate's encoding.
    pub fn set(x: &BigUint, y: &BigUint) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }

        let x = coordinate_bytes::<C>(x)?;
        let y = coordinate_bytes::<C>(y)?;
        C::from_coordinates(&x, &y).map(Self::from_inner)
    }

    /// Affine `x` coordinate; zero for the identity.
    pub fn x(&self) -> BigUint {
        C::to_coordinates(&self.inner)
            .map(|(x, _)| BigUint::from_bytes_be(&x))
            .unwrap_or_default()
    }

    /// Affine `y` coordinate; zero for the identity.
    pub fn y(&self) -> BigUint {
        C::to_coordinates(&self.inner)
            .map(|(_, y)| BigUint::from_bytes_be(&y))
            .unwrap_or_default()
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: Option<&Self>) -> Option<Self> {
        rhs.map(|rhs| self + rhs)
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: Option<&Self>) -> Option<Self> {
        rhs.map(|rhs| self - rhs)
    }

    /// `[rhs] self`.
    pub fn mul(&self, rhs: Option<&Scalar<C>>) -> Option<Self> {
        rhs.map(|rhs| self * rhs)
    }

    /// `2 · self`.
    pub fn double(&self) -> Self {
        Self::from_inner(self.inner.double())
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        Self::from_inner(-self.inner)
    }

    /// Do both operands denote the same group element? An absent operand
    /// equals nothing.
    pub fn equal(&self, rhs: Option<&Self>) -> bool {
        rhs.is_some_and(|rhs| self.inner == rhs.inner)
    }

    /// Is this the identity?
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity().into()
    }

    /// Does the point satisfy the curve equation?
    pub fn is_on_curve(&self) -> bool {
        C::is_on_curve(&self.inner)
    }

    /// Compressed encoding of [`Curve::COMPRESSED_SIZE`] bytes.
    pub fn to_affine_compressed(&self) -> Vec<u8> {
        C::to_compressed(&self.inner)
    }

    /// Uncompressed encoding of [`Curve::UNCOMPRESSED_SIZE`] bytes.
    pub fn to_affine_uncompressed(&self) -> Vec<u8> {
        C::to_uncompressed(&self.inner)
    }

    /// Decodes and validates a compressed point.
    pub fn from_affine_compressed(bytes: &[u8]) -> Result<Self> {
        check_length(bytes, C::COMPRESSED_SIZE)?;
        C::from_compressed(bytes).map(Self::from_inner)
    }

    /// Decodes and validates an uncompressed point.
    pub fn from_affine_uncompressed(bytes: &[u8]) -> Result<Self> {
        check_length(bytes, C::UNCOMPRESSED_SIZE)?;
        C::from_uncompressed(bytes).map(Self::from_inner)
    }

    /// `Σ scalars[i] · points[i]`, computed with bucket accumulation.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the slices differ in length.
    pub fn sum_of_products(points: &[Self], scalars: &[Scalar<C>]) -> Result<Self> {
        if points.len() != scalars.len() {
            return Err(Error::LengthMismatch {
                points: points.len(),
                scalars: scalars.len(),
            });
        }

        let points: Vec<C::Point> = points.iter().map(|p| p.inner).collect();
        let scalars: Vec<C::Scalar> = scalars.iter().map(|s| s.into_inner()).collect();
        Ok(Self::from_inner(msm::pippenger::<C>(&points, &scalars)))
    }
}

fn check_length(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(Error::InvalidEncodingLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn coordinate_bytes<C: Curve>(n: &BigUint) -> Result<Vec<u8>> {
    let bytes = n.to_bytes_be();
    if bytes.len() > C::COORDINATE_SIZE {
        return Err(Error::InvalidEncoding);
    }

    let mut out = vec![0u8; C::COORDINATE_SIZE];
    out[C::COORDINATE_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

impl<C: Curve> Default for Point<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, C: Curve> Add<&'a Point<C>> for &Point<C> {
    type Output = Point<C>;

    fn add(self, rhs: &'a Point<C>) -> Point<C> {
        Point::from_inner(self.inner + rhs.inner)
    }
}

impl<'a, C: Curve> Sub<&'a Point<C>> for &Point<C> {
    type Output = Point<C>;

    fn sub(self, rhs: &'a Point<C>) -> Point<C> {
        Point::from_inner(self.inner - rhs.inner)
    }
}

impl<'a, C: Curve> Mul<&'a Scalar<C>> for &Point<C> {
    type Output = Point<C>;

    fn mul(self, rhs: &'a Scalar<C>) -> Point<C> {
        Point::from_inner(self.inner * rhs.into_inner())
    }
}

impl<C: Curve> Neg for &Point<C> {
    type Output = Point<C>;

    fn neg(self) -> Point<C> {
        Point::from_inner(-self.inner)
    }
}

impl<C: Curve> Sum for Point<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_inner(iter.map(|p| p.inner).sum())
    }
}

impl<'a, C: Curve> Sum<&'a Point<C>> for Point<C> {
    fn sum<I: Iterator<Item = &'a Point<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
