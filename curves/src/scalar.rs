//! Scalar field elements.

use crate::{Curve, Error, Result};
use core::{
    cmp::Ordering,
    ops::{Add, Mul, Neg, Sub},
};
use elliptic_curve::{
    ff::{Field, PrimeField},
    rand_core::RngCore,
};
use num_bigint::{BigInt, BigUint, Sign};

/// Width of the input accepted by [`Scalar::set_bytes_wide`].
pub const WIDE_SCALAR_SIZE: usize = 64;

/// An element of the scalar field of `C`, always held in canonical form.
///
/// Binary arithmetic takes its right-hand side as an `Option`: an absent
/// operand produces `None` instead of an error, so a chain of operations only
/// needs to be checked once at the end. Operations that construct or validate
/// a scalar return [`Result`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scalar<C: Curve> {
    inner: C::Scalar,
}

impl<C: Curve> Scalar<C> {
    /// Wraps a backend scalar.
    pub const fn from_inner(inner: C::Scalar) -> Self {
        Self { inner }
    }

    /// Returns the backend scalar.
    pub fn into_inner(self) -> C::Scalar {
        self.inner
    }

    /// Canonical representative of `i` modulo the group order.
    pub fn new(i: i64) -> Self {
        let magnitude = C::Scalar::from(i.unsigned_abs());
        if i < 0 {
            Self::from_inner(-magnitude)
        } else {
            Self::from_inner(magnitude)
        }
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self::from_inner(C::Scalar::ZERO)
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::from_inner(C::Scalar::ONE)
    }

    /// Uniformly random scalar: 64 bytes drawn from `rng`, hashed with
    /// [`Scalar::hash`]. Without an entropy source there is no scalar.
    pub fn random(rng: Option<&mut dyn RngCore>) -> Option<Self> {
        let rng = rng?;
        let mut bytes = [0u8; WIDE_SCALAR_SIZE];
        rng.fill_bytes(&mut bytes);
        // The curve's own tag is short and non-empty, so hashing cannot fail.
        Self::hash(&bytes).ok()
    }

    /// Hashes `msg` to a scalar using the curve's scalar tag.
    pub fn hash(msg: &[u8]) -> Result<Self> {
        C::hash_to_scalar(msg).map(Self::from_inner)
    }

    /// Reduces a signed big integer modulo the group order. The remainder is
    /// never negative.
    pub fn set_big_int(n: Option<&BigInt>) -> Result<Self> {
        let n = n.ok_or(Error::NilOperand)?;
        let reduced = Self::reduce(n.magnitude());
        Ok(match n.sign() {
            Sign::Minus => reduced.neg(),
            _ => reduced,
        })
    }

    /// Decodes the fixed-width big-endian encoding.
    pub fn set_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != C::SCALAR_SIZE {
            return Err(Error::InvalidEncodingLength {
                expected: C::SCALAR_SIZE,
                actual: bytes.len(),
            });
        }

        let mut repr = <C::Scalar as PrimeField>::Repr::default();
        repr.as_mut().copy_from_slice(bytes);
        Option::from(C::Scalar::from_repr(repr))
            .map(Self::from_inner)
            .ok_or(Error::ScalarOutOfRange)
    }

    /// Reduces exactly [`WIDE_SCALAR_SIZE`] big-endian bytes modulo the group
    /// order.
    pub fn set_bytes_wide(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != WIDE_SCALAR_SIZE {
            return Err(Error::InvalidEncodingLength {
                expected: WIDE_SCALAR_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self::reduce(&BigUint::from_bytes_be(bytes)))
    }

    /// Fixed-width big-endian encoding.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.to_repr().as_ref().to_vec()
    }

    /// Canonical value as an unsigned integer.
    pub fn to_big_int(&self) -> BigUint {
        BigUint::from_bytes_be(self.inner.to_repr().as_ref())
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: Option<&Self>) -> Option<Self> {
        rhs.map(|rhs| self + rhs)
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: Option<&Self>) -> Option<Self> {
        rhs.map(|rhs| self - rhs)
    }

    /// `self · rhs`.
    pub fn mul(&self, rhs: Option<&Self>) -> Option<Self> {
        rhs.map(|rhs| self * rhs)
    }

    /// `self · rhs⁻¹`. An absent divisor yields `None`; a zero divisor yields
    /// [`Error::DivisionByZero`].
    pub fn div(&self, rhs: Option<&Self>) -> Option<Result<Self>> {
        rhs.map(|rhs| rhs.invert().map(|inv| self * &inv))
    }

    /// Additive inverse.
    pub fn neg(&self) -> Self {
        Self::from_inner(-self.inner)
    }

    /// `2 · self`.
    pub fn double(&self) -> Self {
        Self::from_inner(self.inner.double())
    }

    /// `self²`.
    pub fn square(&self) -> Self {
        Self::from_inner(self.inner.square())
    }

    /// `self³`.
    pub fn cube(&self) -> Self {
        Self::from_inner(self.inner.square() * self.inner)
    }

    /// Multiplicative inverse, computed in constant time.
    pub fn invert(&self) -> Result<Self> {
        Option::from(self.inner.invert())
            .map(Self::from_inner)
            .ok_or(Error::DivisionByZero)
    }

    /// A square root of `self`, if one exists. Which of the two roots is
    /// returned is decided by the backend's Tonelli-Shanks variant.
    pub fn sqrt(&self) -> Result<Self> {
        Option::from(self.inner.sqrt())
            .map(Self::from_inner)
            .ok_or(Error::NoSquareRoot)
    }

    /// Compares canonical values. `None` means incomparable: `rhs` is absent.
    pub fn cmp(&self, rhs: Option<&Self>) -> Option<Ordering> {
        rhs.map(|rhs| {
            self.inner
                .to_repr()
                .as_ref()
                .cmp(rhs.inner.to_repr().as_ref())
        })
    }

    /// Is this zero?
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero().into()
    }

    /// Is this one?
    pub fn is_one(&self) -> bool {
        self.inner == C::Scalar::ONE
    }

    /// Is the canonical value odd?
    pub fn is_odd(&self) -> bool {
        self.inner.is_odd().into()
    }

    /// Is the canonical value even?
    pub fn is_even(&self) -> bool {
        self.inner.is_even().into()
    }

    fn reduce(n: &BigUint) -> Self {
        let reduced = n % order::<C>();
        let bytes = reduced.to_bytes_be();
        let mut repr = <C::Scalar as PrimeField>::Repr::default();
        let out = repr.as_mut();
        let offset = out.len() - bytes.len();
        out[offset..].copy_from_slice(&bytes);
        // `reduced` is below the order, so the encoding is canonical.
        Self::from_inner(C::Scalar::from_repr(repr).unwrap_or(C::Scalar::ZERO))
    }
}

/// Order of the scalar field of `C`.
pub(crate) fn order<C: Curve>() -> BigUint {
    Scalar::<C>::from_inner(-C::Scalar::ONE).to_big_int() + 1u8
}

impl<'a, C: Curve> Add<&'a Scalar<C>> for &Scalar<C> {
    type Output = Scalar<C>;

    fn add(self, rhs: &'a Scalar<C>) -> Scalar<C> {
        Scalar::from_inner(self.inner + rhs.inner)
    }
}

impl<'a, C: Curve> Sub<&'a Scalar<C>> for &Scalar<C> {
    type Output = Scalar<C>;

    fn sub(self, rhs: &'a Scalar<C>) -> Scalar<C> {
        Scalar::from_inner(self.inner - rhs.inner)
    }
}

impl<'a, C: Curve> Mul<&'a Scalar<C>> for &Scalar<C> {
    type Output = Scalar<C>;

    fn mul(self, rhs: &'a Scalar<C>) -> Scalar<C> {
        Scalar::from_inner(self.inner * rhs.inner)
    }
}

impl<C: Curve> Neg for &Scalar<C> {
    type Output = Scalar<C>;

    fn neg(self) -> Scalar<C> {
        Scalar::from_inner(-self.inner)
    }
}

impl<C: Curve> From<u64> for Scalar<C> {
    fn from(n: u64) -> Self {
        Self::from_inner(C::Scalar::from(n))
    }
}

impl<C: Curve> From<Scalar<C>> for BigUint {
    fn from(s: Scalar<C>) -> BigUint {
        s.to_big_int()
    }
}
