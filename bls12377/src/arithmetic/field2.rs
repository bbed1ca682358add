//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 5)`.

use super::field::Fp;
use core::{
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    ff::Field,
    rand_core::RngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// An element `c0 + c1 * u` of the quadratic extension of the base field,
/// where `u^2 = -5`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Fp2 {
    /// Real part.
    pub c0: Fp,
    /// Coefficient of `u`.
    pub c1: Fp,
}

impl Fp2 {
    /// Zero element.
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    /// Size of the big-endian encoding `c1 || c0` in bytes.
    pub const BYTES: usize = 2 * Fp::BYTES;

    /// Creates an element from its two coefficients.
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Embeds a base field element.
    pub const fn from_base(c0: Fp) -> Self {
        Self::new(c0, Fp::ZERO)
    }

    /// Multiplies a base field element by the non-residue `-5`.
    #[inline]
    fn mul_by_nonresidue(a: &Fp) -> Fp {
        let five = a.double().double().add(a);
        five.neg()
    }

    /// Returns `self + rhs`.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::new(Fp::add(&self.c0, &rhs.c0), Fp::add(&self.c1, &rhs.c1))
    }

    /// Returns `self - rhs`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::new(Fp::sub(&self.c0, &rhs.c0), Fp::sub(&self.c1, &rhs.c1))
    }

    /// Returns `-self`.
    pub const fn neg(&self) -> Self {
        Self::new(Fp::neg(&self.c0), Fp::neg(&self.c1))
    }

    /// Returns `2 * self`.
    pub const fn double(&self) -> Self {
        Self::add(self, self)
    }

    /// Returns `self * rhs` (Karatsuba).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let v0 = self.c0.multiply(&rhs.c0);
        let v1 = self.c1.multiply(&rhs.c1);
        let cross = self.c0.add(&self.c1).multiply(&rhs.c0.add(&rhs.c1));

        Self::new(
            v0.add(&Self::mul_by_nonresidue(&v1)),
            cross.sub(&v0).sub(&v1),
        )
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        let v0 = self.c0.square();
        let v1 = self.c1.square();
        let c1 = self.c0.multiply(&self.c1).double();
        Self::new(v0.add(&Self::mul_by_nonresidue(&v1)), c1)
    }

    /// Multiplies both coefficients by a base field element.
    pub fn mul_by_base(&self, rhs: &Fp) -> Self {
        Self::new(self.c0.multiply(rhs), self.c1.multiply(rhs))
    }

    /// Returns the conjugate `c0 - c1 * u`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// Returns the norm `c0^2 + 5 * c1^2`, i.e. `self * conjugate(self)`.
    pub fn norm(&self) -> Fp {
        self.c0.square().sub(&Self::mul_by_nonresidue(&self.c1.square()))
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        self.norm()
            .invert()
            .map(|inv| self.conjugate().mul_by_base(&inv))
    }

    /// Returns a square root of self, if one exists.
    ///
    /// Complex method, see Scott, "Implementing cryptographic pairings",
    /// section 5.1.
    ///
    /// **This operation is variable time.**
    pub fn sqrt_vartime(&self) -> Option<Self> {
        if bool::from(self.c1.is_zero()) {
            // Either c0 is a square in Fp, or c0 / (-5) is.
            if let Some(root) = Option::<Fp>::from(self.c0.sqrt()) {
                return Some(Self::from_base(root));
            }
            let nonresidue_inv = Option::<Fp>::from(Fp::from_u64(5).neg().invert())?;
            let root = Option::<Fp>::from(self.c0.multiply(&nonresidue_inv).sqrt())?;
            return Some(Self::new(Fp::ZERO, root));
        }

        let alpha = Option::<Fp>::from(self.norm().sqrt())?;
        let two_inv = Option::<Fp>::from(Fp::from_u64(2).invert())?;

        let mut delta = self.c0.add(&alpha).multiply(&two_inv);
        if !bool::from(delta.is_square()) {
            delta = self.c0.sub(&alpha).multiply(&two_inv);
        }

        let c0 = Option::<Fp>::from(delta.sqrt())?;
        let c0_inv = Option::<Fp>::from(c0.double().invert())?;
        let root = Self::new(c0, self.c1.multiply(&c0_inv));

        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Returns a square root of self, if one exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        match self.sqrt_vartime() {
            Some(root) => CtOption::new(root, Choice::from(1)),
            None => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    /// Is self a square (zero included)?
    ///
    /// `a` is a square in `Fp2` iff its norm is a square in `Fp`.
    pub fn is_square(&self) -> Choice {
        self.norm().is_square()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Returns true iff self is lexicographically larger than `-self`,
    /// comparing `c1` first and falling back to `c0` when `c1 = 0`.
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Sign of the element as defined by RFC 9380 section 4.1.
    pub fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.is_odd();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.is_odd();
        sign_0 | (zero_0 & sign_1)
    }

    /// Writes the big-endian encoding `c1 || c0` into `out`.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::BYTES);
        let (hi, lo) = out.split_at_mut(Fp::BYTES);
        self.c1.write_be_bytes(hi);
        self.c0.write_be_bytes(lo);
    }

    /// Decodes the canonical big-endian encoding `c1 || c0`.
    pub fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::BYTES {
            return CtOption::new(Self::ZERO, Choice::from(0));
        }

        let (hi, lo) = bytes.split_at(Fp::BYTES);
        Fp::from_be_slice(hi).and_then(|c1| Fp::from_be_slice(lo).map(|c0| Self::new(c0, c1)))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl DefaultIsZeroes for Fp2 {}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(c0: Fp) -> Self {
        Self::from_base(c0)
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(Fp::random(&mut rng), Fp::random(&mut rng))
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Fp2::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        let a = div.invert().unwrap_or(Self::ZERO) * num;
        let sqrt = a.sqrt();
        (sqrt.is_some(), sqrt.unwrap_or(Self::ZERO))
    }
}

impl Add<Fp2> for Fp2 {
    type Output = Fp2;

    fn add(self, rhs: Fp2) -> Fp2 {
        Fp2::add(&self, &rhs)
    }
}

impl Add<&Fp2> for Fp2 {
    type Output = Fp2;

    fn add(self, rhs: &Fp2) -> Fp2 {
        Fp2::add(&self, rhs)
    }
}

impl AddAssign<Fp2> for Fp2 {
    fn add_assign(&mut self, rhs: Fp2) {
        *self = *self + rhs;
    }
}

impl AddAssign<&Fp2> for Fp2 {
    fn add_assign(&mut self, rhs: &Fp2) {
        *self = *self + rhs;
    }
}

impl Sub<Fp2> for Fp2 {
    type Output = Fp2;

    fn sub(self, rhs: Fp2) -> Fp2 {
        Fp2::sub(&self, &rhs)
    }
}

impl Sub<&Fp2> for Fp2 {
    type Output = Fp2;

    fn sub(self, rhs: &Fp2) -> Fp2 {
        Fp2::sub(&self, rhs)
    }
}

impl SubAssign<Fp2> for Fp2 {
    fn sub_assign(&mut self, rhs: Fp2) {
        *self = *self - rhs;
    }
}

impl SubAssign<&Fp2> for Fp2 {
    fn sub_assign(&mut self, rhs: &Fp2) {
        *self = *self - rhs;
    }
}

impl Mul<Fp2> for Fp2 {
    type Output = Fp2;

    fn mul(self, rhs: Fp2) -> Fp2 {
        Fp2::multiply(&self, &rhs)
    }
}

impl Mul<&Fp2> for Fp2 {
    type Output = Fp2;

    fn mul(self, rhs: &Fp2) -> Fp2 {
        Fp2::multiply(&self, rhs)
    }
}

impl MulAssign<Fp2> for Fp2 {
    fn mul_assign(&mut self, rhs: Fp2) {
        *self = *self * rhs;
    }
}

impl MulAssign<&Fp2> for Fp2 {
    fn mul_assign(&mut self, rhs: &Fp2) {
        *self = *self * rhs;
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    fn neg(self) -> Fp2 {
        Fp2::neg(&self)
    }
}

impl Sum for Fp2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fp2> for Fp2 {
    fn sum<I: Iterator<Item = &'a Fp2>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fp2 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Fp2> for Fp2 {
    fn product<I: Iterator<Item = &'a Fp2>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(feature = "hash2curve")]
impl elliptic_curve::hash2curve::FromOkm for Fp2 {
    type Length = elliptic_curve::consts::U128;

    #[allow(deprecated)] // generic_array 0.14
    fn from_okm(data: &elliptic_curve::generic_array::GenericArray<u8, Self::Length>) -> Self {
        let (c0, c1) = data.split_at(64);
        Self::new(Fp::from_wide_be_bytes(c0), Fp::from_wide_be_bytes(c1))
    }
}
