//! Projective curve points.

#![allow(clippy::needless_range_loop, clippy::op_ref)]

use super::{CurveParams, affine::AffinePoint, scalar};
use crate::Scalar;
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    bigint::Encoding,
    ff::{Field, PrimeField},
    group::Group,
    rand_core::RngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::DefaultIsZeroes,
};

/// Point on a BLS12-377 group in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X / Z, Y / Z)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C> ProjectivePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ZERO,
    };

    /// Base point of the prime-order subgroup.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::FieldElement::ONE,
    };

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * &zinv,
                y: self.y * &zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Does this point satisfy `Y^2 Z = X^3 + b Z^3`?
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() * &self.z;
        let rhs = self.x.square() * &self.x + C::EQUATION_B * self.z.square() * &self.z;
        lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Complete addition for `a = 0`: Renes-Costello-Batina 2015, algorithm 7.
    /// <https://eprint.iacr.org/2015/1060>
    pub fn add(&self, other: &Self) -> Self {
        let b3 = C::EQUATION_B3;

        let t0 = self.x * &other.x;
        let t1 = self.y * &other.y;
        let t2 = self.z * &other.z;
        let t3 = (self.x + &self.y) * &(other.x + &other.y) - &(t0 + &t1);
        let t4 = (self.y + &self.z) * &(other.y + &other.z) - &(t1 + &t2);
        let y3 = (self.x + &self.z) * &(other.x + &other.z) - &(t0 + &t2);

        let t0 = t0.double() + &t0;
        let t2 = b3 * &t2;
        let z3 = t1 + &t2;
        let t1 = t1 - &t2;
        let y3 = b3 * &y3;

        Self {
            x: t3 * &t1 - &(t4 * &y3),
            y: t1 * &z3 + &(y3 * &t0),
            z: z3 * &t4 + &(t0 * &t3),
        }
    }

    /// Returns `self + other`.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        let sum = self.add(&Self::from(*other));
        Self::conditional_select(&sum, self, other.is_identity())
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `[2] self`.
    ///
    /// Complete doubling for `a = 0`: Renes-Costello-Batina 2015, algorithm 9.
    pub fn double(&self) -> Self {
        let b3 = C::EQUATION_B3;

        let t0 = self.y.square();
        let z3 = t0.double().double().double();
        let t1 = self.y * &self.z;
        let t2 = b3 * &self.z.square();

        let x3 = t2 * &z3;
        let y3 = t0 + &t2;
        let z3 = t1 * &z3;

        let t2 = t2.double() + &t2;
        let t0 = t0 - &t2;
        let y3 = t0 * &y3 + &x3;

        let t1 = self.x * &self.y;
        let x3 = (t0 * &t1).double();

        Self { x: x3, y: y3, z: z3 }
    }

    /// Returns `[k] self` using a 4-bit fixed window over a constant-time
    /// table lookup.
    fn mul(&self, k: &Scalar) -> Self {
        let k = k.to_le_bytes();

        let mut pc = [Self::default(); 16];
        pc[0] = Self::IDENTITY;
        pc[1] = *self;

        for i in 2..16 {
            pc[i] = if i % 2 == 0 {
                pc[i / 2].double()
            } else {
                pc[i - 1].add(self)
            };
        }

        let mut q = Self::IDENTITY;
        let mut pos = (Scalar::NUM_BITS.div_ceil(8) * 8) as usize - 4;

        loop {
            let slot = (k[pos >> 3] >> (pos & 7)) & 0xf;

            let mut t = Self::IDENTITY;

            for i in 1..16 {
                t.conditional_assign(
                    &pc[i],
                    Choice::from(((slot as usize ^ i).wrapping_sub(1) >> 8) as u8 & 1),
                );
            }

            q = q.add(&t);

            if pos == 0 {
                break;
            }

            q = q.double().double().double().double();
            pos -= 4;
        }

        q
    }

    /// Returns `[k] self` for a big-endian integer `k`.
    ///
    /// **This operation is variable time with respect to `k`.** It is meant
    /// for public multipliers such as the group order or a cofactor.
    pub fn mul_vartime(&self, k: &[u8]) -> Self {
        let mut acc = Self::IDENTITY;

        for byte in k {
            for i in (0..8).rev() {
                acc = acc.double();
                if (byte >> i) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }

        acc
    }

    /// Is this point in the prime-order subgroup, i.e. is `[r] self` the
    /// identity?
    pub fn is_torsion_free(&self) -> Choice {
        self.mul_vartime(&scalar::ORDER.to_be_bytes()).is_identity()
    }

    /// Maps this point into the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        C::clear_cofactor(self)
    }
}

impl<C> Group for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Scalar = Scalar;

    fn random(rng: impl RngCore) -> Self {
        Self::GENERATOR * Scalar::random(rng)
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        ProjectivePoint::is_identity(self)
    }

    fn double(&self) -> Self {
        ProjectivePoint::double(self)
    }
}

impl<C> ConditionallySelectable for ProjectivePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C> ConstantTimeEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 / Z1, Y1 / Z1) == (X2 / Z2, Y2 / Z2) without inversions.
        let x1 = self.x * &other.z;
        let x2 = other.x * &self.z;
        let y1 = self.y * &other.z;
        let y2 = other.y * &self.z;

        x1.ct_eq(&x2) & y1.ct_eq(&y2)
    }
}

impl<C> Default for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for ProjectivePoint<C> where C: CurveParams {}

impl<C> Eq for ProjectivePoint<C> where C: CurveParams {}

impl<C> PartialEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> PartialEq<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &AffinePoint<C>) -> bool {
        self.ct_eq(&Self::from(*other)).into()
    }
}

impl<C> From<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: AffinePoint<C>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C> From<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

//
// Arithmetic trait impls
//

impl<C> Add<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, other)
    }
}

impl<C> AddAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C> Add<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl<C> Add<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl<C> AddAssign<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl<C> Sub<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(self, other)
    }
}

impl<C> SubAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C, S> Mul<S> for ProjectivePoint<C>
where
    C: CurveParams,
    S: Borrow<Scalar>,
{
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        ProjectivePoint::mul(&self, scalar.borrow())
    }
}

impl<C> Mul<&Scalar> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar)
    }
}

impl<C, S> MulAssign<S> for ProjectivePoint<C>
where
    C: CurveParams,
    S: Borrow<Scalar>,
{
    fn mul_assign(&mut self, scalar: S) {
        *self = ProjectivePoint::mul(self, scalar.borrow());
    }
}

impl<C> Neg for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

impl<'a, C> Neg for &'a ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

impl<C> Sum for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}
