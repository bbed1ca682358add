//! Affine curve points and their gnark-compatible byte encodings.

#![allow(clippy::op_ref)]

use super::{CurveField, CurveParams, projective::ProjectivePoint};
use crate::{Error, Result};
use core::ops::Neg;
use elliptic_curve::{
    ff::Field,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
    zeroize::DefaultIsZeroes,
};

/// Mask of the three flag bits stored in the first byte of an encoding.
const FLAG_MASK: u8 = 0b111 << 5;

/// Compressed point whose `y` is the smaller of `{y, -y}`.
pub(crate) const COMPRESSED_SMALLEST: u8 = 0b100 << 5;

/// Compressed point whose `y` is the larger of `{y, -y}`.
pub(crate) const COMPRESSED_LARGEST: u8 = 0b101 << 5;

/// Compressed point at infinity.
pub(crate) const COMPRESSED_INFINITY: u8 = 0b110 << 5;

/// Uncompressed point at infinity.
pub(crate) const UNCOMPRESSED_INFINITY: u8 = 0b010 << 5;

/// Uncompressed finite point.
const UNCOMPRESSED: u8 = 0;

/// Largest coordinate encoding (an `Fp2` element).
const MAX_COORDINATE_LEN: usize = 96;

/// Point on a BLS12-377 group in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: CurveParams> {
    /// x-coordinate
    pub(crate) x: C::FieldElement,

    /// y-coordinate
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the prime-order subgroup.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Builds a finite point from its coordinates, checking the curve
    /// equation and subgroup membership.
    pub fn from_coordinates(x: C::FieldElement, y: C::FieldElement) -> Result<Self> {
        let point = Self { x, y, infinity: 0 };
        if !bool::from(point.is_on_curve()) {
            return Err(Error::NotOnCurve);
        }
        point.check_subgroup()
    }

    /// Returns the x-coordinate, zero for the identity.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// Returns the y-coordinate, zero for the identity.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy `y^2 = x^3 + b`? The identity always does.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * &self.x + &C::EQUATION_B;
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// Is this point in the prime-order subgroup?
    pub fn is_torsion_free(&self) -> Choice {
        ProjectivePoint::from(*self).is_torsion_free()
    }

    fn check_subgroup(self) -> Result<Self> {
        if bool::from(self.is_torsion_free()) {
            Ok(self)
        } else {
            Err(Error::NotInSubgroup)
        }
    }

    /// Writes the compressed encoding: `x` with the flag bits in the top of
    /// the first byte. `out` must be one coordinate long.
    pub(crate) fn write_compressed(&self, out: &mut [u8]) {
        out.fill(0);

        if bool::from(self.is_identity()) {
            out[0] = COMPRESSED_INFINITY;
            return;
        }

        self.x.write_be_bytes(out);
        out[0] |= if bool::from(self.y.lexicographically_largest()) {
            COMPRESSED_LARGEST
        } else {
            COMPRESSED_SMALLEST
        };
    }

    /// Writes the uncompressed encoding `x || y`. `out` must be two
    /// coordinates long.
    pub(crate) fn write_uncompressed(&self, out: &mut [u8]) {
        out.fill(0);

        if bool::from(self.is_identity()) {
            out[0] = UNCOMPRESSED_INFINITY;
            return;
        }

        let (x, y) = out.split_at_mut(C::FieldElement::ENCODED_LEN);
        self.x.write_be_bytes(x);
        self.y.write_be_bytes(y);
    }

    /// Decodes a compressed encoding, recovering `y` from the curve equation.
    pub(crate) fn read_compressed(bytes: &[u8]) -> Result<Self> {
        let len = C::FieldElement::ENCODED_LEN;
        if bytes.len() != len {
            return Err(Error::Encoding);
        }

        match bytes[0] & FLAG_MASK {
            COMPRESSED_INFINITY => Self::read_infinity(bytes),
            flag @ (COMPRESSED_SMALLEST | COMPRESSED_LARGEST) => {
                let mut buf = [0u8; MAX_COORDINATE_LEN];
                buf[..len].copy_from_slice(bytes);
                buf[0] &= !FLAG_MASK;

                let x = Self::read_coordinate(&buf[..len])?;
                let rhs = x.square() * &x + &C::EQUATION_B;
                let y = Option::<C::FieldElement>::from(rhs.sqrt()).ok_or(Error::NotOnCurve)?;

                let want_largest = Choice::from((flag == COMPRESSED_LARGEST) as u8);
                let flip = !y.lexicographically_largest().ct_eq(&want_largest);
                let y = C::FieldElement::conditional_select(&y, &-y, flip);

                Self { x, y, infinity: 0 }.check_subgroup()
            }
            _ => Err(Error::Encoding),
        }
    }

    /// Decodes an uncompressed encoding `x || y`.
    pub(crate) fn read_uncompressed(bytes: &[u8]) -> Result<Self> {
        let len = C::FieldElement::ENCODED_LEN;
        if bytes.len() != 2 * len {
            return Err(Error::Encoding);
        }

        match bytes[0] & FLAG_MASK {
            UNCOMPRESSED_INFINITY => Self::read_infinity(bytes),
            UNCOMPRESSED => {
                let x = Self::read_coordinate(&bytes[..len])?;
                let y = Self::read_coordinate(&bytes[len..])?;
                Self::from_coordinates(x, y)
            }
            _ => Err(Error::Encoding),
        }
    }

    fn read_coordinate(bytes: &[u8]) -> Result<C::FieldElement> {
        Option::from(C::FieldElement::from_be_slice(bytes)).ok_or(Error::Encoding)
    }

    /// Everything but the flag bits must be zero.
    fn read_infinity(bytes: &[u8]) -> Result<Self> {
        let padding_is_zero = bytes[0] & !FLAG_MASK == 0 && bytes[1..].iter().all(|b| *b == 0);
        if padding_is_zero {
            Ok(Self::IDENTITY)
        } else {
            Err(Error::Encoding)
        }
    }
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C> Default for AffinePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for AffinePoint<C> where C: CurveParams {}

impl<C> Eq for AffinePoint<C> where C: CurveParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> From<&ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: CurveParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: C::FieldElement::conditional_select(&-self.y, &self.y, self.is_identity()),
            infinity: self.infinity,
        }
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: CurveParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}
