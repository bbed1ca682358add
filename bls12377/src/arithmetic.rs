//! Pure Rust implementation of group operations on BLS12-377.
//!
//! Curve parameters can be found in the [Zexe paper] (Bowe, Chiesa, Green,
//! Miers, Mishra, Wu, 2018), section 5.
//!
//! [Zexe paper]: https://eprint.iacr.org/2018/962

#[macro_use]
mod macros;

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod field2;
pub(crate) mod g1;
pub(crate) mod g2;
pub(crate) mod projective;
pub(crate) mod scalar;

use core::fmt::Debug;
use elliptic_curve::{
    ff::Field,
    subtle::{Choice, CtOption},
};

use self::{field::Fp, field2::Fp2};

/// Coordinate field of a curve: the base field for G1 and its quadratic
/// extension for G2.
pub trait CurveField: Field {
    /// Size of the canonical big-endian encoding in bytes.
    const ENCODED_LEN: usize;

    /// Writes the canonical big-endian encoding into `out`.
    fn write_be_bytes(&self, out: &mut [u8]);

    /// Decodes a canonical big-endian encoding.
    fn from_be_slice(bytes: &[u8]) -> CtOption<Self>;

    /// Is `self > -self` in the ordering used by point compression?
    fn lexicographically_largest(&self) -> Choice;

    /// Is `self` a square (zero included)?
    fn is_square(&self) -> Choice;

    /// Sign of the element as defined by RFC 9380 section 4.1.
    fn sgn0(&self) -> Choice;
}

impl CurveField for Fp {
    const ENCODED_LEN: usize = Fp::BYTES;

    fn write_be_bytes(&self, out: &mut [u8]) {
        Fp::write_be_bytes(self, out)
    }

    fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        Fp::from_be_slice(bytes)
    }

    fn lexicographically_largest(&self) -> Choice {
        Fp::lexicographically_largest(self)
    }

    fn is_square(&self) -> Choice {
        Fp::is_square(self)
    }

    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }
}

impl CurveField for Fp2 {
    const ENCODED_LEN: usize = Fp2::BYTES;

    fn write_be_bytes(&self, out: &mut [u8]) {
        Fp2::write_be_bytes(self, out)
    }

    fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
        Fp2::from_be_slice(bytes)
    }

    fn lexicographically_largest(&self) -> Choice {
        Fp2::lexicographically_largest(self)
    }

    fn is_square(&self) -> Choice {
        Fp2::is_square(self)
    }

    fn sgn0(&self) -> Choice {
        Fp2::sgn0(self)
    }
}

/// Parameters of a short Weierstrass curve `y^2 = x^3 + b` (the
/// 𝒂-coefficient is zero for both BLS12-377 groups).
pub trait CurveParams: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Coordinate field.
    type FieldElement: CurveField;

    /// Human readable group name.
    const NAME: &'static str;

    /// Coefficient `b` of the curve equation.
    const EQUATION_B: Self::FieldElement;

    /// `3 * b`, used by the complete addition formulas.
    const EQUATION_B3: Self::FieldElement;

    /// Generator of the prime-order subgroup as `(x, y)`.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Maps an arbitrary curve point into the prime-order subgroup.
    fn clear_cofactor(point: &projective::ProjectivePoint<Self>) -> projective::ProjectivePoint<Self>;
}
