//! Hashing to the BLS12-377 groups and to the scalar field.
//!
//! Both groups use `expand_message_xmd` with SHA-256 followed by the
//! Shallue-van de Woestijne map of RFC 9380 section 6.6.1. The map is used
//! for G1 and G2 alike since neither curve admits a simple SWU map without an
//! isogeny (`a = 0`).

use crate::arithmetic::{
    CurveField, CurveParams,
    field::Fp,
    field2::Fp2,
    g1::G1,
    g2::G2,
    projective::ProjectivePoint,
};
use crate::Scalar;
use elliptic_curve::{
    ff::Field,
    hash2curve::{hash_to_field, ExpandMsgXmd, FromOkm, Sgn0},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};
use sha2::Sha256;

/// Domain separation tag for hashing to G1.
pub const G1_DST: &[u8] = b"BLS12377G1_XMD:SHA-256_SVDW_RO_";

/// Domain separation tag for hashing to G2.
pub const G2_DST: &[u8] = b"BLS12377G2_XMD:SHA-256_SVDW_RO_";

/// Domain separation tag for hashing to the scalar field.
pub const SCALAR_DST: &[u8] = b"BLS12377_XMD:SHA-256_SSWU_RO_";

/// Constants of the Shallue-van de Woestijne map for `y^2 = x^3 + b`.
#[derive(Debug)]
pub struct SvdwMapParams<F> {
    /// The non-zero constant `Z`.
    pub z: F,
    /// `g(Z)`
    pub c1: F,
    /// `-Z / 2`
    pub c2: F,
    /// `sqrt(-g(Z) * 3 * Z^2)`, with `sgn0(c3) = 0`
    pub c3: F,
    /// `-4 * g(Z) / (3 * Z^2)`
    pub c4: F,
}

/// Curves that can be mapped to with the Shallue-van de Woestijne method.
pub trait SvdwMap: CurveParams {
    /// Map constants.
    const SVDW: SvdwMapParams<Self::FieldElement>;

    /// Maps a field element to a point on the curve (not necessarily in the
    /// prime-order subgroup).
    ///
    /// Straight-line implementation of RFC 9380 appendix F.1.
    fn map_to_curve(u: &Self::FieldElement) -> ProjectivePoint<Self> {
        let params = &Self::SVDW;
        let one = Self::FieldElement::ONE;
        let g = |x: &Self::FieldElement| x.square() * x + &Self::EQUATION_B;

        let tv1 = u.square() * &params.c1;
        let tv2 = one + &tv1;
        let tv1 = one - &tv1;
        let tv3 = (tv1 * &tv2).invert().unwrap_or(Self::FieldElement::ZERO);
        let tv4 = *u * &tv1 * &tv3 * &params.c3;

        let x1 = params.c2 - &tv4;
        let e1 = g(&x1).is_square();

        let x2 = params.c2 + &tv4;
        let e2 = g(&x2).is_square() & !e1;

        let x3 = tv2.square() * &tv3;
        let x3 = x3.square() * &params.c4 + &params.z;

        let x = Self::FieldElement::conditional_select(&x3, &x1, e1);
        let x = Self::FieldElement::conditional_select(&x, &x2, e2);

        let y = g(&x).sqrt().unwrap_or(Self::FieldElement::ZERO);
        let y = Self::FieldElement::conditional_select(&-y, &y, u.sgn0().ct_eq(&y.sgn0()));

        ProjectivePoint {
            x,
            y,
            z: Self::FieldElement::ONE,
        }
    }
}

impl SvdwMap for G1 {
    const SVDW: SvdwMapParams<Fp> = SvdwMapParams {
        z: Fp::ONE,
        c1: Fp::from_u64(2),
        c2: Fp::from_hex(
            "00d71d230be28875631d82e03650a49d8d116cf9807a89c78f79b117dd04a4000b85aea2180000004284600000000000",
        ),
        c3: Fp::from_hex(
            "010bcfca51912bfd7769051f3d2834f53a453922e3c750460d1bc80ceb2b55712857a312e3391c495d93a4b77468919a",
        ),
        c4: Fp::from_hex(
            "011ed1840fd8b5f1d97cae80486b862766c1e6a200a3625f69f796ca7c0630000f5ce8d82000000058b07ffffffffffe",
        ),
    };
}

impl SvdwMap for G2 {
    const SVDW: SvdwMapParams<Fp2> = SvdwMapParams {
        z: Fp2::from_base(Fp::from_u64(2)),
        c1: Fp2::new(Fp::from_u64(8), G2::EQUATION_B.c1),
        c2: Fp2::from_base(Fp::from_hex(
            "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000000",
        )),
        c3: Fp2::new(
            Fp::from_hex(
                "012503a00dd389a25f71f2b866fb20de53cd99e5fdfe632d34dfccd6be0d24f6e881371aea5cacb7855a66489e0def98",
            ),
            Fp::from_hex(
                "015c7eccd36cc4d5829323ff23b71e5fab3460209ed0fb84da6267e8c03460eb52915e35b969aa60d835ae66d30c38ca",
            ),
        ),
        c4: Fp2::new(
            Fp::from_hex(
                "011ed1840fd8b5f1d97cae80486b862766c1e6a200a3625f69f796ca7c0630000f5ce8d82000000058b07ffffffffffe",
            ),
            Fp::from_hex(
                "00395d1a6991bdfd2b7f5619a815813b148d2e20668713acaecb1e287f347000031294f80666666678234ccccccccccd",
            ),
        ),
    };
}

impl Sgn0 for Fp {
    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }
}

impl Sgn0 for Fp2 {
    fn sgn0(&self) -> Choice {
        Fp2::sgn0(self)
    }
}

/// Hashes `msg` to the prime-order subgroup of the curve `C`.
///
/// Implements the random-oracle encoding `hash_to_curve` of RFC 9380: two
/// field elements are mapped independently, added, and the cofactor cleared.
pub fn hash_to_curve<C>(msg: &[u8], dst: &[u8]) -> elliptic_curve::Result<ProjectivePoint<C>>
where
    C: SvdwMap,
    C::FieldElement: FromOkm,
{
    let mut u = [C::FieldElement::ZERO; 2];
    hash_to_field::<ExpandMsgXmd<Sha256>, _>(&[msg], &[dst], &mut u)?;

    let q0 = C::map_to_curve(&u[0]);
    let q1 = C::map_to_curve(&u[1]);
    Ok(C::clear_cofactor(&(q0 + q1)))
}

/// Hashes `msg` to a scalar with `hash_to_field` (`L = 48`, `count = 1`).
pub fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> elliptic_curve::Result<Scalar> {
    let mut u = [Scalar::ZERO];
    hash_to_field::<ExpandMsgXmd<Sha256>, _>(&[msg], &[dst], &mut u)?;
    Ok(u[0])
}

impl ProjectivePoint<G1> {
    /// Hashes `msg` to G1 under [`G1_DST`].
    pub fn hash(msg: &[u8]) -> elliptic_curve::Result<Self> {
        hash_to_curve(msg, G1_DST)
    }
}

impl ProjectivePoint<G2> {
    /// Hashes `msg` to G2 under [`G2_DST`].
    pub fn hash(msg: &[u8]) -> elliptic_curve::Result<Self> {
        hash_to_curve(msg, G2_DST)
    }
}

impl Scalar {
    /// Hashes `msg` to a scalar under [`SCALAR_DST`].
    pub fn hash(msg: &[u8]) -> elliptic_curve::Result<Self> {
        hash_to_scalar(msg, SCALAR_DST)
    }
}
