//! The G2 group: `y^2 = x^3 + 1/u` over `Fp2`.

use super::{
    CurveParams, affine::AffinePoint, field::Fp, field2::Fp2, projective::ProjectivePoint,
};
use crate::Result;
use elliptic_curve::bigint::{Encoding, U512};

/// Cofactor of the G2 curve.
const COFACTOR: U512 = U512::from_be_hex(
    "0026ba558ae9562addd88d99a6f6a829fbb36b00e1dcc40c8c505634fae2e189d693e8c36676bd09a0f3622fba094800452217cc900000000000000000000001",
);

/// Marker type for the G2 group of BLS12-377.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2;

impl CurveParams for G2 {
    type FieldElement = Fp2;

    const NAME: &'static str = "BLS12377G2";

    /// `1/u = -u/5`
    const EQUATION_B: Fp2 = Fp2::new(
        Fp::ZERO,
        Fp::from_hex(
            "010222f6db0fd6f343bd03737460c589dc7b4f91cd5fd889129207b63c6bf8000dd39e5c1ccccccd1c9ed9999999999a",
        ),
    );

    const EQUATION_B3: Fp2 = Fp2::new(
        Fp::ZERO,
        Fp::from_hex(
            "01582e9e796a73ef04fc0499f08107627b4f14c2672a760c18c2b4f2fb3aa000126f7dd026666666d0d3cccccccccccd",
        ),
    );

    const GENERATOR: (Fp2, Fp2) = (
        Fp2::new(
            Fp::from_hex(
                "018480be71c785fec89630a2a3841d01c565f071203e50317ea501f557db6b9b71889f52bb53540274e3e48f7c005196",
            ),
            Fp::from_hex(
                "00ea6040e700403170dc5a51b1b140d5532777ee6651cecbe7223ece0799c9de5cf89984bff76fe6b26bfefa6ea16afe",
            ),
        ),
        Fp2::new(
            Fp::from_hex(
                "00690d665d446f7bd960736bcbb2efb4de03ed7274b49a58e458c282f832d204f2cf88886d8c7c2ef094094409fd4ddf",
            ),
            Fp::from_hex(
                "00f8169fd28355189e549da3151a70aa61ef11ac3d591bf12463b01acee304c24279b83f5e52270bd9a1cdd185eb8f93",
            ),
        ),
    );

    fn clear_cofactor(point: &ProjectivePoint<Self>) -> ProjectivePoint<Self> {
        point.mul_vartime(&COFACTOR.to_be_bytes())
    }
}

/// Point of G2 in affine coordinates.
pub type G2Affine = AffinePoint<G2>;

/// Point of G2 in projective coordinates.
pub type G2Projective = ProjectivePoint<G2>;

/// Size of a compressed G2 encoding.
pub const G2_COMPRESSED_SIZE: usize = 96;

/// Size of an uncompressed G2 encoding.
pub const G2_UNCOMPRESSED_SIZE: usize = 192;

impl AffinePoint<G2> {
    /// Serializes this point as `x.c1 || x.c0` with the compression flags in
    /// the three most significant bits.
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_SIZE] {
        let mut out = [0u8; G2_COMPRESSED_SIZE];
        self.write_compressed(&mut out);
        out
    }

    /// Serializes this point as `x.c1 || x.c0 || y.c1 || y.c0`.
    pub fn to_uncompressed(&self) -> [u8; G2_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; G2_UNCOMPRESSED_SIZE];
        self.write_uncompressed(&mut out);
        out
    }

    /// Decodes a compressed point, checking curve and subgroup membership.
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        Self::read_compressed(bytes)
    }

    /// Decodes an uncompressed point, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        Self::read_uncompressed(bytes)
    }
}
