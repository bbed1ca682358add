//! The G1 group: `y^2 = x^3 + 1` over `Fp`.

use super::{CurveParams, affine::AffinePoint, field::Fp, projective::ProjectivePoint};
use crate::{CURVE_X, Result};

/// `x - 1` for the curve parameter `x = 0x8508c00000000001`, big-endian.
const X_MINUS_ONE: [u8; 8] = (CURVE_X - 1).to_be_bytes();

/// Marker type for the G1 group of BLS12-377.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1;

impl CurveParams for G1 {
    type FieldElement = Fp;

    const NAME: &'static str = "BLS12377G1";

    const EQUATION_B: Fp = Fp::ONE;
    const EQUATION_B3: Fp = Fp::from_u64(3);

    const GENERATOR: (Fp, Fp) = (
        Fp::from_hex(
            "008848defe740a67c8fc6225bf87ff5485951e2caa9d41bb188282c8bd37cb5cd5481512ffcd394eeab9b16eb21be9ef",
        ),
        Fp::from_hex(
            "01914a69c5102eff1f674f5d30afeec4bd7fb348ca3e52d96d182ad44fb82305c2fe3d3634a9591afd82de55559c8ea6",
        ),
    );

    /// Multiplies by `1 - x`, which annihilates the cofactor
    /// `h1 = (x - 1)^2 / 3` on every point of the curve.
    fn clear_cofactor(point: &ProjectivePoint<Self>) -> ProjectivePoint<Self> {
        -point.mul_vartime(&X_MINUS_ONE)
    }
}

/// Point of G1 in affine coordinates.
pub type G1Affine = AffinePoint<G1>;

/// Point of G1 in projective coordinates.
pub type G1Projective = ProjectivePoint<G1>;

/// Size of a compressed G1 encoding.
pub const G1_COMPRESSED_SIZE: usize = 48;

/// Size of an uncompressed G1 encoding.
pub const G1_UNCOMPRESSED_SIZE: usize = 96;

impl AffinePoint<G1> {
    /// Serializes this point as `x` with the compression flags in the three
    /// most significant bits.
    pub fn to_compressed(&self) -> [u8; G1_COMPRESSED_SIZE] {
        let mut out = [0u8; G1_COMPRESSED_SIZE];
        self.write_compressed(&mut out);
        out
    }

    /// Serializes this point as `x || y`.
    pub fn to_uncompressed(&self) -> [u8; G1_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; G1_UNCOMPRESSED_SIZE];
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

#[cfg(test)]
mod tests {
    use super::{G1Affine, G1Projective};

    #[test]
    fn generator_is_valid() {
        let g = G1Affine::GENERATOR;
        assert!(bool::from(g.is_on_curve()));
        assert!(bool::from(g.is_torsion_free()));
        assert!(bool::from(G1Projective::GENERATOR.is_on_curve()));
    }

    #[test]
    fn cofactor_clearing_keeps_subgroup() {
        let g = G1Projective::GENERATOR.double();
        let cleared = g.clear_cofactor();
        assert!(bool::from(cleared.is_torsion_free()));
        assert!(!bool::from(cleared.is_identity()));
    }
}
