//! BLS12-377 G1 and G2 backed by the `bls12377` crate.

use crate::{Curve, Error, Result};
use bls12377::{
    hash2curve::{self, SCALAR_DST},
    AffinePoint, CurveField, CurveParams, G1Affine, G1Projective, G2Affine, G2Projective,
    ProjectivePoint, Scalar,
};

fn to_coordinates<P: CurveParams>(point: &ProjectivePoint<P>) -> Option<(Vec<u8>, Vec<u8>)> {
    let affine = point.to_affine();
    if bool::from(affine.is_identity()) {
        return None;
    }

    let mut x = vec![0u8; P::FieldElement::ENCODED_LEN];
    let mut y = vec![0u8; P::FieldElement::ENCODED_LEN];
    affine.x().write_be_bytes(&mut x);
    affine.y().write_be_bytes(&mut y);
    Some((x, y))
}

fn from_coordinates<P: CurveParams>(x: &[u8], y: &[u8]) -> Result<ProjectivePoint<P>> {
    let x = Option::from(P::FieldElement::from_be_slice(x)).ok_or(Error::InvalidEncoding)?;
    let y = Option::from(P::FieldElement::from_be_slice(y)).ok_or(Error::InvalidEncoding)?;
    Ok(AffinePoint::<P>::from_coordinates(x, y)?.into())
}

macro_rules! impl_bls12377_curve {
    (
        $curve:ident,
        $params:ty,
        affine: $affine:ty,
        projective: $projective:ty,
        name: $name:expr,
        cofactor: $cofactor:expr,
        coordinate_size: $coordinate_size:expr,
        point_dst: $point_dst:expr
    ) => {
        #[doc = concat!("The ", $name, " group of BLS12-377.")]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
        pub struct $curve;

        impl Curve for $curve {
            type Scalar = Scalar;
            type Point = $projective;

            const NAME: &'static str = $name;
            const ORDER_HEX: &'static str = bls12377::ORDER_HEX;
            const MODULUS_HEX: &'static str = bls12377::MODULUS_HEX;
            const COFACTOR_HEX: &'static str = $cofactor;

            const SCALAR_SIZE: usize = 32;
            const COORDINATE_SIZE: usize = $coordinate_size;
            const COMPRESSED_SIZE: usize = $coordinate_size;
            const UNCOMPRESSED_SIZE: usize = 2 * $coordinate_size;

            const SCALAR_DST: &'static [u8] = SCALAR_DST;
            const POINT_DST: &'static [u8] = $point_dst;

            fn hash_to_scalar_with_dst(msg: &[u8], dst: &[u8]) -> Result<Scalar> {
                Ok(hash2curve::hash_to_scalar(msg, dst)?)
            }

            fn hash_to_point_with_dst(msg: &[u8], dst: &[u8]) -> Result<$projective> {
                Ok(hash2curve::hash_to_curve::<$params>(msg, dst)?)
            }

            fn is_on_curve(point: &$projective) -> bool {
                point.is_on_curve().into()
            }

            fn to_compressed(point: &$projective) -> Vec<u8> {
                point.to_affine().to_compressed().to_vec()
            }

            fn to_uncompressed(point: &$projective) -> Vec<u8> {
                point.to_affine().to_uncompressed().to_vec()
            }

            fn from_compressed(bytes: &[u8]) -> Result<$projective> {
                Ok(<$affine>::from_compressed(bytes)?.into())
            }

            fn from_uncompressed(bytes: &[u8]) -> Result<$projective> {
                Ok(<$affine>::from_uncompressed(bytes)?.into())
            }

            fn to_coordinates(point: &$projective) -> Option<(Vec<u8>, Vec<u8>)> {
                to_coordinates(point)
            }

            fn from_coordinates(x: &[u8], y: &[u8]) -> Result<$projective> {
                from_coordinates::<$params>(x, y)
            }
        }
    };
}

impl_bls12377_curve!(
    Bls12377G1,
    bls12377::G1,
    affine: G1Affine,
    projective: G1Projective,
    name: "BLS12377G1",
    cofactor: bls12377::G1_COFACTOR_HEX,
    coordinate_size: bls12377::G1_COMPRESSED_SIZE,
    point_dst: hash2curve::G1_DST
);

impl_bls12377_curve!(
    Bls12377G2,
    bls12377::G2,
    affine: G2Affine,
    projective: G2Projective,
    name: "BLS12377G2",
    cofactor: bls12377::G2_COFACTOR_HEX,
    coordinate_size: bls12377::G2_COMPRESSED_SIZE,
    point_dst: hash2curve::G2_DST
);
