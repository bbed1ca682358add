//! NIST P-256 backed by the `p256` crate.

use crate::{Curve, Error, Result};
use elliptic_curve::{
    group::Group,
    hash2curve::{ExpandMsgXmd, GroupDigest},
    sec1::{FromEncodedPoint, ToEncodedPoint},
};
use p256::{AffinePoint, EncodedPoint, FieldBytes, NistP256, ProjectivePoint, Scalar};
use sha2::Sha256;

const DST: &[u8] = b"P256_XMD:SHA-256_SSWU_RO_";

/// Flag byte marking the identity in both encodings.
const IDENTITY_FLAG: u8 = 0x80;

/// Big-endian base field modulus.
const MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// The NIST P-256 group (secp256r1).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct P256;

fn identity_encoding(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    bytes[0] = IDENTITY_FLAG;
    bytes
}

/// Accepts the identity encoding, rejecting any other use of the identity
/// flag. Returns `None` when the input is not an identity encoding.
fn read_identity(bytes: &[u8]) -> Option<Result<ProjectivePoint>> {
    if bytes[0] & IDENTITY_FLAG == 0 {
        return None;
    }
    if bytes[0] != IDENTITY_FLAG || bytes[1..].iter().any(|&b| b != 0) {
        return Some(Err(Error::InvalidEncoding));
    }
    Some(Ok(ProjectivePoint::IDENTITY))
}

fn check_coordinate(bytes: &[u8]) -> Result<()> {
    if bytes.len() != MODULUS.len() || bytes >= &MODULUS[..] {
        return Err(Error::InvalidEncoding);
    }
    Ok(())
}

fn decode(encoded: &EncodedPoint) -> Result<ProjectivePoint> {
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(encoded))
        .map(ProjectivePoint::from)
        .ok_or(Error::PointNotOnCurve)
}

impl Curve for P256 {
    type Scalar = Scalar;
    type Point = ProjectivePoint;

    const NAME: &'static str = "P-256";
    const ORDER_HEX: &'static str =
        "0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";
    const MODULUS_HEX: &'static str =
        "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
    const COFACTOR_HEX: &'static str = "0x1";

    const SCALAR_SIZE: usize = 32;
    const COORDINATE_SIZE: usize = 32;
    const COMPRESSED_SIZE: usize = 33;
    const UNCOMPRESSED_SIZE: usize = 65;

    const SCALAR_DST: &'static [u8] = DST;
    const POINT_DST: &'static [u8] = DST;

    fn hash_to_scalar_with_dst(msg: &[u8], dst: &[u8]) -> Result<Scalar> {
        Ok(NistP256::hash_to_scalar::<ExpandMsgXmd<Sha256>>(&[msg], &[dst])?)
    }

    fn hash_to_point_with_dst(msg: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
        Ok(NistP256::hash_from_bytes::<ExpandMsgXmd<Sha256>>(&[msg], &[dst])?)
    }

    fn is_on_curve(point: &ProjectivePoint) -> bool {
        if bool::from(point.is_identity()) {
            return true;
        }
        let encoded = point.to_affine().to_encoded_point(false);
        AffinePoint::from_encoded_point(&encoded).is_some().into()
    }

    fn to_compressed(point: &ProjectivePoint) -> Vec<u8> {
        if bool::from(point.is_identity()) {
            return identity_encoding(Self::COMPRESSED_SIZE);
        }
        point.to_affine().to_encoded_point(true).as_bytes().to_vec()
    }

    fn to_uncompressed(point: &ProjectivePoint) -> Vec<u8> {
        if bool::from(point.is_identity()) {
            return identity_encoding(Self::UNCOMPRESSED_SIZE);
        }
        point.to_affine().to_encoded_point(false).as_bytes().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<ProjectivePoint> {
        if let Some(identity) = read_identity(bytes) {
            return identity;
        }
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(Error::InvalidEncoding);
        }
        check_coordinate(&bytes[1..])?;
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidEncoding)?;
        decode(&encoded)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<ProjectivePoint> {
        if let Some(identity) = read_identity(bytes) {
            return identity;
        }
        if bytes[0] != 0x04 {
            return Err(Error::InvalidEncoding);
        }
        check_coordinate(&bytes[1..33])?;
        check_coordinate(&bytes[33..])?;
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidEncoding)?;
        decode(&encoded)
    }

    fn to_coordinates(point: &ProjectivePoint) -> Option<(Vec<u8>, Vec<u8>)> {
        if bool::from(point.is_identity()) {
            return None;
        }
        let encoded = point.to_affine().to_encoded_point(false);
        Some((encoded.x()?.to_vec(), encoded.y()?.to_vec()))
    }

    fn from_coordinates(x: &[u8], y: &[u8]) -> Result<ProjectivePoint> {
        check_coordinate(x)?;
        check_coordinate(y)?;
        #[allow(deprecated)] // from_slice
        let encoded = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false,
        );
        decode(&encoded)
    }
}
