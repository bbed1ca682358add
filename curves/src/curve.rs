//! The backend abstraction every supported group implements.

use crate::Result;
use core::fmt::Debug;
use elliptic_curve::{ff::PrimeField, group::Group};

/// A prime-order group together with its scalar field, encodings and hash
/// functions.
///
/// Implementations are zero-sized marker types; all state lives in the
/// associated types. `Scalar::Repr` must be the fixed-width big-endian
/// encoding of the canonical representative.
pub trait Curve: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Scalar field of the group.
    type Scalar: PrimeField;

    /// Group element.
    type Point: Group<Scalar = Self::Scalar>;

    /// Human readable name.
    const NAME: &'static str;

    /// Order of the prime-order subgroup, in hexadecimal.
    const ORDER_HEX: &'static str;

    /// Modulus of the coordinate field, in hexadecimal.
    const MODULUS_HEX: &'static str;

    /// Cofactor of the curve, in hexadecimal.
    const COFACTOR_HEX: &'static str;

    /// Size of a serialized scalar.
    const SCALAR_SIZE: usize;

    /// Size of a serialized affine coordinate.
    const COORDINATE_SIZE: usize;

    /// Size of a compressed point.
    const COMPRESSED_SIZE: usize;

    /// Size of an uncompressed point.
    const UNCOMPRESSED_SIZE: usize;

    /// Domain separation tag used by [`Curve::hash_to_scalar`].
    const SCALAR_DST: &'static [u8];

    /// Domain separation tag used by [`Curve::hash_to_point`].
    const POINT_DST: &'static [u8];

    /// Hashes `msg` to a scalar under `dst`.
    fn hash_to_scalar_with_dst(msg: &[u8], dst: &[u8]) -> Result<Self::Scalar>;

    /// Hashes `msg` into the prime-order subgroup under `dst`.
    fn hash_to_point_with_dst(msg: &[u8], dst: &[u8]) -> Result<Self::Point>;

    /// Hashes `msg` to a scalar.
    fn hash_to_scalar(msg: &[u8]) -> Result<Self::Scalar> {
        Self::hash_to_scalar_with_dst(msg, Self::SCALAR_DST)
    }

    /// Hashes `msg` into the prime-order subgroup.
    fn hash_to_point(msg: &[u8]) -> Result<Self::Point> {
        Self::hash_to_point_with_dst(msg, Self::POINT_DST)
    }

    /// Does `point` satisfy the curve equation?
    fn is_on_curve(point: &Self::Point) -> bool;

    /// Encodes `point` in [`Curve::COMPRESSED_SIZE`] bytes.
    fn to_compressed(point: &Self::Point) -> Vec<u8>;

    /// Encodes `point` in [`Curve::UNCOMPRESSED_SIZE`] bytes.
    fn to_uncompressed(point: &Self::Point) -> Vec<u8>;

    /// Decodes a compressed point. The caller has checked the length.
    fn from_compressed(bytes: &[u8]) -> Result<Self::Point>;

    /// Decodes an uncompressed point. The caller has checked the length.
    fn from_uncompressed(bytes: &[u8]) -> Result<Self::Point>;

    /// Returns the big-endian affine coordinates of `point`, or `None` for the
    /// identity.
    fn to_coordinates(point: &Self::Point) -> Option<(Vec<u8>, Vec<u8>)>;

    /// Builds a point from big-endian affine coordinates of
    /// [`Curve::COORDINATE_SIZE`] bytes each.
    fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::Point>;
}
