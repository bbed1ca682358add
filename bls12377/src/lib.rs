#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes
)]

//! ## Encodings
//!
//! Points serialize in the layout used by gnark-crypto: big-endian
//! coordinates with three flag bits in the most significant bits of the first
//! byte. See [`G1Affine::to_compressed`] and [`G2Affine::to_compressed`].

#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod error;

#[cfg(feature = "hash2curve")]
pub mod hash2curve;

pub use elliptic_curve::{self, ff, group};

pub use crate::{
    arithmetic::{
        CurveField, CurveParams,
        affine::AffinePoint,
        field::Fp,
        field2::Fp2,
        g1::{G1, G1Affine, G1Projective, G1_COMPRESSED_SIZE, G1_UNCOMPRESSED_SIZE},
        g2::{G2, G2Affine, G2Projective, G2_COMPRESSED_SIZE, G2_UNCOMPRESSED_SIZE},
        projective::ProjectivePoint,
        scalar::{Scalar, ScalarBytes},
    },
    error::{Error, Result},
};

/// Order of the BLS12-377 G1 and G2 subgroups (i.e. scalar modulus)
/// serialized as hexadecimal.
pub const ORDER_HEX: &str = "0x12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001";

/// Modulus of the BLS12-377 base field serialized as hexadecimal.
pub const MODULUS_HEX: &str = "0x01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001";

/// The parameter `x` the BLS12-377 family member is generated from.
pub const CURVE_X: u64 = 0x8508_c000_0000_0001;

/// Cofactor of G1 serialized as hexadecimal.
pub const G1_COFACTOR_HEX: &str = "0x170b5d44300000000000000000000000";

/// Cofactor of G2 serialized as hexadecimal.
pub const G2_COFACTOR_HEX: &str = "0x26ba558ae9562addd88d99a6f6a829fbb36b00e1dcc40c8c505634fae2e189d693e8c36676bd09a0f3622fba094800452217cc900000000000000000000001";
