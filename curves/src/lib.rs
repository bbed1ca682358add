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

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "p256")]
//! # {
//! let curve = curves::p256();
//! let g = curve.point.generator();
//! let two = curve.scalar.new(2);
//!
//! assert!(g.double().equal(g.mul(Some(&two)).as_ref()));
//! assert_eq!(g.add(None), None);
//! # }
//! ```

mod backends;
mod curve;
mod error;
mod msm;
mod point;
mod registry;
mod scalar;

pub use elliptic_curve::{self, ff, group, rand_core};
pub use num_bigint::{BigInt, BigUint};

#[cfg(feature = "bls12377")]
pub use crate::{
    backends::{Bls12377G1, Bls12377G2},
    registry::{bls12377_g1, bls12377_g2},
};
#[cfg(feature = "p256")]
pub use crate::{backends::P256, registry::p256};

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    point::Point,
    registry::{CurveDescriptor, PointFactory, ScalarFactory},
    scalar::{Scalar, WIDE_SCALAR_SIZE},
};

#[cfg(feature = "bls12377")]
pub use bls12377;
#[cfg(feature = "p256")]
pub use ::p256 as nist_p256;
