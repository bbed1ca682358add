//! Curve backends.

#[cfg(feature = "bls12377")]
mod bls12_377;
#[cfg(feature = "p256")]
mod nist_p256;

#[cfg(feature = "bls12377")]
pub use self::bls12_377::{Bls12377G1, Bls12377G2};
#[cfg(feature = "p256")]
pub use self::nist_p256::P256;
