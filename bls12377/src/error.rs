//! Error types.

use core::fmt;

/// Reasons a point encoding can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed flag bits, non-zero padding or a non-canonical coordinate.
    Encoding,

    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// The point lies on the curve but outside the prime-order subgroup.
    NotInSubgroup,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding => write!(f, "malformed point encoding"),
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::NotInSubgroup => write!(f, "point is not in the prime-order subgroup"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
