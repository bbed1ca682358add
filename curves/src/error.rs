//! Error types.

use thiserror::Error;

/// Errors raised by the constructive and validating operations of this
/// crate.
///
/// Arithmetic on absent operands is not an error: it yields `None` instead.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Input byte string has the wrong size for the requested encoding.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidEncodingLength {
        /// Size the encoding must have.
        expected: usize,
        /// Size of the rejected input.
        actual: usize,
    },

    /// Malformed flag bits, non-zero padding or a non-canonical coordinate.
    #[error("invalid point encoding")]
    InvalidEncoding,

    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// The point lies on the curve but outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    PointNotInSubgroup,

    /// A scalar encoding holds a value not below the group order.
    #[error("scalar is not reduced modulo the group order")]
    ScalarOutOfRange,

    /// A required operand was absent.
    #[error("missing operand")]
    NilOperand,

    /// Division by, or inversion of, zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The scalar is a quadratic non-residue.
    #[error("no square root exists")]
    NoSquareRoot,

    /// Points and scalars of a multi-scalar multiplication differ in count.
    #[error("length mismatch: {points} points and {scalars} scalars")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of scalars supplied.
        scalars: usize,
    },

    /// Message expansion failed while hashing to a field.
    #[error("hash to field failed: {0}")]
    HashToField(#[from] elliptic_curve::Error),
}

#[cfg(feature = "bls12377")]
impl From<bls12377::Error> for Error {
    fn from(err: bls12377::Error) -> Self {
        match err {
            bls12377::Error::Encoding => Error::InvalidEncoding,
            bls12377::Error::NotOnCurve => Error::PointNotOnCurve,
            bls12377::Error::NotInSubgroup => Error::PointNotInSubgroup,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
