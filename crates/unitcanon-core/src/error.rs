//! Errors raised while building or combining canonical forms

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Every way a canonical construction can be rejected.
///
/// All of these surface at the point where the faulty value is built;
/// none of them describe a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("exponent of 0 is forbidden (base `{base}`)")]
    ZeroExponent { base: String },

    #[error("exponent of `{base}` is out of range")]
    ExponentOverflow { base: String },

    #[error("cannot convert `{from}` to `{to}`: dimensions differ")]
    DimensionMismatch { from: String, to: String },

    #[error("magnitudes must be positive, got {value}")]
    NonPositiveMagnitude { value: String },

    #[error("magnitude {magnitude} does not fit the requested representation")]
    MagnitudeOverflow { magnitude: String },

    #[error("magnitude {magnitude} contains an irrational factor")]
    IrrationalMagnitude { magnitude: String },

    #[error("prime factorization requires a positive integer, got {value}")]
    FactorizationDomain { value: u64 },

    #[error("`{name}` is already declared")]
    DuplicateName { name: String },

    #[error("form is already declared as `{existing}`, cannot declare it again as `{requested}`")]
    DuplicateForm { existing: String, requested: String },

    #[error("irrational factor `{name}` must be positive and finite, got {value}")]
    InvalidIrrational { name: String, value: String },

    #[error("irrational factor `{name}` is used with two different values")]
    IrrationalConflict { name: String },

    #[error("unknown dimension `{name}`")]
    UnknownDimension { name: String },

    #[error("unknown unit `{name}`")]
    UnknownUnit { name: String },
}
