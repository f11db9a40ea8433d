//! Error types for measurement handling.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors produced when parsing measurement strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The input is not a valid decimal number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The input contains a malformed fraction.
    #[error("Invalid fraction: {0}")]
    InvalidFraction(String),

    /// The fraction denominator is zero.
    #[error("Fraction denominator is zero")]
    ZeroDenominator,

    /// The input is empty.
    #[error("Empty measurement")]
    Empty,
}

/// Result type alias for measurement parsing.
pub type UnitResult<T> = Result<T, UnitError>;
