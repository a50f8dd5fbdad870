//! Error types for size construction and arithmetic.
//!
//! Every fallible operation in this crate returns a [`SizeError`]. Comparing
//! a [`Size`](crate::Size) against anything other than another `Size` does
//! not type-check, so there is no runtime error for incompatible operands.

use thiserror::Error;

/// Errors raised while building or combining sizes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SizeError {
    /// Raised when an input cannot stand for a whole number of octets
    /// (fractional, NaN or infinite values).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised when a result would be negative or too large to represent.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Raised when a division, remainder or power has a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

impl SizeError {
    /// Shorthand for the "negative octet count" flavour of [`SizeError::OutOfRange`].
    pub(crate) fn negative(what: &impl std::fmt::Display) -> Self {
        Self::OutOfRange(format!("{what} would be a negative octet count"))
    }

    /// Shorthand for the "does not fit in `u128`" flavour of [`SizeError::OutOfRange`].
    pub(crate) fn overflow(what: &impl std::fmt::Display) -> Self {
        Self::OutOfRange(format!("{what} overflows the octet count"))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SizeError>;
