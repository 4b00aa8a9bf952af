//! Error types for operators

use num_traits::Float;
use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the scalar operators.
///
/// There is a single kind: a [`Domain`](Error::Domain) error, returned
/// when an operator is evaluated outside the region where it is
/// defined. Nothing in this crate recovers from it or logs it; callers
/// decide whether it is a user-facing failure or something to map to
/// NaN, and report it where they handle it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// An operator's precondition was violated.
    #[error("domain error: `{op}` requires {requirement}, got {value}")]
    Domain {
        /// Name of the operator that rejected its input.
        op: &'static str,
        /// The precondition, e.g. `"x > 0"`.
        requirement: &'static str,
        /// The offending input, widened to `f64`.
        value: f64,
    },
}

impl Error {
    pub(crate) fn domain<T: Float>(op: &'static str, requirement: &'static str, value: T) -> Self {
        Error::Domain {
            op,
            requirement,
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Name of the operator that produced this error.
    pub fn op(&self) -> &'static str {
        match self {
            Error::Domain { op, .. } => op,
        }
    }
}
