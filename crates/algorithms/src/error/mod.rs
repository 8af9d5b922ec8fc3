//! Error handling for number-theoretic and elliptic-curve primitives

use curvedh_api::Error as ApiError;
use std::fmt;

pub mod validate;


/// The error type for number-theoretic and elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// A bounded rejection-sampling search ran out of attempts
    Exhausted {
        /// Search that was exhausted
        operation: &'static str,
        /// Number of attempts made before giving up
        attempts: u64,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for number-theoretic and elliptic-curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Exhausted { operation, attempts } => {
                write!(f, "{} exhausted after {} attempts", operation, attempts)
            }
        }
    }
}

impl std::error::Error for Error {}

// Conversion to the API-level error
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Exhausted { operation, attempts } => ApiError::GenerationExhausted {
                context: operation,
                attempts,
            },
        }
    }
}
