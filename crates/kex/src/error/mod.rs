//! Error handling for key-exchange operations

use curvedh_algorithms::Error as AlgorithmError;
use curvedh_api::Error as ApiError;
use std::fmt;

/// Error type for key-exchange operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error bubbled up from the algebraic primitives
    Algorithm(AlgorithmError),

    /// The peer's public point was rejected
    InvalidPublicKey {
        /// Reason the point was rejected
        reason: &'static str,
    },

    /// Domain parameters were rejected
    InvalidDomain {
        /// Reason the parameters were rejected
        reason: &'static str,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Algorithm(e) => write!(f, "Algorithm error: {}", e),
            Error::InvalidPublicKey { reason } => {
                write!(f, "Invalid public key: {}", reason)
            }
            Error::InvalidDomain { reason } => {
                write!(f, "Invalid domain parameters: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Algorithm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlgorithmError> for Error {
    fn from(err: AlgorithmError) -> Self {
        Error::Algorithm(err)
    }
}

// Conversion to the API-level error
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Algorithm(e) => ApiError::from(e),
            Error::InvalidPublicKey { reason } => ApiError::InvalidKey {
                context: "key exchange",
                message: reason.to_string(),
            },
            Error::InvalidDomain { reason } => ApiError::InvalidParameter {
                context: "domain parameters",
                message: reason.to_string(),
            },
        }
    }
}
