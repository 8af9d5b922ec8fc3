//! Error type definitions for key-agreement operations

use std::fmt;

/// Primary error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Invalid key error (malformed or off-curve public value)
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// A bounded rejection-sampling search ran out of attempts
    GenerationExhausted {
        /// Search that was exhausted
        context: &'static str,
        /// Number of attempts made before giving up
        attempts: u64,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::GenerationExhausted { attempts, .. } => {
                Self::GenerationExhausted { context, attempts }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key in {}: {}", context, message)
            }
            Error::GenerationExhausted { context, attempts } => {
                write!(f, "Generation exhausted in {} after {} attempts", context, attempts)
            }
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
        }
    }
}
