//! Error handling for the curvedh public API

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl std::error::Error for Error {}

/// Specialized result type for key-agreement operations
pub type AgreementResult<T> = Result<T>;
