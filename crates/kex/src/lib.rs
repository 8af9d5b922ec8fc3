//! Two-party key agreement over randomly generated elliptic curves
//!
//! This crate composes the primitives from `curvedh-algorithms` into the
//! Diffie-Hellman handshake: a designated party generates a fresh curve
//! and base point, both parties derive keypairs against those domain
//! parameters, and each combines its own secret scalar with the peer's
//! public point into the same shared point.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{DhDomain, DhParty, RandomCurveDh, SharedPoint};
pub use error::{Error, Result};
