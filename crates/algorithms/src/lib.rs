//! Number-theoretic and elliptic-curve primitives for the curvedh library
//!
//! This crate provides the algebraic machinery behind key agreement over
//! randomly generated elliptic curves: exact modular arithmetic over
//! arbitrary-precision integers, Miller-Rabin probabilistic primality
//! testing, fixed-bit-length integer and prime sampling, and the group of
//! rational points of a short Weierstrass curve over a prime field.
//!
//! All arithmetic is variable-time. Nothing here is hardened against
//! side channels; the variable-time `num-bigint` stack rules that out by
//! construction.
//!
//! Every sampling operation takes a caller-provided CSPRNG so that tests
//! can run against deterministic seeds and concurrent sessions can use
//! independent randomness streams.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Modular arithmetic over arbitrary-precision integers
pub mod modular;

// Miller-Rabin primality testing
pub mod primality;
pub use primality::Primality;

// Fixed-bit-length random integer and prime sampling
pub mod random;

// Elliptic curve group primitives
pub mod ec;
pub use ec::{Curve, Legendre, Point, SecretScalar};
