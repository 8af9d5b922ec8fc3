//! # curvedh
//!
//! Diffie-Hellman key agreement over randomly generated elliptic curves.
//!
//! Instead of a fixed named curve, every exchange starts from freshly
//! generated domain parameters: a random prime field with p ≡ 3 (mod 4),
//! a random nonsingular curve y² = x³ + ax + b over it, and a random base
//! point found by quadratic-residue search. Two parties then derive a
//! shared point through ordinary double-and-add scalar multiplication.
//!
//! ## Usage
//!
//! ```no_run
//! use curvedh::kex::{DhDomain, DhParty};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> Result<(), curvedh::kex::Error> {
//! // one party generates and publishes the domain parameters
//! let domain = DhDomain::generate(&mut OsRng, 256, 4000)?;
//!
//! // each party keeps its scalar private and transmits its public point
//! let alice = DhParty::new(&mut OsRng, &domain, 64);
//! let bob = DhParty::new(&mut OsRng, &domain, 64);
//!
//! // both derive the same shared point
//! let shared_a = alice.agree(bob.public_point())?;
//! let shared_b = bob.agree(alice.public_point())?;
//! assert_eq!(shared_a, shared_b);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `curvedh-api`: public traits and error types
//! - `curvedh-algorithms`: modular arithmetic, Miller-Rabin primality
//!   testing, random integer/prime sampling, and the curve group law
//! - `curvedh-kex`: the two-party exchange built on top
//!
//! ## Security
//!
//! The arithmetic is arbitrary-precision and variable-time; nothing here
//! resists side channels, and the security level of a randomly generated
//! curve of unknown order is not quantified. Treat this as protocol
//! machinery, not a vetted production scheme.

#![forbid(unsafe_code)]

// Core re-exports
pub use curvedh_algorithms as algorithms;
pub use curvedh_api as api;
pub use curvedh_kex as kex;

/// Common imports for curvedh users
pub mod prelude {
    pub use curvedh_algorithms::{Curve, Point, SecretScalar};
    pub use curvedh_api::{Error, KeyAgreement, Result};
    pub use curvedh_kex::{DhDomain, DhParty, RandomCurveDh, SharedPoint};
}
