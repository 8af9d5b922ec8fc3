// File: crates/api/src/traits/kex.rs

//! Trait definition for Diffie-Hellman style key agreement
//!
//! This module provides a type-safe interface for two-party key agreement:
//! a designated party generates public domain parameters, each party derives
//! a keypair against those parameters, and both parties combine their own
//! secret with the peer's public value into the same shared secret.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for two-party key agreement with domain-specific types.
///
/// # Security Design
///
/// All randomness is drawn from a caller-provided CSPRNG; implementations
/// must not reach for a global or time-seeded generator. Concurrent
/// sessions must each use an independent randomness stream.
pub trait KeyAgreement {
    /// Published domain parameters both parties agree on (not secret).
    type Domain: Clone;

    /// Public value a party transmits to its peer.
    type PublicKey: Clone;

    /// Secret value a party never transmits.
    ///
    /// # Security Note
    /// Implements `Zeroize` for cleanup when the session ends.
    type SecretKey: Zeroize;

    /// Shared secret both parties independently derive.
    ///
    /// Implements `PartialEq` since equality of the two derivations is the
    /// end-to-end contract of the protocol.
    type SharedSecret: PartialEq;

    /// Returns the key-agreement scheme name.
    fn name() -> &'static str;

    /// Generate fresh domain parameters.
    ///
    /// Run once per session by a designated party; the result is published
    /// to the peer in the clear.
    fn generate_domain<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::Domain>;

    /// Generate a keypair against the given domain parameters.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        domain: &Self::Domain,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Combine own secret with the peer's public value.
    ///
    /// # Security Requirements
    /// - Must validate the peer's public value against the domain.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer: &Self::PublicKey,
        domain: &Self::Domain,
    ) -> Result<Self::SharedSecret>;
}
