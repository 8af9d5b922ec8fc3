// File: crates/kex/src/ecdh/mod.rs

//! ECDH over a randomly generated curve
//!
//! Protocol flow:
//! 1. A designated party generates the domain parameters — a random
//!    nonsingular curve over a fresh prime field and a random base point G
//!    on it — and publishes them.
//! 2. Each party samples a private scalar n and publishes Q = n·G.
//! 3. Each party computes S = n_self · Q_peer. Both sides arrive at the
//!    same point because scalar multiplication commutes over the group:
//!    n_A·(n_B·G) = n_B·(n_A·G).
//!
//! The shared secret is the shared point itself; no key derivation is
//! layered on top. Private scalars never leave [`DhParty`].

use crate::error::{Error, Result};
use curvedh_algorithms::{ec, primality, Curve, Point, SecretScalar};
use curvedh_api::{KeyAgreement, Result as ApiResult};
use rand::{CryptoRng, RngCore};


/// Default bit length of the random k in the field modulus p = 4k + 3
pub const DEFAULT_PRIME_BITS: u64 = 256;

/// Default bit length of a party's private scalar
pub const DEFAULT_SCALAR_BITS: u64 = 64;

/// Published domain parameters for one exchange: the curve and a base
/// point on it. Neither is secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhDomain {
    curve: Curve,
    generator: Point,
}

impl DhDomain {
    /// Generate fresh domain parameters: a random curve over a
    /// `prime_bits`-sized field and a random base point on it.
    pub fn generate<R: CryptoRng + RngCore>(
        rng: &mut R,
        prime_bits: u64,
        rounds: u32,
    ) -> Result<Self> {
        let (curve, generator) = ec::generate_domain(rng, prime_bits, rounds)?;
        Ok(DhDomain { curve, generator })
    }

    /// Assemble domain parameters from an explicit curve and base point.
    ///
    /// The base point must be an affine point on the curve.
    pub fn new(curve: Curve, generator: Point) -> Result<Self> {
        if generator.is_identity() {
            return Err(Error::InvalidDomain {
                reason: "base point must not be the identity",
            });
        }
        if !curve.contains(&generator) {
            return Err(Error::InvalidDomain {
                reason: "base point is not on the curve",
            });
        }
        Ok(DhDomain { curve, generator })
    }

    /// The curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The base point G
    pub fn generator(&self) -> &Point {
        &self.generator
    }
}

/// One side of an exchange: the domain, a private scalar, and the
/// matching public point.
#[derive(Debug)]
pub struct DhParty {
    domain: DhDomain,
    secret: SecretScalar,
    public: Point,
}

impl DhParty {
    /// Join an exchange: sample a private scalar of `scalar_bits` bits
    /// and derive the public point to transmit.
    pub fn new<R: CryptoRng + RngCore>(
        rng: &mut R,
        domain: &DhDomain,
        scalar_bits: u64,
    ) -> Self {
        let (secret, public) =
            ec::generate_keypair(rng, &domain.curve, &domain.generator, scalar_bits);
        DhParty {
            domain: domain.clone(),
            secret,
            public,
        }
    }

    /// The public point to send to the peer
    pub fn public_point(&self) -> &Point {
        &self.public
    }

    /// Combine the private scalar with the peer's public point.
    ///
    /// The peer's point must be an affine point on the curve; the
    /// identity is rejected since it collapses the shared secret.
    pub fn agree(&self, peer: &Point) -> Result<SharedPoint> {
        if peer.is_identity() {
            return Err(Error::InvalidPublicKey {
                reason: "peer point must not be the identity",
            });
        }
        if !self.domain.curve.contains(peer) {
            return Err(Error::InvalidPublicKey {
                reason: "peer point is not on the curve",
            });
        }
        Ok(SharedPoint(self.domain.curve.mul(peer, self.secret.expose())))
    }
}

/// The shared point both parties independently derive.
///
/// Equality across the two derivations is the correctness contract of
/// the whole exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPoint(Point);

impl SharedPoint {
    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

/// ECDH over a randomly generated curve, with the reference parameter
/// sizes, behind the [`KeyAgreement`] trait.
pub struct RandomCurveDh;

impl KeyAgreement for RandomCurveDh {
    type Domain = DhDomain;
    type PublicKey = Point;
    type SecretKey = SecretScalar;
    type SharedSecret = SharedPoint;

    fn name() -> &'static str {
        "ECDH-RandomCurve"
    }

    fn generate_domain<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::Domain> {
        DhDomain::generate(rng, DEFAULT_PRIME_BITS, primality::DEFAULT_ROUNDS)
            .map_err(Into::into)
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        domain: &Self::Domain,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let party = DhParty::new(rng, domain, DEFAULT_SCALAR_BITS);
        Ok((party.public, party.secret))
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer: &Self::PublicKey,
        domain: &Self::Domain,
    ) -> ApiResult<Self::SharedSecret> {
        if peer.is_identity() {
            return Err(Error::InvalidPublicKey {
                reason: "peer point must not be the identity",
            }
            .into());
        }
        if !domain.curve.contains(peer) {
            return Err(Error::InvalidPublicKey {
                reason: "peer point is not on the curve",
            }
            .into());
        }
        Ok(SharedPoint(domain.curve.mul(peer, secret_key.expose())))
    }
}
