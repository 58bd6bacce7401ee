//! Hash primitive for inclusion-proof verification
//!
//! This crate provides the fixed-width digest type, the hashing contract used for
//! leaf commitments and node folding, and its SHA3-256 implementation.

pub mod digest;
pub mod hasher;

pub use digest::{Digest, DigestError, DIGEST_WIDTH};
pub use hasher::{ProofHasher, Sha3ProofHasher};
