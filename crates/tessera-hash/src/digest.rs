//! Fixed-width digest type shared by the hasher and the proof verifier.

use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};
use thiserror::Error;

/// Output width of the hash primitive in bytes (SHA3-256).
pub const DIGEST_WIDTH: usize = 32;

/// An error that can occur when constructing a [`Digest`] from untyped bytes.
///
/// These signal a broken integration (a trusted collaborator handing over a
/// value of the wrong shape), not an adversarial proof. Proofs carrying
/// wrong-width sibling hashes are rejected by the verifier instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigestError {
    #[error("expected a {DIGEST_WIDTH}-byte digest, got {0} bytes")]
    InvalidWidth(usize),
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// A hash value with the primitive's exact output width.
///
/// Construction from untyped bytes goes through [`Digest::try_from`] or
/// [`Digest::from_hex`], so a held `Digest` is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_WIDTH]);

impl Digest {
    /// Parse a digest from a hex string.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let bytes = hex::decode(hex)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_WIDTH] {
        &self.0
    }
}

impl From<[u8; DIGEST_WIDTH]> for Digest {
    fn from(bytes: [u8; DIGEST_WIDTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = DigestError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; DIGEST_WIDTH] = bytes
            .try_into()
            .map_err(|_| DigestError::InvalidWidth(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Digest {
    /// Equality with a fixed number of operations regardless of where the
    /// digests first differ.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}
