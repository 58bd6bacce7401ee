//! Verification routine recomputing a root from a leaf and a proof path, and
//! comparing it against the trusted root.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::debug;

use tessera_hash::{Digest, ProofHasher, DIGEST_WIDTH};

use crate::proof::{Direction, InclusionProof};

/// Default maximum proof depth, enough for a structure with 2^32 leaves.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration parameters controlling verification policies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Maximum accepted proof-path length. Caps worst-case work against
    /// adversarial proof lengths; must match the depth of the legitimate
    /// committing structure.
    pub max_depth: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Why a proof was declined.
///
/// All rejections are terminal for a given input; the caller surfaces them as
/// a declined verification, never retries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Structural violation: wrong sibling hash width, or path longer than
    /// the configured maximum depth.
    #[error("proof path is structurally malformed")]
    MalformedPath,
    /// The explicit step count declared by the encoder disagrees with the
    /// number of steps present.
    #[error("declared step count does not match the proof path")]
    LengthMismatch,
    /// Well-formed proof whose recomputed root disagrees with the trusted
    /// root.
    #[error("recomputed root does not match the trusted root")]
    HashMismatch,
}

/// Outcome of a verification call.
///
/// Rejection is an expected first-class outcome, not an error: adversarial
/// or corrupted proofs must never panic or escape as failures of the verifier
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Verified,
    Rejected(RejectReason),
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Verified => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Verify that `leaf` is included in the structure committed to by `root`.
///
/// Recomputes the path leaf-first: the running value is seeded from the leaf
/// commitment, then folded with each sibling in order, and the result is
/// compared against `root` in constant time. Structural checks (declared
/// step count, depth bound, sibling widths) complete before the hasher is
/// invoked at all.
///
/// The function is pure: no I/O, no shared state, identical inputs always
/// yield the identical result. `root` comes from a trusted collaborator and
/// carries its width by construction; sibling hashes come from the wire and
/// are validated here.
pub fn verify_inclusion<H: ProofHasher>(
    hasher: &H,
    leaf: &[u8],
    proof: &InclusionProof,
    root: &Digest,
    config: &VerifierConfig,
) -> VerificationResult {
    if let Some(declared) = proof.step_count {
        if declared as usize != proof.steps.len() {
            debug!(
                declared,
                actual = proof.steps.len(),
                "rejecting proof: declared step count mismatch"
            );
            return VerificationResult::Rejected(RejectReason::LengthMismatch);
        }
    }

    if proof.steps.len() > config.max_depth {
        debug!(
            depth = proof.steps.len(),
            max_depth = config.max_depth,
            "rejecting proof: path exceeds maximum depth"
        );
        return VerificationResult::Rejected(RejectReason::MalformedPath);
    }

    // Validate every sibling width before hashing anything.
    let mut siblings = Vec::with_capacity(proof.steps.len());
    for step in &proof.steps {
        match Digest::try_from(step.sibling.as_slice()) {
            Ok(digest) => siblings.push(digest),
            Err(_) => {
                debug!(
                    width = step.sibling.len(),
                    expected = DIGEST_WIDTH,
                    "rejecting proof: sibling hash has wrong width"
                );
                return VerificationResult::Rejected(RejectReason::MalformedPath);
            }
        }
    }

    let mut running = hasher.hash_leaf(leaf);
    for (sibling, step) in siblings.iter().zip(&proof.steps) {
        running = match step.direction {
            Direction::Left => hasher.hash_node(sibling, &running),
            Direction::Right => hasher.hash_node(&running, sibling),
        };
    }

    // Constant-time comparison: response latency must not depend on where the
    // recomputed root first differs from the trusted one.
    if bool::from(running.ct_eq(root)) {
        debug!(depth = proof.steps.len(), "inclusion proof verified");
        VerificationResult::Verified
    } else {
        debug!(depth = proof.steps.len(), "rejecting proof: root mismatch");
        VerificationResult::Rejected(RejectReason::HashMismatch)
    }
}
