//! Types representing a decoded inclusion proof as handed over by the
//! request-handling collaborator.

use serde::{Deserialize, Serialize};

/// Side on which a sibling hash is placed when folding it with the running
/// value.
///
/// `Left` means the sibling is the left operand (`hash(sibling ‖ running)`),
/// `Right` the right operand (`hash(running ‖ sibling)`). The convention must
/// match the committing structure the proof was generated against; proofs
/// from a structure with the opposite convention recompute to a different
/// root and are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Sibling is the left operand.
    Left,
    /// Sibling is the right operand.
    Right,
}

/// One step of a proof path: a sibling hash and the side it combines on.
///
/// The sibling is kept as raw wire bytes; its width is validated by the
/// verifier before any hashing happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Sibling hash as decoded from the wire.
    pub sibling: Vec<u8>,
    /// Side on which the sibling combines.
    pub direction: Direction,
}

impl ProofStep {
    pub fn new(sibling: impl Into<Vec<u8>>, direction: Direction) -> Self {
        Self {
            sibling: sibling.into(),
            direction,
        }
    }
}

/// An ordered proof path, from the leaf's immediate sibling up to the step
/// adjacent to the root.
///
/// An empty path is valid and claims the leaf commitment equals the root
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Proof steps in leaf-to-root order. Order is semantically significant.
    pub steps: Vec<ProofStep>,
    /// Explicit step count, for wire encodings that carry one alongside the
    /// step list. Checked against `steps.len()` during verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_count: Option<u32>,
}

impl InclusionProof {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self {
            steps,
            step_count: None,
        }
    }

    /// Number of steps in the path.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}
