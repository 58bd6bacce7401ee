//! Merkle inclusion-proof verification library
//!
//! This crate provides the proof-path data model and the pure verification
//! routine that recomputes a root from a claimed leaf and an ordered chain of
//! sibling hashes, then compares it against a trusted root in constant time.
//!
//! The surrounding request handler (wire decoding, trusted-root provisioning,
//! operator confirmation, response framing) is a separate collaborator: this
//! crate consumes a decoded proof and an already-validated root, and emits a
//! verdict only.

pub mod proof;
pub mod verify;

pub use proof::{Direction, InclusionProof, ProofStep};
pub use verify::{verify_inclusion, RejectReason, VerificationResult, VerifierConfig};
