//! Hashing contract for leaf commitments and node folding, and its SHA3-256
//! implementation.

use sha3::{Digest as _, Sha3_256};

use crate::digest::Digest;

/// The hash primitive consumed by the proof verifier.
///
/// Implementations must be deterministic and free of side effects: the
/// verifier relies on identical inputs producing identical digests. Any input
/// length is accepted for leaf payloads, including empty.
pub trait ProofHasher {
    /// Commit to a leaf payload.
    fn hash_leaf(&self, payload: &[u8]) -> Digest;

    /// Fold two child digests into their parent, `hash(left ‖ right)`.
    fn hash_node(&self, left: &Digest, right: &Digest) -> Digest;
}

/// SHA3-256 hasher with optional leaf domain separation.
///
/// When a leaf tag is configured, leaf commitments are computed as
/// `hash(tag ‖ payload)`, keeping leaves and internal nodes in distinct hash
/// domains. Node folding is never tagged. Which scheme applies depends on the
/// committing structure being proven against; integrators must match its
/// convention.
#[derive(Debug, Clone, Default)]
pub struct Sha3ProofHasher {
    leaf_tag: Option<u8>,
}

impl Sha3ProofHasher {
    /// Hasher without leaf domain separation.
    pub fn new() -> Self {
        Self { leaf_tag: None }
    }

    /// Hasher that prefixes every leaf payload with `tag`.
    pub fn with_leaf_tag(tag: u8) -> Self {
        Self { leaf_tag: Some(tag) }
    }

    pub fn leaf_tag(&self) -> Option<u8> {
        self.leaf_tag
    }
}

impl ProofHasher for Sha3ProofHasher {
    fn hash_leaf(&self, payload: &[u8]) -> Digest {
        let mut hasher = Sha3_256::new();
        if let Some(tag) = self.leaf_tag {
            hasher.update([tag]);
        }
        hasher.update(payload);
        Digest(hasher.finalize().into())
    }

    fn hash_node(&self, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Sha3_256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA3-256 of the empty string, from the FIPS 202 test vectors.
    const EMPTY_SHA3: &str = "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a";

    #[test]
    fn leaf_commitment_matches_known_vector() {
        let hasher = Sha3ProofHasher::new();
        let digest = hasher.hash_leaf(b"");
        assert_eq!(digest.to_hex(), EMPTY_SHA3);
    }

    #[test]
    fn leaf_commitment_matches_reference_implementation() {
        let hasher = Sha3ProofHasher::new();
        assert_eq!(
            hasher.hash_leaf(b"transfer:100").to_hex(),
            "280b3f8f172febd8f92ed90b678ad9896e8bd30d33e6179b8b7031172a0b18b8"
        );
    }

    #[test]
    fn leaf_commitment_is_deterministic() {
        let hasher = Sha3ProofHasher::new();
        assert_eq!(hasher.hash_leaf(b"payload"), hasher.hash_leaf(b"payload"));
        assert_ne!(hasher.hash_leaf(b"payload"), hasher.hash_leaf(b"payloae"));
    }

    #[test]
    fn leaf_tag_separates_hash_domains() {
        let untagged = Sha3ProofHasher::new();
        let tagged = Sha3ProofHasher::with_leaf_tag(0x00);

        assert_ne!(tagged.hash_leaf(b"leaf"), untagged.hash_leaf(b"leaf"));

        // The tagged commitment is exactly the untagged hash of tag ‖ payload.
        assert_eq!(tagged.hash_leaf(b"leaf"), untagged.hash_leaf(b"\x00leaf"));

        // Distinct tags give distinct commitments.
        let other = Sha3ProofHasher::with_leaf_tag(0x01);
        assert_ne!(tagged.hash_leaf(b"leaf"), other.hash_leaf(b"leaf"));
    }

    #[test]
    fn node_fold_is_order_sensitive() {
        let hasher = Sha3ProofHasher::new();
        let a = hasher.hash_leaf(b"a");
        let b = hasher.hash_leaf(b"b");

        assert_ne!(hasher.hash_node(&a, &b), hasher.hash_node(&b, &a));
        assert_eq!(hasher.hash_node(&a, &b), hasher.hash_node(&a, &b));
    }

    #[test]
    fn node_fold_is_concatenation_of_operands() {
        let hasher = Sha3ProofHasher::new();
        let left = Digest([0x11; 32]);
        let right = Digest([0x22; 32]);

        let mut concat = Vec::new();
        concat.extend_from_slice(left.as_bytes());
        concat.extend_from_slice(right.as_bytes());

        assert_eq!(hasher.hash_node(&left, &right), hasher.hash_leaf(&concat));
    }
}
