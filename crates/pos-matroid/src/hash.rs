use pos_core::SetFamily;
use sha2::{Digest, Sha256};

/// Computes the canonical content hash of a set family.
///
/// Members are visited in their sorted order so equal families hash equally
/// regardless of how they were built.
pub fn canonical_hash(family: &SetFamily) -> String {
    let mut hasher = Sha256::new();
    hasher.update((family.len() as u64).to_le_bytes());
    for set in family {
        hasher.update((set.len() as u64).to_le_bytes());
        for &element in set {
            hasher.update((element as u64).to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}
