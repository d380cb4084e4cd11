//! Merkle audit-path verification.
//!
//! Interior nodes hash with a `0x01` domain-separation prefix so a node
//! digest can never collide with a leaf digest of the same bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Domain-separation prefix for interior node hashes.
const NODE_PREFIX: u8 = 0x01;

/// Errors raised while verifying an audit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// The path ran out before the root was reached.
    #[error("merkle: audit path too short")]
    ProofTooShort,

    /// The path had unconsumed elements after reaching the root.
    #[error("merkle: audit path too long")]
    ProofTooLong,

    /// The leaf index does not fall inside the tree.
    #[error("merkle: leaf index out of range")]
    IndexOutOfRange,

    /// A hash field was not 64 hex characters.
    #[error("merkle: malformed hash encoding")]
    Format,
}

/// `H(l, r) = SHA256(0x01 ‖ l ‖ r)`.
fn combine(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([NODE_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Reconstructs the root hash from a leaf and its audit path.
///
/// Walks the tree bottom-up: an odd index combines with the sibling on
/// the left, an even index below the level's last node combines with the
/// sibling on the right, and an even index sitting on the last node is a
/// lone right-most node promoted unchanged to the next level.
pub fn root_from_audit_path(
    leaf_hash: [u8; 32],
    leaf_index: u64,
    path: &[[u8; 32]],
    tree_size: u64,
) -> Result<[u8; 32], MerkleError> {
    if tree_size <= leaf_index {
        return Err(MerkleError::IndexOutOfRange);
    }

    let mut hash = leaf_hash;
    let mut index = leaf_index;
    let mut last_node = tree_size - 1;
    let mut pos = 0usize;

    while last_node > 0 {
        if index % 2 == 1 {
            let sibling = path.get(pos).ok_or(MerkleError::ProofTooShort)?;
            hash = combine(sibling, &hash);
            pos += 1;
        } else if index < last_node {
            let sibling = path.get(pos).ok_or(MerkleError::ProofTooShort)?;
            hash = combine(&hash, sibling);
            pos += 1;
        }
        index /= 2;
        last_node /= 2;
    }

    if pos < path.len() {
        return Err(MerkleError::ProofTooLong);
    }
    Ok(hash)
}

/// Verifies that `leaf_hash` at `leaf_index` is included under
/// `root_hash` in a tree of `tree_size` leaves.
pub fn verify_leaf_inclusion(
    leaf_hash: [u8; 32],
    leaf_index: u64,
    path: &[[u8; 32]],
    tree_size: u64,
    root_hash: [u8; 32],
) -> Result<bool, MerkleError> {
    if tree_size <= leaf_index {
        return Err(MerkleError::IndexOutOfRange);
    }
    let computed = root_from_audit_path(leaf_hash, leaf_index, path, tree_size)?;
    Ok(computed == root_hash)
}

/// The Merkle proof shape returned by a node's REST endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Sibling hashes, leaf-to-root order.
    #[serde(rename = "TargetHashes")]
    pub target_hashes: Vec<String>,

    /// Height of the block being proven; the leaf index.
    #[serde(rename = "BlockHeight")]
    pub block_height: u64,

    /// Expected root of the current tree.
    #[serde(rename = "CurBlockRoot")]
    pub cur_block_root: String,

    /// Height of the current tree; the tree size.
    #[serde(rename = "CurBlockHeight")]
    pub cur_block_height: u64,
}

fn decode_hash(hex_str: &str) -> Result<[u8; 32], MerkleError> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut hash).map_err(|_| MerkleError::Format)?;
    Ok(hash)
}

impl MerkleProof {
    /// Parses the sibling hash strings into an audit path.
    pub fn audit_path(&self) -> Result<Vec<[u8; 32]>, MerkleError> {
        self.target_hashes
            .iter()
            .map(|hash| decode_hash(hash))
            .collect()
    }

    /// Verifies `leaf_hash` against this proof.
    pub fn verify(&self, leaf_hash: [u8; 32]) -> Result<bool, MerkleError> {
        let path = self.audit_path()?;
        let root = decode_hash(&self.cur_block_root)?;
        verify_leaf_inclusion(
            leaf_hash,
            self.block_height,
            &path,
            self.cur_block_height,
            root,
        )
    }
}
