mod commitment;
mod hash;
mod verify;

pub use commitment::MerkleCommitment;
pub use hash::{leaf_sum, node_sum};
pub use verify::verify;

pub(crate) use hash::next_level;

use alloc::vec::Vec;
use digest::Output;

/// Ordered sibling digests from a leaf up to the layer below the root.
pub type ProofSet<D> = Vec<Output<D>>;
