use digest::{Digest, Output};

use crate::common::{leaf_sum, node_sum, ProofSet};

/// Recomputes the root from `data` and its proof and compares it to the
/// claimed root byte-for-byte. Proof elements are combined in order with the
/// same canonical pairing used during construction, so no positional
/// information is required.
pub fn verify<D: Digest>(data: &[u8], proof_set: &ProofSet<D>, root: &Output<D>) -> bool {
    let mut sum = leaf_sum::<D>(data);
    for digest in proof_set {
        sum = node_sum::<D>(&sum, digest);
    }
    sum == *root
}
