use digest::{Digest, Output};

use crate::common::{verify, ProofSet};

/// Common surface of the two tree representations. Conformance of the
/// implementations is enforced by the equivalence test suites, not by
/// shared construction code.
pub trait MerkleCommitment<D: Digest> {
    /// Builds a tree committing to `leaves` in their given order. Rebuilding
    /// is the only way to change a commitment; instances are read-only once
    /// built.
    fn build<I, T>(leaves: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>;

    /// The commitment value, or `None` for a tree built from zero leaves.
    fn root(&self) -> Option<Output<D>>;

    /// Inclusion proof for the first leaf whose digest matches `data`, or
    /// `None` when no leaf matches.
    fn prove(&self, data: &[u8]) -> Option<ProofSet<D>>;

    fn leaf_count(&self) -> u64;

    /// Number of layers, counting the leaf layer and the root layer.
    fn height(&self) -> usize;

    /// Replays `proof_set` for `data` against this tree's own root. An empty
    /// tree has no root and rejects every proof.
    fn verify_proof(&self, data: &[u8], proof_set: &ProofSet<D>) -> bool {
        match self.root() {
            Some(root) => verify::<D>(data, proof_set, &root),
            None => false,
        }
    }
}
