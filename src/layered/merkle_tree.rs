use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use digest::{Digest, Output};
use sha2::Sha256;

use crate::common::{leaf_sum, next_level, MerkleCommitment, ProofSet};

/// Merkle tree stored as an ordered sequence of digest layers, leaf layer
/// first. Built once from an ordered leaf sequence and read-only afterwards.
pub struct MerkleTree<D: Digest = Sha256> {
    layers: Vec<Vec<Output<D>>>,
    leaf_count: u64,
}

impl<D: Digest> MerkleTree<D> {
    pub fn build<I, T>(leaves: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let base: Vec<Output<D>> = leaves
            .into_iter()
            .map(|leaf| leaf_sum::<D>(leaf.as_ref()))
            .collect();
        let leaf_count = base.len() as u64;
        if base.is_empty() {
            return Self {
                layers: Vec::new(),
                leaf_count,
            };
        }

        let mut layers = Vec::new();
        let mut current = base;
        while current.len() > 1 {
            let next = next_level::<D>(&current);
            layers.push(current);
            current = next;
        }
        // `current` is now the singleton root layer.
        layers.push(current);

        Self { layers, leaf_count }
    }

    pub fn root(&self) -> Option<Output<D>> {
        self.layers.last().and_then(|layer| layer.first().cloned())
    }

    pub fn layer(&self, level: usize) -> Option<&[Output<D>]> {
        self.layers.get(level).map(|layer| layer.as_slice())
    }

    pub fn leaf_count(&self) -> u64 {
        self.leaf_count
    }

    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// Sibling digests for the first leaf matching `data`, ordered from the
    /// leaf layer to the layer below the root.
    pub fn prove(&self, data: &[u8]) -> Option<ProofSet<D>> {
        let target = leaf_sum::<D>(data);
        let leaves = self.layers.first()?;
        let mut index = leaves.iter().position(|digest| *digest == target)?;

        let mut proof_set = ProofSet::<D>::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
            match layer.get(sibling) {
                Some(digest) => proof_set.push(digest.clone()),
                // The tail of an odd-length layer was paired with itself
                // during construction; the proof carries its own digest so
                // replay recomputes the same parent.
                None => proof_set.push(layer[index].clone()),
            }
            index /= 2;
        }

        Some(proof_set)
    }

    /// Text rendering of the layers, root layer first, digests hex-encoded
    /// left-to-right. Presentation only.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl<D: Digest> Default for MerkleTree<D> {
    fn default() -> Self {
        Self::build(core::iter::empty::<&[u8]>())
    }
}

impl<D: Digest> fmt::Display for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, layer) in self.layers.iter().enumerate().rev() {
            write!(f, "Level {level}: ")?;
            for (position, digest) in layer.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", hex::encode(digest))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<D: Digest> fmt::Debug for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.leaf_count)
            .field("height", &self.layers.len())
            .finish()
    }
}

impl<D: Digest> MerkleCommitment<D> for MerkleTree<D> {
    fn build<I, T>(leaves: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        MerkleTree::build(leaves)
    }

    fn root(&self) -> Option<Output<D>> {
        MerkleTree::root(self)
    }

    fn prove(&self, data: &[u8]) -> Option<ProofSet<D>> {
        MerkleTree::prove(self, data)
    }

    fn leaf_count(&self) -> u64 {
        MerkleTree::leaf_count(self)
    }

    fn height(&self) -> usize {
        MerkleTree::height(self)
    }
}
