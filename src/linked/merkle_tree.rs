use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use digest::{Digest, Output};
use sha2::Sha256;

use crate::common::{leaf_sum, next_level, MerkleCommitment, ProofSet};
use crate::linked::Node;

/// Merkle tree held as an explicit binary tree of owned digest nodes.
/// Semantically identical to the layered representation; the digests it
/// produces are byte-identical for the same leaf ordering.
pub struct MerkleTree<D: Digest = Sha256> {
    root: Option<Box<Node<D>>>,
    leaves: Vec<Output<D>>,
    height: usize,
}

impl<D: Digest> MerkleTree<D> {
    pub fn build<I, T>(leaves: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let leaves: Vec<Output<D>> = leaves
            .into_iter()
            .map(|leaf| leaf_sum::<D>(leaf.as_ref()))
            .collect();
        if leaves.is_empty() {
            return Self {
                root: None,
                leaves,
                height: 0,
            };
        }

        let nodes: Vec<Node<D>> = leaves.iter().cloned().map(Node::leaf).collect();
        let mut height = 1;
        let root = Self::join_level(nodes, &mut height);

        Self {
            root: Some(Box::new(root)),
            leaves,
            height,
        }
    }

    pub fn root(&self) -> Option<Output<D>> {
        self.root.as_ref().map(|node| node.digest().clone())
    }

    /// The owned root node, for structural inspection.
    pub fn root_node(&self) -> Option<&Node<D>> {
        self.root.as_deref()
    }

    pub fn leaf_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Same index walk as the layered representation, but the sibling lookup
    /// runs against node levels recomputed during the walk rather than a
    /// stored layer sequence.
    pub fn prove(&self, data: &[u8]) -> Option<ProofSet<D>> {
        let target = leaf_sum::<D>(data);
        let mut index = self.leaves.iter().position(|digest| *digest == target)?;

        let mut proof_set = ProofSet::<D>::new();
        let mut level = self.leaves.clone();
        while level.len() > 1 {
            let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
            match level.get(sibling) {
                Some(digest) => proof_set.push(digest.clone()),
                // Lone tail node; it was paired with itself, so the proof
                // carries its own digest.
                None => proof_set.push(level[index].clone()),
            }
            index /= 2;
            level = next_level::<D>(&level);
        }

        Some(proof_set)
    }

    /// Sideways box-drawing rendering of the tree: right subtree above the
    /// node, left subtree below, digests hex-encoded. Presentation only.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn join_level(mut nodes: Vec<Node<D>>, height: &mut usize) -> Node<D> {
        if nodes.len() == 1 {
            // Single node left: this is the root, taken as-is without
            // another combination step.
            return nodes.remove(0);
        }

        *height += 1;
        let mut parents = Vec::with_capacity((nodes.len() + 1) / 2);
        let mut nodes = nodes.into_iter();
        while let Some(left) = nodes.next() {
            let parent = match nodes.next() {
                Some(right) => Node::join(left, right),
                // A lone tail node pairs with a copy of itself.
                None => {
                    let right = left.clone();
                    Node::join(left, right)
                }
            };
            parents.push(parent);
        }

        Self::join_level(parents, height)
    }

    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &Node<D>,
        prefix: &str,
        is_left: bool,
    ) -> fmt::Result {
        if let Some(right) = node.right() {
            let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
            Self::fmt_node(f, right, &deeper, false)?;
        }

        let connector = if is_left { "└── " } else { "┌── " };
        writeln!(f, "{prefix}{connector}{}", hex::encode(node.digest()))?;

        if let Some(left) = node.left() {
            let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
            Self::fmt_node(f, left, &deeper, true)?;
        }

        Ok(())
    }
}

impl<D: Digest> Default for MerkleTree<D> {
    fn default() -> Self {
        Self::build(core::iter::empty::<&[u8]>())
    }
}

impl<D: Digest> fmt::Display for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => write!(f, "Empty tree"),
            Some(root) => Self::fmt_node(f, root, "", true),
        }
    }
}

impl<D: Digest> fmt::Debug for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.leaves.len())
            .field("height", &self.height)
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
