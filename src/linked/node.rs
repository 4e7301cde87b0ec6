use alloc::boxed::Box;

use digest::{Digest, Output};

use crate::common::node_sum;

/// One vertex of the linked representation. A parent exclusively owns both
/// of its children for the lifetime of the tree; the structure is acyclic
/// and never mutated after construction.
pub struct Node<D: Digest> {
    digest: Output<D>,
    left: Option<Box<Node<D>>>,
    right: Option<Box<Node<D>>>,
}

impl<D: Digest> Node<D> {
    pub fn leaf(digest: Output<D>) -> Self {
        Self {
            digest,
            left: None,
            right: None,
        }
    }

    /// Joins two nodes under a parent whose digest is the canonical pair
    /// digest of the children.
    pub fn join(left: Node<D>, right: Node<D>) -> Self {
        let digest = node_sum::<D>(&left.digest, &right.digest);
        Self {
            digest,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn digest(&self) -> &Output<D> {
        &self.digest
    }

    pub fn left(&self) -> Option<&Node<D>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<D>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<D: Digest> Clone for Node<D> {
    fn clone(&self) -> Self {
        Self {
            digest: self.digest.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}
