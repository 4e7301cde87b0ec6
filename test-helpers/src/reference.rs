use sha2::{Digest, Sha256};

pub type Bytes32 = [u8; 32];

/// Straightforward fixed-SHA-256 Merkle tree used as the comparison oracle
/// for the main crate: leaves are hashed raw, pairs are concatenated in
/// lexicographic order, and the lone tail digest of an odd-length layer is
/// paired with itself. Every query recomputes the layers from the stored
/// leaf digests; nothing here is tuned for speed.
#[derive(Default)]
pub struct MerkleTree {
    leaves: Vec<Bytes32>,
}

impl MerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, data: &[u8]) {
        self.leaves.push(hash_leaf(data));
    }

    pub fn leaves_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    pub fn root(&self) -> Option<Bytes32> {
        self.layers().last().and_then(|layer| layer.first().copied())
    }

    pub fn prove(&self, data: &[u8]) -> Option<Vec<Bytes32>> {
        let target = hash_leaf(data);
        let layers = self.layers();
        let mut index = layers.first()?.iter().position(|leaf| *leaf == target)?;

        let mut proof = Vec::new();
        for layer in &layers[..layers.len() - 1] {
            let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
            proof.push(*layer.get(sibling).unwrap_or(&layer[index]));
            index /= 2;
        }

        Some(proof)
    }

    pub fn verify(&self, data: &[u8], proof: &[Bytes32]) -> bool {
        let root = match self.root() {
            Some(root) => root,
            None => return false,
        };

        let mut sum = hash_leaf(data);
        for digest in proof {
            sum = hash_pair(&sum, digest);
        }
        sum == root
    }

    fn layers(&self) -> Vec<Vec<Bytes32>> {
        let mut layers = Vec::new();
        if self.leaves.is_empty() {
            return layers;
        }

        let mut current = self.leaves.clone();
        while current.len() > 1 {
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                let left = pair[0];
                let right = *pair.get(1).unwrap_or(&left);
                next.push(hash_pair(&left, &right));
            }
            layers.push(current);
            current = next;
        }
        layers.push(current);
        layers
    }
}

fn hash_leaf(data: &[u8]) -> Bytes32 {
    Sha256::digest(data).into()
}

fn hash_pair(lhs: &Bytes32, rhs: &Bytes32) -> Bytes32 {
    let (first, second) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
    let mut hash = Sha256::new();
    hash.update(first);
    hash.update(second);
    hash.finalize().into()
}
