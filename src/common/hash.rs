use alloc::vec::Vec;
use digest::{Digest, Output};

// Leaf digest of one committed item
// L(d) = Hash(d)
pub fn leaf_sum<D: Digest>(data: &[u8]) -> Output<D> {
    D::digest(data)
}

// Parent digest of two child digests
// N(a, b) = Hash(min(a, b) || max(a, b))
//
// The smaller digest is always fed first, so the result carries no
// left/right positional information.
pub fn node_sum<D: Digest>(lhs: &Output<D>, rhs: &Output<D>) -> Output<D> {
    let mut hash = D::new();
    if lhs.as_slice() <= rhs.as_slice() {
        hash.update(lhs);
        hash.update(rhs);
    } else {
        hash.update(rhs);
        hash.update(lhs);
    }
    hash.finalize()
}

/// Reduces one layer of digests to its parent layer. A lone digest at the
/// end of an odd-length layer pairs with itself.
pub(crate) fn next_level<D: Digest>(level: &[Output<D>]) -> Vec<Output<D>> {
    let mut next = Vec::with_capacity((level.len() + 1) / 2);
    let mut index = 0;
    while index < level.len() {
        let left = &level[index];
        let right = level.get(index + 1).unwrap_or(left);
        next.push(node_sum::<D>(left, right));
        index += 2;
    }
    next
}
