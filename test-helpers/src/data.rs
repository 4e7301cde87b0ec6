use rand::Rng;

/// Random variable-length leaves for sampled conformance tests.
pub fn random_leaves<R>(rng: &mut R, count: usize) -> Vec<Vec<u8>>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..64);
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            bytes
        })
        .collect()
}

pub fn random_bytes32<R>(rng: &mut R) -> [u8; 32]
where
    R: Rng + ?Sized,
{
    let mut bytes = [0u8; 32];
    rng.fill(bytes.as_mut());
    bytes
}
