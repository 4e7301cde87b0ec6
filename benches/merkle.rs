use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sha2::Sha256;

use batch_merkle::common::verify;
use batch_merkle::{layered, linked};
use batch_merkle_test_helpers::data::random_leaves;

fn merkle_commitment(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(8586);
    let leaves = random_leaves(rng, 10_000);
    let target = leaves[4096].clone();

    let layered_tree = layered::MerkleTree::<Sha256>::build(leaves.iter());
    let linked_tree = linked::MerkleTree::<Sha256>::build(leaves.iter());
    assert_eq!(layered_tree.root(), linked_tree.root());

    let mut group = c.benchmark_group("build");
    group.bench_with_input("layered", &leaves, |b, leaves| {
        b.iter(|| layered::MerkleTree::<Sha256>::build(black_box(leaves.iter())));
    });
    group.bench_with_input("linked", &leaves, |b, leaves| {
        b.iter(|| linked::MerkleTree::<Sha256>::build(black_box(leaves.iter())));
    });
    group.finish();

    let mut group = c.benchmark_group("prove");
    group.bench_with_input("layered", &target, |b, target| {
        b.iter(|| layered_tree.prove(black_box(target)));
    });
    group.bench_with_input("linked", &target, |b, target| {
        b.iter(|| linked_tree.prove(black_box(target)));
    });
    group.finish();

    let proof_set = layered_tree.prove(&target).expect("target is committed");
    let root = layered_tree.root().expect("tree is not empty");

    let mut group = c.benchmark_group("verify");
    group.bench_with_input("replay", &target, |b, target| {
        b.iter(|| verify::<Sha256>(black_box(target), &proof_set, &root));
    });
    group.finish();
}

criterion_group!(benches, merkle_commitment);
criterion_main!(benches);
