//! Criterion benchmarks for the B+ tree engines.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use bptree::BPlusTree;

const KEYS: i32 = 1_000;
const CAPACITY: usize = 32;

/// Deterministic shuffle (xorshift Fisher-Yates) so runs stay comparable.
fn shuffled_keys() -> Vec<i32> {
    let mut keys: Vec<i32> = (0..KEYS).collect();
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    for i in (1..keys.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        keys.swap(i, (state % (i as u64 + 1)) as usize);
    }
    keys
}

fn populated_tree(keys: &[i32]) -> BPlusTree {
    let mut tree = BPlusTree::new(CAPACITY).unwrap();
    for &k in keys {
        tree.insert(k, k.to_string());
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let keys = shuffled_keys();
    c.bench_function("insert_1000_shuffled", |b| {
        b.iter(|| populated_tree(black_box(&keys)))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let keys = shuffled_keys();
    let tree = populated_tree(&keys);
    c.bench_function("lookup_1000", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(tree.lookup(k));
            }
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let keys = shuffled_keys();
    let tree = populated_tree(&keys);
    c.bench_function("delete_1000_shuffled", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for &k in &keys {
                    black_box(tree.delete(k));
                }
                tree
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_delete);
criterion_main!(benches);
