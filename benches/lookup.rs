use std::collections::HashSet;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::distributions::Uniform;
use rand::{Rng, thread_rng};
use rand::prelude::IteratorRandom;
use bloomd::{ClassicalBloomFilter, Filter, PartitionedBloomFilter};

fn bench_filter<F: Filter>(c: &mut Criterion, name: &str) {
    let mut bf = F::new(10u64.pow(6), 0.02).unwrap();
    let mut track_inserted = HashSet::new();

    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));
    for _ in 0..10u32.pow(6) {
        let value = rng.sample(distribution).to_be_bytes();
        bf.insert(&value).unwrap();
        track_inserted.insert(value);
    }

    let mut bgroup = c.benchmark_group(name);
    bgroup.bench_function("lookup-random-values",
                     |b|
                         b.iter(||
                             bf.lookup(
                                 &rng.sample(distribution).to_be_bytes()
                             )
                         ));

    bgroup.bench_function("lookup-inserted-values",
                     |b|
                         b.iter(||
                             bf.lookup(track_inserted.iter().choose(&mut rng).unwrap())
                         ));
    bgroup.finish();
}

pub fn lookup_values(c: &mut Criterion) {
    bench_filter::<PartitionedBloomFilter>(c, "partitioned-lookup-values");
    bench_filter::<ClassicalBloomFilter>(c, "classical-lookup-values");
}

criterion_group!(benches, lookup_values);
criterion_main!(benches);
