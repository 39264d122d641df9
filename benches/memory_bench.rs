//! Benchmarks for lsh-memory-rs.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lsh_memory_rs::{project, AssociativeMemory, MemoryConfig};

fn demo_input(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32 * 0.37).sin() * 100.0).collect()
}

fn bench_projection(c: &mut Criterion) {
    let input = demo_input(4096);
    c.bench_function("project_4096", |b| {
        b.iter(|| {
            let mut v = input.clone();
            project(&mut v, black_box(42));
            v
        });
    });
}

fn bench_recall(c: &mut Criterion) {
    let mut memory = AssociativeMemory::new(MemoryConfig::default()).unwrap();
    let input = demo_input(4096);
    memory.train(&input, &input).unwrap();
    let mut result = vec![0.0f32; 4096];

    c.bench_function("recall_4096_d10_b3", |b| {
        b.iter(|| memory.recall(&mut result, black_box(&input)).unwrap());
    });
}

fn bench_train(c: &mut Criterion) {
    let mut memory = AssociativeMemory::new(MemoryConfig::default()).unwrap();
    let input = demo_input(4096);
    let target = demo_input(4096);

    c.bench_function("train_4096_d10_b3", |b| {
        b.iter(|| memory.train(black_box(&target), black_box(&input)).unwrap());
    });
}

criterion_group!(benches, bench_projection, bench_recall, bench_train);
criterion_main!(benches);
