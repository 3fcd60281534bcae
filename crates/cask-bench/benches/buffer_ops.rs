//! Criterion micro-benchmarks for the raw buffer primitives.

use std::hint::black_box;

use cask_buffer::RawBuffer;
use cask_core::ContainerConfig;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: relocate a half-full 64K-slot window to offset 0.
fn bench_relocate_64k(c: &mut Criterion) {
    let config = ContainerConfig::new();
    let mut buffer = RawBuffer::on_heap(8, 65_536, &config).unwrap();
    c.bench_function("relocate_64k", |b| {
        b.iter(|| {
            buffer.relocate(16_384..49_152, 0);
            black_box(buffer.slot(0)[0]);
        });
    });
}

/// Benchmark: grow a 32K-slot buffer by the `2c + 1` rule.
fn bench_grow_32k(c: &mut Criterion) {
    let config = ContainerConfig::new();
    c.bench_function("grow_32k", |b| {
        b.iter(|| {
            let mut buffer = RawBuffer::on_heap(8, 32_768, &config).unwrap();
            buffer.reallocate(65_537, 32_768).unwrap();
            black_box(buffer.capacity());
        });
    });
}

criterion_group!(benches, bench_relocate_64k, bench_grow_32k);
criterion_main!(benches);
