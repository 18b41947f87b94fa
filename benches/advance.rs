//! Benchmarks for the CPU side of a frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nova::frame::FrameState;
use nova::mask::{AlphaMask, DEFAULT_SHARPNESS};
use nova::particle::ParticleBuffer;
use nova::sim::Outflow;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for &count in &[10_000u32, 80_000] {
        group.bench_function(format!("{count}_particles"), |b| {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut buffer = ParticleBuffer::spawn_with_rng(&mut rng, count, 0.8, 0.7);
            let outflow = Outflow {
                step: 0.01,
                bounds: 10.0,
                shrink: 1e-6,
                hue_rate: 0.05,
            };
            let mut frame = FrameState::new();

            b.iter(|| {
                frame.tick(1.0 / 60.0, 0.2);
                outflow.advance(black_box(buffer.as_mut_slice()), &frame, 1.0 / 60.0);
            })
        });
    }

    group.finish();
}

fn bench_gpu_serialize(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let buffer = ParticleBuffer::spawn_with_rng(&mut rng, 80_000, 0.8, 0.7);
    let mut scratch = Vec::new();

    c.bench_function("write_gpu_80000", |b| {
        b.iter(|| {
            buffer.write_gpu(black_box(&mut scratch));
        })
    });
}

fn bench_mask_build(c: &mut Criterion) {
    c.bench_function("mask_build_256", |b| {
        b.iter(|| black_box(AlphaMask::build(256, 256, DEFAULT_SHARPNESS)))
    });
}

criterion_group!(benches, bench_advance, bench_gpu_serialize, bench_mask_build);
criterion_main!(benches);
