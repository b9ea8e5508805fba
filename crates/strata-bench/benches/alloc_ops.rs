//! Criterion micro-benchmarks for array allocation and release.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use strata_array::{create, create_from, Array};
use strata_bench::{bench_device, PROFILES};
use strata_core::Padded;
use strata_memory::{Device, HostMirror};

/// Benchmark: allocate and drop a zero-filled device array.
fn bench_allocate_device(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_device");
    for profile in PROFILES {
        let mem = bench_device(profile).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(profile.name), &profile, |b, p| {
            b.iter(|| {
                let dev: Array<f32, Device> = create(&mem, "bench", p.count).unwrap();
                black_box(dev.size_bytes());
            });
        });
    }
    group.finish();
}

/// Benchmark: allocate a padded host mirror.
fn bench_allocate_padded_mirror(c: &mut Criterion) {
    let profile = PROFILES[1];
    let mem = bench_device(profile).unwrap();
    c.bench_function("allocate_padded_mirror_1m", |b| {
        b.iter(|| {
            let host: Array<f32, HostMirror<Padded<4096>>> =
                create(&mem, "bench", black_box(profile.count - 3)).unwrap();
            black_box(host.allocation_size());
        });
    });
}

/// Benchmark: shape-copy a device array into a new host mirror.
fn bench_create_from(c: &mut Criterion) {
    let profile = PROFILES[1];
    let mem = bench_device(profile).unwrap();
    let dev: Array<f32, Device> = create(&mem, "src", profile.count).unwrap();
    c.bench_function("create_from_device_1m", |b| {
        b.iter(|| {
            let host: Array<f32, HostMirror> = create_from(&dev).unwrap();
            black_box(host.len());
        });
    });
}

criterion_group!(
    benches,
    bench_allocate_device,
    bench_allocate_padded_mirror,
    bench_create_from
);
criterion_main!(benches);
