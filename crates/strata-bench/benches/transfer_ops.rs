//! Criterion micro-benchmarks for the three transfer directions.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata_array::{create_from, deep_copy, Array};
use strata_bench::{bench_device, mirrored_pair, PROFILES};
use strata_memory::{Device, HostMirror};

/// Benchmark: host mirror to device.
fn bench_upload(c: &mut Criterion) {
    let mut group = c.benchmark_group("host_to_device");
    for profile in PROFILES {
        let mem = bench_device(profile).unwrap();
        let (host, mut dev) = mirrored_pair(&mem, profile).unwrap();
        group.throughput(Throughput::Bytes(profile.bytes() as u64));
        group.bench_function(BenchmarkId::from_parameter(profile.name), |b| {
            b.iter(|| deep_copy(black_box(&mut dev), black_box(&host)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark: device to host mirror.
fn bench_download(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_to_host");
    for profile in PROFILES {
        let mem = bench_device(profile).unwrap();
        let (mut host, dev) = mirrored_pair(&mem, profile).unwrap();
        group.throughput(Throughput::Bytes(profile.bytes() as u64));
        group.bench_function(BenchmarkId::from_parameter(profile.name), |b| {
            b.iter(|| deep_copy(black_box(&mut host), black_box(&dev)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark: device to device.
fn bench_device_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_to_device");
    for profile in PROFILES {
        let mem = bench_device(profile).unwrap();
        let (_host, src) = mirrored_pair(&mem, profile).unwrap();
        let mut dst: Array<f32, Device> = create_from(&src).unwrap();
        group.throughput(Throughput::Bytes(profile.bytes() as u64));
        group.bench_function(BenchmarkId::from_parameter(profile.name), |b| {
            b.iter(|| deep_copy(black_box(&mut dst), black_box(&src)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark: full round trip through a scratch mirror.
fn bench_round_trip(c: &mut Criterion) {
    let profile = PROFILES[1];
    let mem = bench_device(profile).unwrap();
    let (_host, dev) = mirrored_pair(&mem, profile).unwrap();
    let mut scratch: Array<f32, HostMirror> = create_from(&dev).unwrap();
    c.bench_function("round_trip_1m", |b| {
        b.iter(|| {
            deep_copy(&mut scratch, &dev).unwrap();
            black_box(scratch.values()[0]);
        });
    });
}

criterion_group!(
    benches,
    bench_upload,
    bench_download,
    bench_device_copy,
    bench_round_trip
);
criterion_main!(benches);
