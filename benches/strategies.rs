//! Benchmark: bincode baseline vs compact candidate
//!
//! Criterion counterpart of the `serialization_bench` binary, for when
//! statistically stable numbers are wanted instead of plain averages.

use archive_bench::{BincodeStrategy, CompactStrategy, DataGen, PodChild, Strategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_vec_f64(c: &mut Criterion) {
    let mut gen = DataGen::seeded(0xC0FFEE);

    for (size, randomize) in [(1024usize, false), (1024, true), (128 * 1024, false), (128 * 1024, true)] {
        let data: Vec<f64> = gen.vector(size, randomize);
        let label = if randomize { "random" } else { "zeros" };

        let mut group = c.benchmark_group(format!("vec_f64_{label}_save"));
        group.throughput(Throughput::Bytes((size * 8) as u64));
        group.bench_with_input(BenchmarkId::new("bincode", size), &data, |b, d| {
            b.iter(|| BincodeStrategy.save(black_box(d)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("compact", size), &data, |b, d| {
            b.iter(|| CompactStrategy.save(black_box(d)).unwrap())
        });
        group.finish();

        let bincode_bytes = BincodeStrategy.save(&data).unwrap();
        let compact_bytes = CompactStrategy.save(&data).unwrap();

        let mut group = c.benchmark_group(format!("vec_f64_{label}_load"));
        group.throughput(Throughput::Bytes((size * 8) as u64));
        group.bench_with_input(BenchmarkId::new("bincode", size), &bincode_bytes, |b, bytes| {
            b.iter(|| BincodeStrategy.load::<Vec<f64>>(black_box(bytes)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("compact", size), &compact_bytes, |b, bytes| {
            b.iter(|| CompactStrategy.load::<Vec<f64>>(black_box(bytes)).unwrap())
        });
        group.finish();
    }
}

fn bench_pod_structs(c: &mut Criterion) {
    let data = DataGen::seeded(7).pod_structs(16 * 1024, true);

    let mut group = c.benchmark_group("pod_struct_16k");
    group.bench_function("bincode_save", |b| {
        b.iter(|| BincodeStrategy.save(black_box(&data)).unwrap())
    });
    group.bench_function("compact_save", |b| {
        b.iter(|| CompactStrategy.save(black_box(&data)).unwrap())
    });

    let bincode_bytes = BincodeStrategy.save(&data).unwrap();
    let compact_bytes = CompactStrategy.save(&data).unwrap();
    group.bench_function("bincode_load", |b| {
        b.iter(|| {
            BincodeStrategy
                .load::<Vec<archive_bench::PodStruct>>(black_box(&bincode_bytes))
                .unwrap()
        })
    });
    group.bench_function("compact_load", |b| {
        b.iter(|| {
            CompactStrategy
                .load::<Vec<archive_bench::PodStruct>>(black_box(&compact_bytes))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_pod_child(c: &mut Criterion) {
    let data = vec![PodChild::default(); 256];

    let mut group = c.benchmark_group("pod_child_256");
    group.sample_size(20);
    group.bench_function("bincode_round_trip", |b| {
        b.iter(|| {
            let bytes = BincodeStrategy.save(black_box(&data)).unwrap();
            BincodeStrategy.load::<Vec<PodChild>>(&bytes).unwrap()
        })
    });
    group.bench_function("compact_round_trip", |b| {
        b.iter(|| {
            let bytes = CompactStrategy.save(black_box(&data)).unwrap();
            CompactStrategy.load::<Vec<PodChild>>(&bytes).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_vec_f64, bench_pod_structs, bench_pod_child);
criterion_main!(benches);
