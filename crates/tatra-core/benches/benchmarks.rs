use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tatra_core::prelude::*;

/// Bundled trails repeated with unique slugs.
fn synthetic(n: usize) -> Vec<Trail> {
    let base = TrailDb::bundled().expect("bundled dataset").trails.clone();
    (0..n)
        .map(|i| {
            let mut t = base[i % base.len()].clone();
            t.slug = format!("{}-{i}", t.slug);
            t
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let criteria = FilterCriteria::from_query_str(
        "region=western-tatras&difficulty=easy,difficult&season=summer",
    );
    let search = FilterCriteria::new().with_search("dolina");

    let mut group = c.benchmark_group("filter");
    for n in [100usize, 1_000, 10_000] {
        let trails = synthetic(n);
        group.bench_with_input(BenchmarkId::new("taxonomy", n), &trails, |b, t| {
            b.iter(|| filter::apply(black_box(t), black_box(&criteria)))
        });
        group.bench_with_input(BenchmarkId::new("search", n), &trails, |b, t| {
            b.iter(|| filter::apply(black_box(t), black_box(&search)))
        });
    }
    group.finish();
}

fn bench_markers(c: &mut Criterion) {
    let trails = synthetic(1_000);
    c.bench_function("project_markers/1000", |b| {
        b.iter(|| markers::project_markers(black_box(&trails)))
    });
}

fn bench_query(c: &mut Criterion) {
    let criteria = FilterCriteria::new()
        .with_region("high-tatras")
        .with_difficulties([Difficulty::Easy, Difficulty::Expert])
        .with_features(["lake", "peak"])
        .with_search("Morskie Oko");
    c.bench_function("query/encode", |b| b.iter(|| black_box(&criteria).to_query_string()));

    let qs = criteria.to_query_string();
    c.bench_function("query/decode", |b| {
        b.iter(|| FilterCriteria::from_query_str(black_box(&qs)))
    });
}

criterion_group!(benches, bench_filter, bench_markers, bench_query);
criterion_main!(benches);
