//! Ranking throughput over catalogs sized like real site indexes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_core::catalog::{EntryKind, SearchEntry};
use sitenav_core::ranker::rank;
use std::hint::black_box;

fn synthetic_catalog(n: usize) -> Vec<SearchEntry> {
    (0..n)
        .map(|i| SearchEntry {
            id: format!("entry-{i}"),
            label: format!("Feature Page {i}"),
            kind: EntryKind::Page,
            path: format!("/features/{i}"),
            section: None,
            keywords: vec![format!("keyword{i}"), "payments".to_string()],
            priority: 50 + (i % 40) as u32,
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for size in [16usize, 64, 256] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::new("label_prefix", size), &catalog, |b, cat| {
            b.iter(|| rank(black_box("feature"), cat));
        });
        group.bench_with_input(BenchmarkId::new("keyword_only", size), &catalog, |b, cat| {
            b.iter(|| rank(black_box("payments"), cat));
        });
        group.bench_with_input(BenchmarkId::new("no_match", size), &catalog, |b, cat| {
            b.iter(|| rank(black_box("zzzzzz"), cat));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
