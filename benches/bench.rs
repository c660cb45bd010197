//! Criterion benchmarks for the brickseek query pipeline:
//! - Query analysis (extraction + fuzzy theme fallback)
//! - Candidate expansion
//! - Result ranking

use std::hint::black_box;

use brickseek::analysis::QueryAnalyzer;
use brickseek::catalog::CatalogRecord;
use brickseek::expand::expand;
use brickseek::rank::rank;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const QUERIES: &[&str] = &[
    "oldest star wars sets",
    "biggest expensive technic sets from 2021",
    "cheap city fire station",
    "75192",
    "tecnic crane truck",
    "newest harry potter castle",
];

fn generate_records(count: usize) -> Vec<CatalogRecord> {
    let themes = ["Star Wars", "City", "Technic", "Harry Potter", "Creator"];
    (0..count)
        .map(|i| {
            CatalogRecord::builder()
                .set_id(format!("{}", 10000 + i))
                .name(format!("Benchmark Set {i}"))
                .theme(themes[i % themes.len()])
                .piece_count((i as u32 % 30) * 100)
                .price((i % 20) as f64 * 15.0)
                .release_year(1990 + (i as i32 % 35))
                .description("A benchmark catalog record with a description")
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = QueryAnalyzer::new();

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Elements(QUERIES.len() as u64));
    group.bench_function("queries", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(analyzer.analyze(black_box(query)));
            }
        })
    });
    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let analyzer = QueryAnalyzer::new();
    let intents: Vec<_> = QUERIES.iter().map(|q| analyzer.analyze(q)).collect();

    let mut group = c.benchmark_group("expand");
    group.throughput(Throughput::Elements(intents.len() as u64));
    group.bench_function("intents", |b| {
        b.iter(|| {
            for intent in &intents {
                black_box(expand(black_box(intent)));
            }
        })
    });
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze("oldest star wars sets");

    let mut group = c.benchmark_group("rank");
    for size in [100, 1000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("records_{size}"), |b| {
            b.iter(|| black_box(rank(black_box(records.clone()), black_box(&intent))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_expand, bench_rank);
criterion_main!(benches);
