//! Benchmarks for the college matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- query
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use college_predictor::engine::ranking::rank_by_closeness;
use college_predictor::{BrowseFilter, Catalog, CollegeRecord, Cutoff, FilterCriteria, MatchingEngine};
use rust_decimal::Decimal;

// ============================================================================
// HELPER FUNCTIONS - Deterministic catalog generation
// ============================================================================

const CITIES: &[&str] = &["Mumbai", "Thane", "Andheri", "Pune", "Kothrud", "Nagpur", "Nashik", "Sangli"];
const COURSES: &[&str] = &[
    "Computer Engineering",
    "Computer Technology",
    "Information Technology",
    "Civil Engineering",
    "Mechanical Engineering",
];
const CATEGORIES: &[&str] = &["GOPEN", "LOPEN", "GOBC", "LOBC", "GSC", "EWS"];

/// Generate a catalog of `count` records.
fn generate_catalog(count: usize, seed: u64) -> Catalog {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut record = CollegeRecord::new(
                format!("College {:05}", i / 2),
                COURSES[rng.gen_range(0..COURSES.len())],
                CITIES[rng.gen_range(0..CITIES.len())],
            )
            .with_codes(format!("{:05}", i / 2), format!("{i:08}"));
            for category in CATEGORIES {
                let rank = rng.gen_range(1..=150_000u32);
                let score = Decimal::new(rng.gen_range(3_000..=10_000i64), 2);
                record = record.with_cutoff(Cutoff::new(*category, Some(rank), Some(score)));
            }
            record
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Query Latency
// ============================================================================

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    group.measurement_time(Duration::from_secs(5));

    let engine = MatchingEngine::default();

    for &size in &[1_000usize, 10_000, 100_000] {
        let catalog = generate_catalog(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rank_unfiltered", size), &catalog, |b, catalog| {
            let criteria = FilterCriteria::by_rank(40_000);
            b.iter(|| black_box(engine.query(catalog, &criteria)));
        });

        group.bench_with_input(BenchmarkId::new("rank_filtered", size), &catalog, |b, catalog| {
            let criteria = FilterCriteria::by_rank(40_000)
                .with_branch("Computer Science and Engineering")
                .with_location("Mumbai")
                .with_main_category("OBC")
                .with_sub_category("LOBC");
            b.iter(|| black_box(engine.query(catalog, &criteria)));
        });

        group.bench_with_input(BenchmarkId::new("score_filtered", size), &catalog, |b, catalog| {
            let criteria = FilterCriteria::by_score(Decimal::new(8550, 2)).with_location("Pune");
            b.iter(|| black_box(engine.query(catalog, &criteria)));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Ranking Sort
// ============================================================================

fn bench_rank_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_sort");

    for &size in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    (0..size as i64)
                        .map(|i| if i % 17 == 0 { None } else { Some(Decimal::from((i * 7919) % 150_000)) })
                        .collect::<Vec<_>>()
                },
                |mut values| {
                    rank_by_closeness(&mut values, Decimal::from(40_000), |v| *v);
                    black_box(values)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Browse and Snapshot
// ============================================================================

fn bench_browse(c: &mut Criterion) {
    let mut group = c.benchmark_group("browse");

    let engine = MatchingEngine::default();
    let catalog = generate_catalog(50_000, 7);

    group.bench_function("dedupe_50k", |b| {
        let filter = BrowseFilter::default();
        b.iter(|| black_box(engine.browse(&catalog, &filter)));
    });

    group.bench_function("search_50k", |b| {
        let filter = BrowseFilter::new().with_search("college 001");
        b.iter(|| black_box(engine.browse(&catalog, &filter)));
    });

    group.bench_function("facets_50k", |b| {
        b.iter(|| black_box(engine.facets(&catalog)));
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    group.sample_size(20);

    let catalog = generate_catalog(10_000, 3);
    let json = serde_json::to_string(catalog.records()).unwrap_or_default();
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function("decode_10k", |b| {
        b.iter(|| black_box(Catalog::from_json_str(&json)))
    });

    group.finish();
}

criterion_group!(benches, bench_query, bench_rank_sort, bench_browse, bench_snapshot);
criterion_main!(benches);
