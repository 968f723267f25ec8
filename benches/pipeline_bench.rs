//! Benchmarks for the filter and aggregation pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vizboard::pipeline::*;
use vizboard::record::{Field, Record};

const COUNTRIES: [&str; 6] = ["United States of America", "India", "China", "Russia", "Nigeria", ""];
const SECTORS: [&str; 5] = ["Energy", "Environment", "Government", "Manufacturing", "Retail"];
const TOPICS: [&str; 8] = ["oil", "gas", "market", "economy", "climate", "war", "consumption", "policy"];

fn create_test_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new()
                .titled(format!("Report {} on {}", i, TOPICS[i % TOPICS.len()]))
                .with(Field::Country, COUNTRIES[i % COUNTRIES.len()])
                .with(Field::Sector, SECTORS[i % SECTORS.len()])
                .with(Field::Topic, TOPICS[i % TOPICS.len()])
                .with(Field::Intensity, (i % 20).to_string())
                .with_likelihood((i % 5) as f64)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [1000, 10000] {
        let records = create_test_records(size);
        let selection = FilterSelection::new()
            .with(Field::Country, "India")
            .with(Field::Sector, "Energy");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("two_constraints_{}", size), |b| {
            b.iter(|| filter(black_box(&records), black_box(&selection)))
        });

        group.bench_function(format!("search_{}", size), |b| {
            b.iter(|| search(black_box(&records), black_box("GAS")))
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [1000, 10000] {
        let records = create_test_records(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("group_count_topic_{}", size), |b| {
            b.iter(|| group_count(black_box(&records), Field::Topic))
        });

        group.bench_function(format!("dashboard_view_{}", size), |b| {
            b.iter(|| DashboardView::build(black_box(&records), &FilterSelection::new()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_aggregate);
criterion_main!(benches);
