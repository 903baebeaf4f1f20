//! Benchmarks for the sort/filter engine and pagination.

#![allow(missing_docs)]

use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gs_core::JsonRecord;
use gs_grid::{ColumnDescriptor, ColumnModel, FilterState, Paginator, SortDirection, SortState, query};
use serde_json::json;

const LEVELS: [&str; 4] = ["INFO", "WARN", "ERROR", "DEBUG"];
const SERVICES: [&str; 5] = [
    "auth-service",
    "payment-gateway",
    "user-profile-service",
    "notification-service",
    "api-gateway",
];

fn records(count: usize) -> Vec<JsonRecord> {
    (0..count)
        .map(|i| {
            JsonRecord::try_from(json!({
                "id": i,
                "level": LEVELS[i % LEVELS.len()],
                "service": SERVICES[(i * 7) % SERVICES.len()],
                "message": format!("Event number {i} processed"),
            }))
            .unwrap_or_else(|e| unreachable!("{e}"))
        })
        .collect()
}

fn columns() -> ColumnModel<JsonRecord> {
    ColumnModel::new(vec![
        ColumnDescriptor::field("id", "ID").sortable(),
        ColumnDescriptor::field("level", "Level").sortable().filterable(),
        ColumnDescriptor::field("service", "Service").sortable().filterable(),
        ColumnDescriptor::field("message", "Message").filterable(),
    ])
}

fn bench_apply(c: &mut Criterion) {
    let columns = columns();
    let mut group = c.benchmark_group("query_apply");

    for size in [100, 1_000, 10_000] {
        let data = records(size);

        group.bench_with_input(BenchmarkId::new("filter", size), &data, |b, data| {
            let filters: FilterState = [("service", "gateway"), ("level", "err")].into_iter().collect();
            let sort = SortState::default();
            b.iter(|| query::apply(black_box(data), &columns, &filters, &sort));
        });

        group.bench_with_input(BenchmarkId::new("sort_text", size), &data, |b, data| {
            let filters = FilterState::new();
            let sort = SortState::by("service", SortDirection::Descending);
            b.iter(|| query::apply(black_box(data), &columns, &filters, &sort));
        });

        group.bench_with_input(BenchmarkId::new("sort_numeric", size), &data, |b, data| {
            let filters = FilterState::new();
            let sort = SortState::by("id", SortDirection::Descending);
            b.iter(|| query::apply(black_box(data), &columns, &filters, &sort));
        });
    }

    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let indices: Vec<usize> = (0..10_000).collect();
    let page_size = NonZeroUsize::new(50).unwrap_or(NonZeroUsize::MIN);

    c.bench_function("paginate_walk", |b| {
        b.iter(|| {
            let mut paginator = Paginator::new(page_size);
            paginator.set_total_items(indices.len());
            let mut seen = 0;
            while {
                seen += paginator.slice(black_box(&indices)).len();
                paginator.next_page()
            } {}
            seen
        });
    });
}

criterion_group!(benches, bench_apply, bench_paginate);
criterion_main!(benches);
