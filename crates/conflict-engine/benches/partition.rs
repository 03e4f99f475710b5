//! Benchmarks for the greedy priority partitioner.
//!
//! Two shapes: a sparse day (no overlaps, pure scan) and a dense day (long
//! displacement chains), both at 1k events.

use std::hint::black_box;

use chrono::{Duration, TimeZone, Utc};
use conflict_engine::event::{Priority, TimedEvent};
use conflict_engine::partition;
use criterion::{criterion_group, criterion_main, Criterion};

fn synthetic_events(n: usize, stride_minutes: i64, duration_minutes: i64) -> Vec<TimedEvent> {
    let day = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let start = day + Duration::minutes(i as i64 * stride_minutes);
            TimedEvent {
                id: format!("ev-{}", i),
                calendar_id: format!("cal-{}", i % 4),
                start,
                end: start + Duration::minutes(duration_minutes),
                priority: Priority::from_raw(Some((i % 5) as i64 + 1)),
            }
        })
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    // Stride >= duration: nothing overlaps.
    let sparse = synthetic_events(1000, 30, 30);
    // Stride << duration: every event overlaps its neighbors.
    let dense = synthetic_events(1000, 5, 60);

    c.bench_function("partition_sparse_1k", |b| {
        b.iter(|| partition(black_box(&sparse)))
    });
    c.bench_function("partition_dense_1k", |b| {
        b.iter(|| partition(black_box(&dense)))
    });
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
