//! Benchmark: `jsonstack::parse` against `serde_json::from_str`.
#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jsonstack::{ParserOptions, parse, parse_chars, parse_events};

/// A deterministic array of records, `records` long.
fn make_payload(records: usize) -> String {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"user \"{i}\"","score":{}.5e-1,"tags":["a","b",null],"active":{}}}"#,
            i * 7,
            i % 2 == 0
        )
        .unwrap();
    }
    s.push(']');
    s
}

/// Nested arrays `depth` deep around a single number.
fn make_nested(depth: usize) -> String {
    let mut s = "[".repeat(depth);
    s.push('0');
    s.push_str(&"]".repeat(depth));
    s
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &records in &[10usize, 1_000] {
        let payload = make_payload(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("value", records), &payload, |b, p| {
            b.iter(|| parse(black_box(p)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("events", records), &payload, |b, p| {
            b.iter(|| parse_events(black_box(p), ParserOptions::default()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("chars", records), &payload, |b, p| {
            b.iter(|| parse_chars(black_box(p).chars(), ParserOptions::default()).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("serde_json", records), &payload, |b, p| {
            b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(p)).unwrap());
        });
    }
    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let payload = make_nested(500);
    c.bench_function("parse/nested_500", |b| {
        b.iter(|| parse(black_box(&payload)).unwrap());
    });
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_documents, bench_nesting }
criterion_main!(benches);
