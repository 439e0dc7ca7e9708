//! Benchmarks du moteur de transformation.
//!
//! Run with: cargo bench -p gf-glyph

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gf_core::request::TransformRequest;
use gf_core::style::Style;
use gf_glyph::engine::Transformer;

fn sample(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog 0123456789. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_single_styles(c: &mut Criterion) {
    let t = Transformer::seeded(1);
    let mut group = c.benchmark_group("style");
    let text = sample(1_000);
    group.throughput(Throughput::Bytes(text.len() as u64));
    for style in [Style::Bold, Style::Circled, Style::UpsideDown, Style::Morse, Style::Zalgo] {
        group.bench_with_input(BenchmarkId::from_parameter(style), &text, |b, text| {
            b.iter(|| t.apply(black_box(text), style, None));
        });
    }
    group.finish();
}

fn bench_transform_all(c: &mut Criterion) {
    let t = Transformer::seeded(1);
    let mut group = c.benchmark_group("transform_all");
    for len in [10, 100, 1_000] {
        let text = sample(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| t.transform_all(black_box(text)));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let t = Transformer::seeded(1);
    let items: Vec<TransformRequest> = Style::ALL
        .iter()
        .cycle()
        .take(100)
        .enumerate()
        .map(|(i, style)| TransformRequest::new(sample(50 + i), style.name()))
        .collect();
    c.bench_function("batch_100", |b| {
        b.iter(|| t.batch_transform(black_box(&items)));
    });
}

criterion_group!(benches, bench_single_styles, bench_transform_all, bench_batch);
criterion_main!(benches);
