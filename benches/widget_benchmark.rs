#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for widget render and reset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use histogram_widget::prelude::*;

fn widget(bins: usize, page: &mut Page) -> HistogramWidget<BarChartFactory> {
    let labels: Vec<String> = (0..bins).map(|i| format!("bin {i}")).collect();
    HistogramWidget::new(
        &mut page.anchor(DEFAULT_ANCHOR_ID).unwrap(),
        BarChartFactory,
        labels,
        800,
        600,
        "bench",
    )
    .unwrap()
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_render");

    for bins in [3, 16, 64, 256] {
        let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
        let mut w = widget(bins, &mut page);
        // Deterministic, bell-curve-like counts
        let values: Vec<f64> = (0..bins)
            .map(|i| {
                let x = i as f64 / bins as f64;
                (x * std::f64::consts::PI).sin() * 100.0 + (i % 7) as f64
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(bins), &bins, |b, _| {
            b.iter(|| w.render(black_box(&values).iter().copied().enumerate()).unwrap());
        });
    }

    group.finish();
}

fn reset_benchmark(c: &mut Criterion) {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut w = widget(16, &mut page);

    c.bench_function("widget_reset", |b| {
        b.iter(|| w.reset().unwrap());
    });
}

criterion_group!(benches, render_benchmark, reset_benchmark);
criterion_main!(benches);
