use criterion::{Criterion, criterion_group, criterion_main};
use dashchart_rs::{
    NumericValue, Palette, TemporalValue, build_base_options, format_axis_date, format_number,
};
use std::hint::black_box;

fn bench_axis_date_labels_10k(c: &mut Criterion) {
    let values: Vec<TemporalValue> = (0..10_000)
        .map(|i| TemporalValue::from(1_705_276_800_000_i64 + i64::from(i) * 60_000))
        .collect();

    c.bench_function("axis_date_labels_10k", |b| {
        b.iter(|| {
            for value in &values {
                let _ = format_axis_date(black_box(value));
            }
        })
    });
}

fn bench_tooltip_number_labels_10k(c: &mut Criterion) {
    let values: Vec<NumericValue> = (0..10_000)
        .map(|i| NumericValue::from(f64::from(i) * 1_234.5678))
        .collect();

    c.bench_function("tooltip_number_labels_10k", |b| {
        b.iter(|| {
            for value in &values {
                let _ = format_number(black_box(value));
            }
        })
    });
}

fn bench_base_options_build(c: &mut Criterion) {
    let palette = Palette::dark();

    c.bench_function("base_options_build", |b| {
        b.iter(|| {
            let _ = build_base_options(black_box(&palette));
        })
    });
}

criterion_group!(
    benches,
    bench_axis_date_labels_10k,
    bench_tooltip_number_labels_10k,
    bench_base_options_build
);
criterion_main!(benches);
