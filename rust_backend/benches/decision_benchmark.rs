use std::hint::black_box;

use aurora_rust::algorithms::{calculate_ads, darkness_factor};
use aurora_rust::astro::solar_elevation;
use aurora_rust::models::{ForecastInput, ForecastWindow, KpTrend};
use aurora_rust::services::{compute_decision, input_fingerprint};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qtty::Degrees;

fn horizon(hours: i64) -> ForecastInput {
    let start = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
    let windows = (0..hours)
        .map(|h| {
            let t = start + Duration::hours(h);
            let elevation = solar_elevation(69.6492, 18.9553, t).value();
            ForecastWindow::new(t, (h * 7 % 100) as f64, elevation, (h % 9) as f64)
        })
        .collect();
    ForecastInput::new(windows, 4.0, KpTrend::Stable)
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();

    group.bench_function("darkness_factor", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let e = -30.0 + (i as f64 * 0.03);
                black_box(darkness_factor(Degrees::new(black_box(e)), date));
            }
        });
    });

    group.bench_function("calculate_ads", |b| {
        b.iter(|| {
            black_box(calculate_ads(
                black_box(5.0),
                black_box(30.0),
                Degrees::new(-20.0),
                KpTrend::Stable,
                date,
            ))
        });
    });

    group.finish();
}

fn bench_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision");
    let now = Utc.with_ymd_and_hms(2026, 2, 10, 20, 0, 0).unwrap();

    for hours in [24i64, 48, 168] {
        let input = horizon(hours);
        group.bench_with_input(BenchmarkId::new("compute_decision", hours), &input, |b, input| {
            b.iter(|| black_box(compute_decision(black_box(input), now)))
        });
        group.bench_with_input(BenchmarkId::new("input_fingerprint", hours), &input, |b, input| {
            b.iter(|| black_box(input_fingerprint(black_box(input))))
        });
    }

    group.finish();
}

fn bench_solar(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2026, 2, 10, 20, 0, 0).unwrap();
    c.bench_function("solar_elevation", |b| {
        b.iter(|| black_box(solar_elevation(black_box(69.6492), black_box(18.9553), t)))
    });
}

criterion_group!(benches, bench_scoring, bench_decision, bench_solar);
criterion_main!(benches);
