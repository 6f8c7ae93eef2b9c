use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nutrisol::prelude::*;
use nutrisol::reference::read_curves_from_reader;
use std::hint::black_box;

const CURVES: &str = "\
metric,standard,gender,key,p3,p5,p10,p15,p25,p50,p75,p85,p90,p95,p97
weight,cdc,female,96,19.0,20.0,21.5,22.5,24.0,26.0,29.0,32.0,34.0,37.0,40.0
height,cdc,female,96,115.0,117.0,119.5,121.0,123.5,127.0,129.5,132.0,134.0,136.0,138.0
bmi,cdc,female,96,13.2,13.5,14.0,14.3,14.9,15.7,17.0,18.3,19.2,20.6,22.0
";

/// Build a typical adult referral
fn adult_snapshot(i: usize) -> PatientSnapshot {
    let scale = 1.0 + (i as f64 % 7.0) * 0.02;
    PatientSnapshot::builder()
        .gender(if i % 2 == 0 { Gender::Male } else { Gender::Female })
        .age(25 + (i % 50) as u32)
        .height(165.0 * scale)
        .weight(72.0 * scale)
        .build()
}

fn pediatric_snapshot() -> PatientSnapshot {
    PatientSnapshot::builder()
        .gender(Gender::Female)
        .pediatric_age(8, 0, 0)
        .height(120.0)
        .weight(25.0)
        .build()
}

fn bench_single_assessment(c: &mut Criterion) {
    let provider = read_curves_from_reader(CURVES.as_bytes()).unwrap();
    let options = EngineOptions::default();
    let adult = adult_snapshot(0);
    let child = pediatric_snapshot();

    c.bench_function("assess_adult", |b| {
        b.iter(|| black_box(compute(black_box(&adult), &provider, &options)));
    });

    c.bench_function("assess_pediatric", |b| {
        b.iter(|| black_box(compute(black_box(&child), &provider, &options)));
    });
}

fn bench_batch_assessment(c: &mut Criterion) {
    let provider = read_curves_from_reader(CURVES.as_bytes()).unwrap();
    let options = EngineOptions::default();

    let mut group = c.benchmark_group("assess_batch");
    for n in [10usize, 100, 1000] {
        let snapshots: Vec<PatientSnapshot> = (0..n).map(adult_snapshot).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshots, |b, s| {
            b.iter(|| black_box(compute_many(black_box(s), &provider, &options)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_assessment, bench_batch_assessment);
criterion_main!(benches);
