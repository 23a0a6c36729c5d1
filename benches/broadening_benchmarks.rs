//! Broadening Benchmarks
//!
//! Performance benchmarks for classification and per-depth evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linebroad::{broaden_all, classify, AtmosphereModel, BroadeningConfig, DepthLayer, LineRecord};

const DEPTHS: usize = 56;

fn synthetic_atmosphere() -> AtmosphereModel {
    let layers = (0..DEPTHS)
        .map(|i| {
            let x = i as f64 / DEPTHS as f64;
            DepthLayer {
                temperature: 3800.0 + 6000.0 * x,
                microturbulence: 1.0e5,
                electron_density: 1.0e10 * 10f64.powf(5.0 * x),
                hydrogen_density: 1.0e14 * 10f64.powf(3.0 * x),
                helium_density: 1.0e13 * 10f64.powf(3.0 * x),
                h2_density: 1.0e10,
            }
        })
        .collect();
    AtmosphereModel::new(layers).expect("valid synthetic atmosphere")
}

fn synthetic_lines(count: usize) -> Vec<LineRecord> {
    let tags = ["01", "10", "99", "AO", "GA"];
    (0..count)
        .map(|i| {
            LineRecord::new(
                4000.0 + i as f64 * 0.5,
                26.0,
                tags[i % tags.len()],
                7.9,
                1.9 + (i % 7) as f64 * 0.1,
                4.5,
                55.85,
            )
        })
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let lines = synthetic_lines(1000);

    c.bench_function("classify_1000_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(classify(black_box(line)).unwrap());
            }
        })
    });
}

fn benchmark_broaden_serial(c: &mut Criterion) {
    let atm = synthetic_atmosphere();
    let config = BroadeningConfig {
        parallel: false,
        ..BroadeningConfig::default()
    };
    let mut lines = synthetic_lines(1000);

    c.bench_function("broaden_1000_lines_56_depths_serial", |b| {
        b.iter(|| broaden_all(black_box(&mut lines), &atm, &config).unwrap())
    });
}

fn benchmark_broaden_parallel(c: &mut Criterion) {
    let atm = synthetic_atmosphere();
    let config = BroadeningConfig::default();
    let mut lines = synthetic_lines(1000);

    c.bench_function("broaden_1000_lines_56_depths_parallel", |b| {
        b.iter(|| broaden_all(black_box(&mut lines), &atm, &config).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_classify,
    benchmark_broaden_serial,
    benchmark_broaden_parallel
);
criterion_main!(benches);
