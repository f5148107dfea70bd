//! Criterion benchmarks for the pointer hot path.
//!
//! Benchmarks:
//! 1. compute_value for each threshold
//! 2. A full press → 1000 moves → release drag cycle

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ragbar_core::{
    compute_value, CountingCapture, DragController, Threshold, ThresholdSet, TrackSurface,
};

fn bench_compute_value(c: &mut Criterion) {
    let set = ThresholdSet::default();
    let mut group = c.benchmark_group("compute_value");
    for t in Threshold::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(t.label()), &t, |b, &t| {
            b.iter(|| compute_value(black_box(t), black_box(47.3), black_box(&set)))
        });
    }
    group.finish();
}

fn bench_drag_cycle(c: &mut Criterion) {
    let xs: Vec<f64> = (0..1000u32)
        .map(|i| (f64::from(i) * 0.37).sin() * 600.0 + 300.0)
        .collect();

    c.bench_function("drag_cycle_1000_moves", |b| {
        b.iter(|| {
            let mut ctl = DragController::new(ThresholdSet::default(), CountingCapture::new());
            ctl.set_surface(Some(TrackSurface::new(20.0, 560.0)));
            ctl.press(Threshold::AmberEnd, 300.0);
            for &x in &xs {
                ctl.pointer_move(black_box(x));
            }
            ctl.release();
            black_box(*ctl.thresholds())
        })
    });
}

criterion_group!(benches, bench_compute_value, bench_drag_cycle);
criterion_main!(benches);
