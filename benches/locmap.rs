use criterion::{Criterion, criterion_group, criterion_main};
use locmap::prelude::*;
use std::hint::black_box;

fn distance(from: &Coordinate, to: &Coordinate) {
    let _ = black_box(from.distance(to));
}

fn swap(view: &mut LocationView) {
    view.swap();
    let _ = black_box(view.distance());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mumbai = Coordinate::from((19.076, 72.8777));
    let pune = Coordinate::from((18.5204, 73.8567));
    let mut view = LocationView::default();

    let mut group = c.benchmark_group("Distance");

    group.bench_function("Haversine", |b| {
        b.iter(|| distance(black_box(&mumbai), black_box(&pune)))
    });

    group.bench_function("Swap and recompute", |b| b.iter(|| swap(&mut view)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
