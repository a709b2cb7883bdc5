//! Canvas rasterization benchmarks.
//!
//! Run: `cargo bench --bench canvas_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use am_canvas::{Canvas, Point};

/// Stroke rasterization at different segment lengths.
fn bench_draw_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segment Drawing");

    for length in [10, 50, 200, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &length,
            |b, &length| {
                let mut canvas = Canvas::new(640, 480);
                b.iter(|| {
                    canvas.draw_segment(
                        black_box(Point::new(10, 240)),
                        black_box(Point::new(10 + length, 240)),
                    );
                });
            },
        );
    }

    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    c.bench_function("erase_disc", |b| {
        let mut canvas = Canvas::new(640, 480);
        canvas.draw_segment(Point::new(0, 240), Point::new(639, 240));
        b.iter(|| canvas.erase(black_box(Point::new(320, 240))));
    });
}

fn bench_clear(c: &mut Criterion) {
    c.bench_function("canvas_clear", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.clear());
    });
}

criterion_group!(benches, bench_draw_segment, bench_erase, bench_clear);
criterion_main!(benches);
