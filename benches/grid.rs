use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sketchgrid::{DrawDispatch, EventKind, Grid, GridConfig, Rect};
use std::hint::black_box;

fn square(side: f64) -> Rect {
    Rect::new(0.0, 0.0, side, side)
}

// Benchmark construction at different sizes
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let sizes = [6, 60, 200];

    for &size in sizes.iter() {
        group.bench_with_input(BenchmarkId::new("size", size), &size, |b, &size| {
            b.iter(|| {
                black_box(Grid::with_headers(size, size, square(1000.0), true, true).unwrap());
            });
        });
    }
    group.finish();
}

// Benchmark both dispatch modes with a handler on every drawing event
fn bench_draw_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_dispatch");

    let dispatches = [
        ("unified", DrawDispatch::Unified),
        ("by_kind", DrawDispatch::ByKind),
    ];

    for (name, dispatch) in dispatches {
        let config = GridConfig::new(true, true).draw_dispatch(dispatch);
        let mut grid = Grid::with_config(60, 60, square(1000.0), config).unwrap();
        for kind in EventKind::ALL {
            grid.on(kind, |event| {
                black_box(event);
            });
        }

        group.bench_function(BenchmarkId::new("dispatch", name), |b| {
            b.iter(|| grid.draw());
        });
    }
    group.finish();
}

// Benchmark hover tracking across a row of cells
fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    let mut grid = Grid::with_headers(60, 60, square(1000.0), true, true).unwrap();
    grid.on_mouse_in(|col, row| {
        black_box((col, row));
    })
    .on_mouse_out(|col, row| {
        black_box((col, row));
    });

    group.bench_function("sweep", |b| {
        b.iter(|| {
            for x in (0..1000).step_by(4) {
                grid.mouse_moved(f64::from(x), 500.0);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_construction, bench_draw_dispatch, bench_hover);
criterion_main!(benches);
