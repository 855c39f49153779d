use area_drag_chart::core::{
    AxisScale, Curve, DataPoint, LinearScale, Series, project_area_geometry,
};
use area_drag_chart::interaction::{DragWindowInput, resolve_drag_window};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn series(len: usize, offset: f64) -> Series {
    let points = (0..len)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(offset + t * 1_000.0, 100.0 + (t * 0.01).sin() * 25.0)
        })
        .collect();
    Series::new(points).expect("valid generated series")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::horizontal(0.0, 10_000.0, 1920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.to_domain(px).expect("from pixel");
        })
    });
}

fn bench_drag_window_resolution(c: &mut Criterion) {
    let full = series(10_000, 0.0);
    let visible = full.slice_window(area_drag_chart::core::DomainWindow::new(
        2_000_000.0,
        6_000_000.0,
    ));

    c.bench_function("drag_window_resolution", |b| {
        b.iter(|| {
            let _ = resolve_drag_window(black_box(DragWindowInput {
                drag_start_x: 100.0,
                drag_current_x: 180.0,
                plot_width_px: 1_200.0,
                full_series: &full,
                visible_series: &visible,
                visible_window: None,
            }));
        })
    });
}

fn bench_area_projection_10k(c: &mut Criterion) {
    let data = series(10_000, 0.0);
    let (start, end) = data.extent().expect("non-empty");
    let x = LinearScale::horizontal(start, end, 1920.0).expect("x scale");
    let y = LinearScale::vertical(0.0, 150.0, 1080.0).expect("y scale");

    c.bench_function("area_projection_10k_monotone", |b| {
        b.iter(|| {
            let _ = project_area_geometry(
                black_box(data.points()),
                black_box(&x),
                black_box(&y),
                Curve::MonotoneX,
            )
            .expect("projection should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_drag_window_resolution,
    bench_area_projection_10k
);
criterion_main!(benches);
