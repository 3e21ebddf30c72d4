// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pinchview::{PinchController, PointerEvent, ViewerConfig};
use pinchview_viewport::Viewport;

fn laid_out() -> PinchController<Size> {
    let mut c = PinchController::with_content(Size::new(4000.0, 3000.0), ViewerConfig::default())
        .expect("valid content");
    c.on_size_changed(1080.0, 1920.0).expect("valid size");
    c
}

fn bench_pointer_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/pointer_stream");

    // A pan followed by a pinch, the way a touch screen delivers it.
    for samples in [16u32, 128, 1_024] {
        let a = Point::new(500.0, 900.0);
        let mut events = vec![PointerEvent::primary_down(a, 0)];
        for i in 0..samples {
            let x = a.x + f64::from(i % 97);
            events.push(PointerEvent::moved(Point::new(x, a.y), u64::from(i) * 8));
        }
        events.push(PointerEvent::secondary_down(a, Point::new(700.0, a.y), 10_000));
        for i in 0..samples {
            let spread = 100.0 + f64::from(i % 300);
            events.push(PointerEvent::moved_pair(
                a,
                Point::new(a.x + spread, a.y),
                10_000 + u64::from(i),
            ));
        }
        events.push(PointerEvent::primary_up(a, 20_000));

        group.bench_with_input(BenchmarkId::from_parameter(samples), &events, |b, events| {
            b.iter_batched(
                laid_out,
                |mut c| {
                    for event in events {
                        black_box(c.on_pointer_event(event));
                    }
                    black_box(c);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/settle");

    // Ticks until a drag overrun has been pulled back.
    for drag in [100u32, 1_000, 10_000] {
        let drag = f64::from(drag);
        group.bench_with_input(BenchmarkId::from_parameter(drag), &drag, |b, &drag| {
            b.iter_batched(
                || {
                    let mut c = laid_out();
                    c.on_pointer_event(&PointerEvent::primary_down(Point::ORIGIN, 0));
                    c.on_pointer_event(&PointerEvent::moved(Point::new(drag, drag), 16));
                    c.on_pointer_event(&PointerEvent::primary_up(Point::new(drag, drag), 1_000));
                    c
                },
                |mut c| {
                    let mut ticks = 0_u32;
                    while c.tick().redraw {
                        ticks += 1;
                    }
                    black_box(ticks);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut vp = Viewport::new();
    vp.set_content_size(Size::new(4000.0, 3000.0))
        .expect("valid content");
    vp.set_view_size(Size::new(1080.0, 1920.0)).expect("valid size");
    c.bench_function("viewport/bounds", |b| {
        b.iter(|| black_box(black_box(&vp).bounds()));
    });
}

criterion_group!(benches, bench_pointer_stream, bench_settle, bench_bounds);
criterion_main!(benches);
