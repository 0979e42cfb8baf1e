// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_slider::pointer::PointerHub;
use understory_slider::{Axis, Slider, SliderConfig, SliderController, SliderState};

fn bench_reduce_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/reduce_drag");

    for moves in [16usize, 256, 4_096] {
        let coords: Vec<f64> = (0..moves).map(|i| ((i * 37) % 400) as f64).collect();
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::new("state", moves), &coords, |b, coords| {
            b.iter(|| {
                let mut state = SliderState::new(Axis::Horizontal, 0.5).drag_start(0.0, 400.0);
                for &coord in coords {
                    state = state.drag_move(black_box(coord));
                }
                black_box(state.drag_end(0.0))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("controller", moves),
            &coords,
            |b, coords| {
                b.iter(|| {
                    let mut slider = SliderController::new(SliderConfig::new());
                    slider.drag_start(0.0, 400.0);
                    for &coord in coords {
                        black_box(slider.drag_move(coord));
                    }
                    slider.revision()
                });
            },
        );
    }

    group.finish();
}

fn bench_hub_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/hub_fanout");
    let track = Size::new(400.0, 10.0);

    // Idle sliders cost one upgrade and borrow per event.
    for sliders in [1usize, 16, 256] {
        let hub = PointerHub::new();
        let mut all: Vec<Slider> = (0..sliders)
            .map(|_| Slider::new(SliderConfig::new(), &hub))
            .collect();
        all[0].press_thumb(Point::new(0.0, 0.0), track);
        group.throughput(Throughput::Elements(sliders as u64));

        group.bench_with_input(BenchmarkId::new("move", sliders), &hub, |b, hub| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 1.0) % 400.0;
                black_box(hub.pointer_move(Point::new(x, 0.0)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce_drag, bench_hub_fanout);
criterion_main!(benches);
