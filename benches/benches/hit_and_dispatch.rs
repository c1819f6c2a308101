// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_widget::controls::{Button, Slider};
use understory_widget::geometry::rect;
use understory_widget::registry::Deferred;
use understory_widget::{InputEvent, UiEvent, UiRoot, WidgetId};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn grid_root(n: usize, cell: f64) -> UiRoot {
    let mut ui = UiRoot::new();
    for y in 0..n {
        for x in 0..n {
            let id = WidgetId((y * n + x) as u32);
            let bounds = rect(x as f64 * cell, y as f64 * cell, cell, cell);
            let _ = ui.register(Button::new(id, bounds));
        }
    }
    ui
}

fn random_root(count: usize, extent: f64, size: f64) -> UiRoot {
    let mut ui = UiRoot::new();
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in 0..count {
        let x0 = rng.next_f64() * (extent - size);
        let y0 = rng.next_f64() * (extent - size);
        let z = (rng.next_u64() % 8) as i32;
        let button = Button::new(WidgetId(i as u32), rect(x0, y0, size, size)).with_z_order(z);
        let _ = ui.register(button);
    }
    ui
}

fn random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    let points = random_points(256, 640.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &n in &[8usize, 16, 32] {
        let ui = grid_root(n, 640.0 / n as f64);
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &p in &points {
                    hits += usize::from(ui.top_widget_at(black_box(p)).is_some());
                }
                hits
            });
        });
    }
    let ui = random_root(1_000, 640.0, 40.0);
    group.bench_function("random_overlap_1000", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &p in &points {
                hits += usize::from(ui.top_widget_at(black_box(p)).is_some());
            }
            hits
        });
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let points = random_points(256, 640.0);
    let moves: Vec<InputEvent> = points.iter().map(|p| InputEvent::pointer_move(p.x, p.y)).collect();
    group.throughput(Throughput::Elements(moves.len() as u64));

    group.bench_function("hover_sweep_grid_n16", |b| {
        b.iter_batched(
            || grid_root(16, 40.0),
            |mut ui| {
                let mut count = 0_usize;
                let mut handler = |_: &UiEvent, _: &mut Deferred| count += 1;
                for e in &moves {
                    ui.dispatch(black_box(e), &mut handler);
                }
                count
            },
            BatchSize::SmallInput,
        );
    });

    let mut drag = vec![InputEvent::pointer_down(0.0, 10.0)];
    drag.extend((1..=256).map(|i| InputEvent::pointer_move(i as f64 * 2.5, 10.0)));
    drag.push(InputEvent::pointer_up(640.0, 10.0));
    group.bench_function("slider_drag_256", |b| {
        b.iter_batched(
            || {
                let mut ui = grid_root(16, 40.0);
                if let Ok(slider) = Slider::new(WidgetId(10_000), rect(0.0, 0.0, 640.0, 20.0), 0.0, 1.0, 0.0) {
                    let _ = ui.register(slider.with_z_order(1));
                }
                ui
            },
            |mut ui| ui.dispatch_all(black_box(&drag)).len(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_dispatch);
criterion_main!(benches);
