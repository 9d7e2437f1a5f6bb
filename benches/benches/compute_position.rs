// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use std::collections::BTreeMap;
use understory_floating::adapter::PositioningAdapter;
use understory_floating::compute::{DefaultEngine, compute_position};
use understory_floating::types::{
    ArrowOptions, AutoPlacementOptions, FlipOptions, Middleware, OffsetOptions, Placement,
    PositionOptions, ShiftOptions,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

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

// References scattered over (and slightly past) the viewport, so flip and shift have work.
fn gen_references(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_f64() * (VIEWPORT.width() + 40.0) - 20.0;
        let y0 = rng.next_f64() * (VIEWPORT.height() + 40.0) - 20.0;
        out.push(Rect::new(x0, y0, x0 + 80.0, y0 + 24.0));
    }
    out
}

fn popover_options() -> PositionOptions {
    PositionOptions {
        placement: Placement::Bottom,
        middleware: vec![
            Middleware::Offset(OffsetOptions::main(8.0)),
            Middleware::Flip(FlipOptions::default()),
            Middleware::Shift(ShiftOptions {
                padding: 8.0,
                ..Default::default()
            }),
            Middleware::Arrow(ArrowOptions {
                size: Size::new(12.0, 6.0),
                padding: 6.0,
            }),
        ],
        ..Default::default()
    }
}

fn bench_compute(c: &mut Criterion) {
    let refs = gen_references(1_000);
    let floating = Rect::new(0.0, 0.0, 240.0, 160.0);
    let mut group = c.benchmark_group("compute_position");
    group.throughput(Throughput::Elements(refs.len() as u64));

    let bare = PositionOptions::default();
    group.bench_function("no_middleware", |b| {
        b.iter(|| {
            for r in &refs {
                black_box(compute_position(*r, floating, VIEWPORT, &bare));
            }
        });
    });

    let popover = popover_options();
    group.bench_function("offset_flip_shift_arrow", |b| {
        b.iter(|| {
            for r in &refs {
                black_box(compute_position(*r, floating, VIEWPORT, &popover));
            }
        });
    });

    let auto = PositionOptions {
        middleware: vec![Middleware::AutoPlacement(AutoPlacementOptions::default())],
        ..Default::default()
    };
    group.bench_function("auto_placement", |b| {
        b.iter(|| {
            for r in &refs {
                black_box(compute_position(*r, floating, VIEWPORT, &auto));
            }
        });
    });
    group.finish();
}

fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("positioning_adapter");
    group.bench_function("layout_change_run_pending", |b| {
        let mut rects = BTreeMap::new();
        rects.insert(1_u32, Rect::new(600.0, 400.0, 680.0, 424.0));
        rects.insert(2_u32, Rect::new(0.0, 0.0, 240.0, 160.0));
        b.iter_batched(
            || {
                let mut adapter = PositioningAdapter::new(popover_options());
                let _ = adapter.set_reference(Some(1_u32));
                let _ = adapter.set_floating(Some(2_u32));
                adapter
            },
            |mut adapter| {
                for _ in 0..64 {
                    let _ = adapter.notify_layout_change();
                    black_box(adapter.run_pending(&DefaultEngine, &rects, VIEWPORT));
                }
                adapter
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_adapter);
criterion_main!(benches);
