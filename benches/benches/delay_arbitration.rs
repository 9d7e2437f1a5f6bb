// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_interaction::containment::NoContainment;
use understory_interaction::context::InteractionContext;
use understory_interaction::hover::{Hover, HoverOptions};
use understory_interaction::interactions::Interactions;
use understory_interaction::types::{Delay, ElementEvent, EventName, PointerType, Region};

fn bench_hover_bounce(c: &mut Criterion) {
    let interactions: Interactions<u32> = Interactions::new().with(Hover::new(HoverOptions {
        delay: Delay {
            open: Some(300),
            close: Some(100),
        },
        interactive: true,
        ..Default::default()
    }));
    let enter = ElementEvent::new(EventName::PointerEnter).with_pointer(PointerType::Mouse);
    let leave = ElementEvent::new(EventName::PointerLeave).with_pointer(PointerType::Mouse);

    let mut group = c.benchmark_group("delay_arbitration");
    const EVENTS: u64 = 10_000;
    group.throughput(Throughput::Elements(EVENTS));
    group.bench_function("hover_enter_leave_poll", |b| {
        b.iter(|| {
            let mut cx = InteractionContext::new(false);
            let mut now = 0;
            for i in 0..EVENTS {
                let ev = if i % 2 == 0 { &enter } else { &leave };
                black_box(interactions.dispatch(&mut cx, Region::Reference, ev, now, &NoContainment));
                now += 37;
                black_box(cx.poll(now));
            }
            cx.is_active()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hover_bounce);
criterion_main!(benches);
