// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compute floating positions with middleware.
//!
//! Places the same floating rect against references at different spots in a
//! viewport and prints where flip, shift, and arrow put it.
//!
//! Run:
//! - `cargo run -p understory_demos --example floating_compute`

use kurbo::{Rect, Size};
use understory_floating::compute::compute_position;
use understory_floating::types::{
    ArrowOptions, FlipOptions, Middleware, OffsetOptions, Placement, PositionOptions,
    ShiftOptions,
};

fn main() {
    let viewport = Rect::new(0.0, 0.0, 320.0, 240.0);
    let floating = Rect::new(0.0, 0.0, 120.0, 40.0);
    let options = PositionOptions {
        placement: Placement::Bottom,
        middleware: vec![
            Middleware::Offset(OffsetOptions::main(6.0)),
            Middleware::Flip(FlipOptions::default()),
            Middleware::Shift(ShiftOptions {
                padding: 4.0,
                ..Default::default()
            }),
            Middleware::Arrow(ArrowOptions {
                size: Size::new(10.0, 5.0),
                padding: 4.0,
            }),
        ],
        ..Default::default()
    };

    let references = [
        ("centered", Rect::new(140.0, 100.0, 180.0, 120.0)),
        ("bottom edge", Rect::new(140.0, 210.0, 180.0, 230.0)),
        ("left edge", Rect::new(2.0, 100.0, 22.0, 120.0)),
    ];

    for (label, reference) in references {
        let data = compute_position(reference, floating, viewport, &options);
        println!(
            "== {label} ==\n  placement: {:?}\n  at: ({}, {})\n  shift: {:?}\n  arrow: {:?}",
            data.placement,
            data.x,
            data.y,
            data.middleware_data.shift,
            data.middleware_data.arrow.map(|a| a.x),
        );
    }

    let flipped = compute_position(references[1].1, floating, viewport, &options);
    assert_eq!(flipped.placement, Placement::Top);
    let shifted = compute_position(references[2].1, floating, viewport, &options);
    assert_eq!(shifted.x, 4.0);
}
