// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delay arbitration on a bare interaction context.
//!
//! A slow close request must not override a fast re-open, and a sooner request
//! for the same state replaces a later one.
//!
//! Run:
//! - `cargo run -p understory_demos --example delay_arbitration`

use understory_interaction::context::InteractionContext;
use understory_interaction::types::InteractionInfo;

fn main() {
    let mut cx: InteractionContext<u32> = InteractionContext::new(false);
    let info = InteractionInfo::programmatic();

    // Open after 500 ms, then ask again with 200 ms: the sooner request wins.
    let _ = cx.delay_set_active(0, true, Some(500), info);
    let _ = cx.delay_set_active(100, true, Some(200), info);
    println!("== Pending open ==\n  deadline: {:?}", cx.next_deadline());
    assert_eq!(cx.next_deadline(), Some(300));

    // A slower request for the same state leaves the in-flight timer alone.
    let _ = cx.delay_set_active(150, true, Some(1_000), info);
    assert_eq!(cx.next_deadline(), Some(300));
    println!("  last try: {:?}", cx.delay_info().last_try.map(|a| a.delay));

    let fired = cx.poll(300);
    println!("== Fired at 300 ==\n  {:?}", fired);
    assert!(cx.is_active());

    // Closing and re-opening before the close fires: nothing happens.
    let _ = cx.delay_set_active(400, false, Some(100), info);
    let _ = cx.delay_set_active(450, true, Some(100), info);
    assert_eq!(cx.next_deadline(), None);
    assert!(cx.poll(1_000).is_none());
    println!("== After leave/enter bounce ==\n  active: {}", cx.is_active());
}
