// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked range: moving one side past the other drags it along.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example range_linked`

use tracing_subscriber::EnvFilter;
use understory_stepper::range::LinkedRangeCounter;
use understory_stepper::types::Side;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut price = LinkedRangeCounter::new();
    price.set_range(0, 10).unwrap();
    price.set_change_listener(|side, prev, next| println!("  {side:?}: {prev} -> {next}"));

    let show = |r: &LinkedRangeCounter| println!("  [{}, {}]", r.min_current(), r.max_current());

    println!("max down to 4:");
    price.set_max_current(4).unwrap();
    show(&price);

    println!("min up by 15 (clamps at 10, pushes max):");
    price.increment(Side::Min, 15);
    show(&price);

    println!("unlinked, max to 0:");
    price.set_linked(false);
    price.set_max_current(0).unwrap();
    show(&price);
}
