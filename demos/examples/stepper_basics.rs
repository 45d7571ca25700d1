// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic stepping: clamp versus wrap, absolute assignment, and listeners.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example stepper_basics`
//! - `RUST_LOG=debug cargo run -p understory_stepper_demos --example stepper_basics`

use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_stepper::counter::BoundedCounter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut minutes = BoundedCounter::new();
    minutes.set_range(0, 59).unwrap();
    minutes.set_formatter(Some(Rc::new(|v: i32| format!("{v:02}"))));
    minutes.set_change_listener(|prev, next| println!("  changed {prev} -> {next}"));

    println!("clamped, decrement at 00:");
    minutes.increment(-1);
    println!("  shown: {}", minutes.display_text());

    println!("circular, decrement at 00:");
    minutes.set_circular(true);
    minutes.increment(-1);
    println!("  shown: {}", minutes.display_text());

    println!("absolute assignment:");
    minutes.set_current(7).unwrap();
    match minutes.set_current(75) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!("  shown: {}", minutes.display_text());
}
