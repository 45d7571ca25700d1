// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held button: a repeat session driven by a simple host timer loop.
//!
//! The loop stands in for a toolkit timer: it sleeps for each request's delay and
//! reports the token back. Releasing the button ends the chain even if a tick is
//! already queued.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example stepper_repeat`

use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_stepper::counter::BoundedCounter;
use understory_stepper::gesture::{Gesture, StepButton};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut counter = BoundedCounter::new();
    counter.set_range(0, 100).unwrap();
    counter.set_repeat_interval(Duration::from_millis(20));

    let up = StepButton::up();
    let mut pending = up.handle(&mut counter, Gesture::LongPress, Some("40")).repeat;
    println!("pressed: {}", counter.display_text());

    let mut ticks = 0;
    while let Some(request) = pending {
        thread::sleep(request.delay);
        ticks += 1;
        if ticks == 5 {
            up.handle(&mut counter, Gesture::Release, None);
            println!("released");
        }
        pending = counter.repeat_tick(request.token).map(|step| step.next);
        println!("tick {ticks}: {}", counter.display_text());
    }
    println!("final: {}", counter.display_text());
}
