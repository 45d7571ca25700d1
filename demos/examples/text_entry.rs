// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text entry: keystroke filtering and commit on blur for a labeled counter.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example text_entry`

use tracing_subscriber::EnvFilter;
use understory_stepper::counter::BoundedCounter;
use understory_stepper::text::TextEdit;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut month = BoundedCounter::new();
    month.set_range_with_labels(1, 12, MONTHS).unwrap();
    println!("input kind: {:?}", month.input_kind());

    // Type "o", "c", "x", "t" one keystroke at a time.
    let mut field = String::new();
    for key in ["o", "c", "x", "t"] {
        let edit = TextEdit::insert(field.len(), key);
        match month.filter_edit(&field, &edit) {
            Some(next) => field = next,
            None => println!("  rejected {key:?}"),
        }
        println!("  field: {field:?}");
    }

    let outcome = month.focus_lost(&field);
    println!("blur: {outcome:?}");
    println!("shown: {}", month.display_text());

    let mut hours = BoundedCounter::new();
    hours.set_range(0, 23).unwrap();
    for typed in ["2", "24", "23"] {
        println!("hours accepts {typed:?}: {}", hours.accepts(typed));
    }
}
