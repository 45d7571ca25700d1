// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stepper --heading-base-level=0

//! Understory Stepper: a headless, `no_std` value model for numeric steppers.
//!
//! ## Overview
//!
//! A stepper is an integer field with increment and decrement buttons. This crate holds the
//! value logic and nothing else: it does not render, lay out, or receive input events itself.
//! The host toolkit draws the field from [`display_text`](crate::counter::BoundedCounter::display_text),
//! forwards button gestures and text edits, and runs timers for held buttons.
//!
//! - [`BoundedCounter`](crate::counter::BoundedCounter): one integer within `[start, end]`, with
//!   clamp-or-wrap stepping, optional display labels, text commit, and repeat sessions.
//! - [`LinkedRangeCounter`](crate::range::LinkedRangeCounter): two counters over a shared range
//!   selecting a `[min, max]` interval, kept non-crossing while linked.
//! - [`StepButton`](crate::gesture::StepButton): maps click / long press / release onto either.
//!
//! ## Changes and listeners
//!
//! Every operation that moves a value returns the resulting [`Change`](crate::types::Change)
//! (or [`RangeEvent`](crate::types::RangeEvent)s) and also invokes the single registered
//! listener. Operations that leave values untouched report nothing.
//!
//! ## Errors
//!
//! Only programmatic misuse fails: an inverted range or a mismatched label table
//! ([`ConfigError`](crate::error::ConfigError)), and absolute assignment outside the bounds
//! ([`RangeError`](crate::error::RangeError)). Stepping clamps or wraps, and text commit falls
//! back rather than failing.
//!
//! ## Timers
//!
//! Held buttons step repeatedly. Starting a repeat session returns a
//! [`RepeatRequest`](crate::types::RepeatRequest); the host posts a timer for its `delay` and
//! reports back with the token. Stale tokens are ignored, so stopping never races a queued tick.
//!
//! ## Minimal example
//!
//! ```
//! use understory_stepper::counter::BoundedCounter;
//! use understory_stepper::range::LinkedRangeCounter;
//! use understory_stepper::types::Side;
//!
//! let mut minutes = BoundedCounter::new();
//! minutes.set_range(0, 59).unwrap();
//! minutes.set_circular(true);
//! minutes.increment(-1);
//! assert_eq!(minutes.current(), 59);
//!
//! let mut months = LinkedRangeCounter::new();
//! months
//!     .set_range_with_labels(1, 12, ["Jan", "Feb", "Mar", "Apr", "May", "Jun",
//!                                    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"])
//!     .unwrap();
//! months.commit_text(Side::Max, "mar");
//! months.commit_text(Side::Min, "oct");
//! // The range is linked: moving min past max drags max along.
//! assert_eq!(months.display_text(Side::Min), "Oct");
//! assert_eq!(months.display_text(Side::Max), "Oct");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod counter;
pub mod error;
pub mod gesture;
pub mod range;
pub mod text;
pub mod types;
