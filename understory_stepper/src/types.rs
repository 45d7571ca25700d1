// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for steppers: bounds, changes, sides, flags, and repeat requests.
//!
//! ## Overview
//!
//! These types describe the value model and its outputs.
//! They are used by [`BoundedCounter`](crate::counter::BoundedCounter) and
//! [`LinkedRangeCounter`](crate::range::LinkedRangeCounter) and consumed by host toolkits.

use alloc::rc::Rc;
use alloc::string::String;
use core::time::Duration;

use crate::error::ConfigError;

/// Inclusive bounds `[start, end]` of a counter.
///
/// Always satisfies `start <= end`; construct with [`Bounds::new`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Bounds {
    start: i32,
    end: i32,
}

impl Bounds {
    /// A single-value range `[0, 0]`, used before a counter is configured.
    pub const ZERO: Self = Self { start: 0, end: 0 };

    /// Create bounds, rejecting `start > end`.
    pub const fn new(start: i32, end: i32) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvertedBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound (inclusive).
    pub const fn start(self) -> i32 {
        self.start
    }

    /// Upper bound (inclusive).
    pub const fn end(self) -> i32 {
        self.end
    }

    /// Whether `value` lies within `[start, end]`.
    pub const fn contains(self, value: i32) -> bool {
        value >= self.start && value <= self.end
    }

    /// Number of values in the range, `end - start + 1`.
    pub const fn count(self) -> u64 {
        (self.end as i64 - self.start as i64) as u64 + 1
    }

    /// Offset of `value` from `start`, for indexing into a label table.
    pub(crate) fn offset(self, value: i32) -> usize {
        debug_assert!(self.contains(value), "offset of out-of-range value");
        value.abs_diff(self.start) as usize
    }

    /// Apply a relative step, wrapping or clamping at the bounds.
    ///
    /// Overflow past `i32` limits counts as stepping past the matching bound.
    pub(crate) fn step(self, current: i32, delta: i32, circular: bool) -> i32 {
        let past_end = if circular { self.start } else { self.end };
        let past_start = if circular { self.end } else { self.start };
        match current.checked_add(delta) {
            Some(c) if c > self.end => past_end,
            Some(c) if c < self.start => past_start,
            Some(c) => c,
            None if delta > 0 => past_end,
            None => past_start,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A value transition reported to listeners.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Change {
    /// Value before the transition.
    pub previous: i32,
    /// Value after the transition.
    pub current: i32,
}

impl Change {
    /// Build a change, or `None` when the values are equal.
    pub(crate) fn between(previous: i32, current: i32) -> Option<Self> {
        (previous != current).then_some(Self { previous, current })
    }
}

/// Which half of a [`LinkedRangeCounter`](crate::range::LinkedRangeCounter) a value belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The lower counter.
    Min,
    /// The upper counter.
    Max,
}

impl Side {
    /// The opposite side.
    pub const fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

/// A change on one side of a linked range.
///
/// Produced by every mutating [`LinkedRangeCounter`](crate::range::LinkedRangeCounter)
/// operation, in the order the listener observed them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RangeEvent {
    /// Side whose value changed.
    pub side: Side,
    /// The transition on that side.
    pub change: Change,
}

/// Direction of a step button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Increment by one.
    Up,
    /// Decrement by one.
    Down,
}

impl Direction {
    /// Signed unit step for this direction.
    pub const fn step(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

bitflags::bitflags! {
    /// Counter behavior flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CounterFlags: u8 {
        /// Stepping past a bound re-enters at the opposite bound.
        const CIRCULAR = 0b0000_0001;
        /// Host gestures (clicks, long presses, blur commits) are honored.
        const ENABLED  = 0b0000_0010;
    }
}

impl Default for CounterFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Kind of text input a host should offer for a counter's field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InputKind {
    /// Digits only.
    Numeric,
    /// Free text, matched against display labels.
    Text,
}

/// Identifies one repeat session.
///
/// Tokens are never reused by a counter, so a tick carrying a token from a
/// stopped session is recognized as stale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepeatToken(pub(crate) u64);

/// A request for the host to call back after `delay`.
///
/// Returned when a repeat session starts or advances. The host posts a timer
/// and, when it fires, passes `token` to
/// [`BoundedCounter::repeat_tick`](crate::counter::BoundedCounter::repeat_tick).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepeatRequest {
    /// Session the callback belongs to.
    pub token: RepeatToken,
    /// Delay before the next step.
    pub delay: Duration,
}

/// Formats a value for display when no labels are set.
pub type Formatter = Rc<dyn Fn(i32) -> String>;
