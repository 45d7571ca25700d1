// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked range: two counters selecting a `[min, max]` interval.
//!
//! ## Linkage
//!
//! Both counters share the same bounds, labels, and formatter. While the range
//! is linked (the default), every operation keeps `min <= max`: when one side
//! moves past the other, the other side is pushed to the same value.
//!
//! The push is terminal. It is applied directly to the other counter and
//! reported, but it is not fed back into the linkage check, so a correction
//! never triggers a correction in return.
//!
//! ## Events
//!
//! Mutating operations return the [`RangeEvent`]s they produced and pass each
//! one to the change listener. The side the caller acted on comes first,
//! followed by the corrective push on the other side, if any.
//!
//! ```
//! use understory_stepper::range::LinkedRangeCounter;
//! use understory_stepper::types::Side;
//!
//! let mut r = LinkedRangeCounter::new();
//! r.set_range(0, 10).unwrap();
//! r.set_max_current(4).unwrap();
//!
//! let events = r.increment(Side::Min, 15);
//! assert_eq!((r.min_current(), r.max_current()), (10, 10));
//! assert_eq!(events.len(), 2);
//! assert_eq!(events[0].side, Side::Min);
//! assert_eq!(events[1].side, Side::Max);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use tracing::debug;

use crate::config::{CounterConfig, check_labels};
use crate::counter::BoundedCounter;
use crate::error::{ConfigError, RangeError};
use crate::text::CommitOutcome;
use crate::types::{Bounds, Change, Formatter, RangeEvent, RepeatRequest, RepeatToken, Side};

/// Listener invoked with `(side, previous, current)` after each change.
pub type RangeListener = Box<dyn FnMut(Side, i32, i32)>;

/// A pair of counters constrained to a shared range.
pub struct LinkedRangeCounter {
    min: BoundedCounter,
    max: BoundedCounter,
    linked: bool,
    listener: Option<RangeListener>,
}

impl core::fmt::Debug for LinkedRangeCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkedRangeCounter")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("linked", &self.linked)
            .finish_non_exhaustive()
    }
}

impl Default for LinkedRangeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedRangeCounter {
    /// Create a linked range over `[0, 0]`.
    pub fn new() -> Self {
        Self {
            min: BoundedCounter::new(),
            max: BoundedCounter::new(),
            linked: true,
            listener: None,
        }
    }

    /// Create a linked range from a configuration shared by both sides.
    ///
    /// `min` starts at `config.start` and `max` at `config.end`.
    pub fn from_config(config: &CounterConfig) -> Result<Self, ConfigError> {
        let mut range = Self {
            min: BoundedCounter::from_config(config)?,
            max: BoundedCounter::from_config(config)?,
            linked: true,
            listener: None,
        };
        range.max.assign(config.end);
        Ok(range)
    }

    /// Set the shared range and clear any labels.
    ///
    /// `min` resets to `start` and `max` to `end`. No change is reported.
    pub fn set_range(&mut self, start: i32, end: i32) -> Result<(), ConfigError> {
        let bounds = Bounds::new(start, end)?;
        self.configure(bounds, None);
        Ok(())
    }

    /// Set the shared range with one display label per value.
    ///
    /// `min` resets to `start` and `max` to `end`. No change is reported.
    pub fn set_range_with_labels<I, S>(
        &mut self,
        start: i32,
        end: i32,
        labels: I,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bounds = Bounds::new(start, end)?;
        let labels: Rc<[String]> = labels.into_iter().map(Into::into).collect();
        check_labels(bounds, &labels)?;
        self.configure(bounds, Some(labels));
        Ok(())
    }

    fn configure(&mut self, bounds: Bounds, labels: Option<Rc<[String]>>) {
        self.min.configure(bounds, labels.clone());
        self.max.configure(bounds, labels);
        self.max.assign(bounds.end());
    }

    /// Set whether `min <= max` is enforced.
    ///
    /// Enabling does not repair a range that is already crossed; the next
    /// change does.
    pub fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
    }

    /// Whether `min <= max` is enforced.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Set the formatter for both sides.
    pub fn set_formatter(&mut self, formatter: Option<Formatter>) {
        self.min.set_formatter(formatter.clone());
        self.max.set_formatter(formatter);
    }

    /// Set the wrap policy for both sides.
    pub fn set_circular(&mut self, circular: bool) {
        self.min.set_circular(circular);
        self.max.set_circular(circular);
    }

    /// Set the enabled state of both sides.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.min.set_enabled(enabled);
        self.max.set_enabled(enabled);
    }

    /// Set the repeat interval for both sides.
    pub fn set_repeat_interval(&mut self, interval: Duration) {
        self.min.set_repeat_interval(interval);
        self.max.set_repeat_interval(interval);
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_change_listener(&mut self, listener: impl FnMut(Side, i32, i32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    /// Read access to one side.
    pub fn counter(&self, side: Side) -> &BoundedCounter {
        match side {
            Side::Min => &self.min,
            Side::Max => &self.max,
        }
    }

    fn counter_mut(&mut self, side: Side) -> &mut BoundedCounter {
        match side {
            Side::Min => &mut self.min,
            Side::Max => &mut self.max,
        }
    }

    /// Current lower value.
    pub fn min_current(&self) -> i32 {
        self.min.current()
    }

    /// Current upper value.
    pub fn max_current(&self) -> i32 {
        self.max.current()
    }

    /// Shared bounds.
    pub fn bounds(&self) -> Bounds {
        self.min.bounds()
    }

    /// Text to show for one side.
    pub fn display_text(&self, side: Side) -> String {
        self.counter(side).display_text()
    }

    /// Assign the lower value directly.
    pub fn set_min_current(&mut self, value: i32) -> Result<Vec<RangeEvent>, RangeError> {
        self.set_current(Side::Min, value)
    }

    /// Assign the upper value directly.
    pub fn set_max_current(&mut self, value: i32) -> Result<Vec<RangeEvent>, RangeError> {
        self.set_current(Side::Max, value)
    }

    /// Assign one side directly, failing when `value` is out of bounds.
    pub fn set_current(&mut self, side: Side, value: i32) -> Result<Vec<RangeEvent>, RangeError> {
        let change = self.counter_mut(side).set_current(value)?;
        Ok(self.propagate(side, change))
    }

    /// Step one side by `delta`, clamping or wrapping at the bounds.
    pub fn increment(&mut self, side: Side, delta: i32) -> Vec<RangeEvent> {
        let change = self.counter_mut(side).increment(delta);
        self.propagate(side, change)
    }

    /// Commit field text on one side.
    pub fn commit_text(&mut self, side: Side, text: &str) -> (CommitOutcome, Vec<RangeEvent>) {
        let outcome = self.counter_mut(side).commit_text(text);
        (outcome, self.propagate(side, outcome.change()))
    }

    /// Commit field text on one side when it loses focus.
    ///
    /// Returns `None` without committing when the side is disabled.
    pub fn focus_lost(&mut self, side: Side, text: &str) -> Option<(CommitOutcome, Vec<RangeEvent>)> {
        self.counter(side)
            .is_enabled()
            .then(|| self.commit_text(side, text))
    }

    /// Start a repeat session on one side.
    ///
    /// Commits `pending` text first, then steps once. See
    /// [`BoundedCounter::start_repeat`].
    pub fn start_repeat(
        &mut self,
        side: Side,
        step: i32,
        pending: Option<&str>,
    ) -> (Option<RepeatRequest>, Vec<RangeEvent>) {
        let mut events = match pending {
            Some(text) => self.commit_text(side, text).1,
            None => Vec::new(),
        };
        let Some(first) = self.counter_mut(side).begin_repeat(step) else {
            return (None, events);
        };
        events.extend(self.propagate(side, first.change));
        (Some(first.next), events)
    }

    /// Advance the repeat session on one side.
    ///
    /// Returns no request for a stale token.
    pub fn repeat_tick(
        &mut self,
        side: Side,
        token: RepeatToken,
    ) -> (Option<RepeatRequest>, Vec<RangeEvent>) {
        match self.counter_mut(side).repeat_tick(token) {
            Some(step) => (Some(step.next), self.propagate(side, step.change)),
            None => (None, Vec::new()),
        }
    }

    /// End the repeat session on one side. Returns whether one was live.
    pub fn stop_repeat(&mut self, side: Side) -> bool {
        self.counter_mut(side).stop_repeat()
    }

    /// Enforce the linkage after `side` changed, then notify.
    fn propagate(&mut self, side: Side, change: Option<Change>) -> Vec<RangeEvent> {
        let Some(change) = change else {
            return Vec::new();
        };
        let mut events = Vec::with_capacity(2);
        events.push(RangeEvent { side, change });

        if self.linked {
            let next = change.current;
            let other = self.counter_mut(side.other());
            let crossed = match side {
                Side::Min => other.current() < next,
                Side::Max => other.current() > next,
            };
            // Both sides share bounds, so `next` is valid for the other side.
            if crossed && let Some(push) = other.assign(next) {
                debug!(
                    side = ?side.other(),
                    from = push.previous,
                    to = push.current,
                    "linked range corrected"
                );
                events.push(RangeEvent {
                    side: side.other(),
                    change: push,
                });
            }
        }

        if let Some(listener) = self.listener.as_mut() {
            for e in &events {
                listener(e.side, e.change.previous, e.change.current);
            }
        }
        events
    }
}
