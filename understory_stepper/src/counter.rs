// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded counter: an integer constrained to `[start, end]`.
//!
//! ## Stepping
//!
//! - [`BoundedCounter::increment`] clamps at the bounds, or wraps to the
//!   opposite bound when the counter is circular. It never fails.
//! - [`BoundedCounter::set_current`] is an absolute assignment and rejects
//!   out-of-range values with [`RangeError`] instead of clamping.
//! - [`BoundedCounter::commit_text`] resolves field text (see [`crate::text`]).
//!
//! Each operation that changes the value calls the change listener with
//! `(previous, current)` and returns the [`Change`]. Operations that leave the
//! value as it was are silent.
//!
//! ## Repeat sessions
//!
//! Holding a step button steps repeatedly. The counter owns no timer; instead
//! [`BoundedCounter::start_repeat`] steps once and returns a [`RepeatRequest`].
//! The host schedules a callback after `request.delay` and calls
//! [`BoundedCounter::repeat_tick`] with the token, which steps again and
//! returns the next request. A tick whose token is no longer live (after
//! [`BoundedCounter::stop_repeat`], a new session, or a range change) does
//! nothing and returns `None`, ending the chain.
//!
//! ```
//! use understory_stepper::counter::BoundedCounter;
//!
//! let mut c = BoundedCounter::new();
//! c.set_range(0, 59).unwrap();
//!
//! let first = c.start_repeat(1, None).unwrap();
//! assert_eq!(c.current(), 1);
//! let second = c.repeat_tick(first.next.token).unwrap();
//! assert_eq!(c.current(), 2);
//!
//! c.stop_repeat();
//! assert!(c.repeat_tick(second.next.token).is_none());
//! assert_eq!(c.current(), 2);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::time::Duration;

use tracing::{debug, trace};

use crate::config::{CounterConfig, DEFAULT_REPEAT_INTERVAL, check_labels};
use crate::error::{ConfigError, RangeError};
use crate::text::{self, CommitOutcome, Resolution, TextEdit};
use crate::types::{
    Bounds, Change, CounterFlags, Formatter, InputKind, RepeatRequest, RepeatToken,
};

/// Listener invoked with `(previous, current)` after each change.
pub type ChangeListener = Box<dyn FnMut(i32, i32)>;

/// One step of a repeat session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepeatStep {
    /// Change produced by this step, if the value moved.
    pub change: Option<Change>,
    /// When to call [`BoundedCounter::repeat_tick`] next.
    pub next: RepeatRequest,
}

#[derive(Copy, Clone, Debug)]
struct RepeatSession {
    token: RepeatToken,
    step: i32,
}

/// An integer value bounded to an inclusive range.
///
/// ## Usage
///
/// - Construct with [`BoundedCounter::new`] (range `[0, 0]`) and configure
///   with [`BoundedCounter::set_range`], or build from a [`CounterConfig`].
/// - Register a listener with [`BoundedCounter::set_change_listener`]; setting
///   a new one replaces the previous.
/// - Drive it from host input: buttons step, the text field commits.
pub struct BoundedCounter {
    bounds: Bounds,
    current: i32,
    labels: Option<Rc<[String]>>,
    formatter: Option<Formatter>,
    flags: CounterFlags,
    repeat_interval: Duration,
    repeat: Option<RepeatSession>,
    next_token: u64,
    listener: Option<ChangeListener>,
}

impl core::fmt::Debug for BoundedCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundedCounter")
            .field("bounds", &self.bounds)
            .field("current", &self.current)
            .field("labels", &self.labels)
            .field("flags", &self.flags)
            .field("repeat_interval", &self.repeat_interval)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedCounter {
    /// Create an unconfigured counter over `[0, 0]`.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::ZERO,
            current: 0,
            labels: None,
            formatter: None,
            flags: CounterFlags::default(),
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            repeat: None,
            next_token: 0,
            listener: None,
        }
    }

    /// Create a counter from a validated configuration.
    ///
    /// The value starts at `config.start`.
    pub fn from_config(config: &CounterConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate()?;
        let mut counter = Self::new();
        counter.configure(bounds, config.labels.clone());
        counter.flags = config.flags();
        counter.repeat_interval = config.repeat_interval;
        Ok(counter)
    }

    /// Set the range `[start, end]` and clear any labels.
    ///
    /// Resets the value to `start` and ends any repeat session. No change is
    /// reported.
    pub fn set_range(&mut self, start: i32, end: i32) -> Result<(), ConfigError> {
        let bounds = Bounds::new(start, end)?;
        self.configure(bounds, None);
        Ok(())
    }

    /// Set the range `[start, end]` with one display label per value.
    ///
    /// Resets the value to `start` and ends any repeat session. No change is
    /// reported.
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

    /// Apply already validated bounds and labels.
    pub(crate) fn configure(&mut self, bounds: Bounds, labels: Option<Rc<[String]>>) {
        debug!(
            start = bounds.start(),
            end = bounds.end(),
            labeled = labels.is_some(),
            "counter range set"
        );
        self.bounds = bounds;
        self.labels = labels;
        self.current = bounds.start();
        self.repeat = None;
    }

    /// Set the formatter used by [`BoundedCounter::display_text`] when no labels are set.
    ///
    /// `None` restores plain decimal formatting.
    pub fn set_formatter(&mut self, formatter: Option<Formatter>) {
        self.formatter = formatter;
    }

    /// Set whether stepping wraps at the bounds.
    pub fn set_circular(&mut self, circular: bool) {
        self.flags.set(CounterFlags::CIRCULAR, circular);
    }

    /// Set whether host gestures are honored.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(CounterFlags::ENABLED, enabled);
    }

    /// Set the delay between automatic steps of a repeat session.
    ///
    /// Takes effect from the next request issued.
    pub fn set_repeat_interval(&mut self, interval: Duration) {
        self.repeat_interval = interval;
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_change_listener(&mut self, listener: impl FnMut(i32, i32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    /// Current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Current bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Display labels, if set.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Behavior flags.
    pub fn flags(&self) -> CounterFlags {
        self.flags
    }

    /// Whether stepping wraps at the bounds.
    pub fn is_circular(&self) -> bool {
        self.flags.contains(CounterFlags::CIRCULAR)
    }

    /// Whether host gestures are honored.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(CounterFlags::ENABLED)
    }

    /// Delay between automatic steps.
    pub fn repeat_interval(&self) -> Duration {
        self.repeat_interval
    }

    /// Whether a repeat session is live.
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_some()
    }

    /// The kind of text input the host should offer.
    pub fn input_kind(&self) -> InputKind {
        if self.labels.is_some() {
            InputKind::Text
        } else {
            InputKind::Numeric
        }
    }

    /// Text to show for the current value.
    ///
    /// Uses the label for the value when labels are set, then the formatter,
    /// then plain decimal.
    pub fn display_text(&self) -> String {
        if let Some(labels) = &self.labels
            && let Some(label) = labels.get(self.bounds.offset(self.current))
        {
            return label.clone();
        }
        match &self.formatter {
            Some(fmt) => fmt(self.current),
            None => self.current.to_string(),
        }
    }

    /// Assign `value` directly.
    ///
    /// Fails without touching state when `value` is outside the bounds.
    pub fn set_current(&mut self, value: i32) -> Result<Option<Change>, RangeError> {
        if !self.bounds.contains(value) {
            return Err(RangeError {
                value,
                start: self.bounds.start(),
                end: self.bounds.end(),
            });
        }
        Ok(self.apply(value))
    }

    /// Step by `delta`, clamping or wrapping at the bounds.
    pub fn increment(&mut self, delta: i32) -> Option<Change> {
        let next = self.bounds.step(self.current, delta, self.is_circular());
        if self.is_circular() && self.current.checked_add(delta) != Some(next) {
            debug!(from = self.current, delta, to = next, "counter wrapped");
        }
        self.apply(next)
    }

    /// Resolve field text and commit it.
    ///
    /// Empty text keeps the current value. Text that matches nothing resolves
    /// to `start`. A resolved value outside the bounds is ignored.
    pub fn commit_text(&mut self, text: &str) -> CommitOutcome {
        if text.is_empty() {
            return CommitOutcome::Empty;
        }
        let resolved = text::resolve_text(text, self.bounds, self.labels());
        if let Resolution::Fallback(v) = resolved {
            debug!(text, fallback = v, "unrecognized text, using range start");
        }
        let value = resolved.value();
        if !self.bounds.contains(value) {
            debug!(value, "committed text out of range, ignored");
            return CommitOutcome::OutOfRange(value);
        }
        match self.apply(value) {
            Some(change) => CommitOutcome::Changed(change),
            None => CommitOutcome::Unchanged,
        }
    }

    /// Commit text when the field loses focus.
    ///
    /// Returns `None` without committing when the counter is disabled.
    pub fn focus_lost(&mut self, text: &str) -> Option<CommitOutcome> {
        self.is_enabled().then(|| self.commit_text(text))
    }

    /// Whether `candidate` is an acceptable field content while typing.
    ///
    /// See [`text::filter_text`].
    pub fn accepts(&self, candidate: &str) -> bool {
        text::filter_text(candidate, self.bounds, self.labels())
    }

    /// Splice `edit` into `field` and return the result if acceptable.
    ///
    /// `None` means the host should revert the edit.
    pub fn filter_edit(&self, field: &str, edit: &TextEdit<'_>) -> Option<String> {
        let candidate = text::apply_edit(field, edit)?;
        self.accepts(&candidate).then_some(candidate)
    }

    /// Start a repeat session stepping by `step`.
    ///
    /// Commits `pending` field text first, then steps once immediately. Any
    /// previous session is replaced. A zero `step` only ends the current
    /// session and returns `None`.
    pub fn start_repeat(&mut self, step: i32, pending: Option<&str>) -> Option<RepeatStep> {
        if let Some(text) = pending {
            self.commit_text(text);
        }
        self.begin_repeat(step)
    }

    pub(crate) fn begin_repeat(&mut self, step: i32) -> Option<RepeatStep> {
        if step == 0 {
            self.stop_repeat();
            return None;
        }
        let token = RepeatToken(self.next_token);
        self.next_token += 1;
        self.repeat = Some(RepeatSession { token, step });
        debug!(step, token = token.0, "repeat session started");
        Some(RepeatStep {
            change: self.increment(step),
            next: self.request(token),
        })
    }

    /// Advance the repeat session identified by `token`.
    ///
    /// Returns `None` for a stale token; the host should not reschedule.
    pub fn repeat_tick(&mut self, token: RepeatToken) -> Option<RepeatStep> {
        let session = match self.repeat {
            Some(s) if s.token == token => s,
            _ => {
                trace!(token = token.0, "stale repeat tick ignored");
                return None;
            }
        };
        Some(RepeatStep {
            change: self.increment(session.step),
            next: self.request(token),
        })
    }

    /// End the repeat session, if any. Returns whether one was live.
    pub fn stop_repeat(&mut self) -> bool {
        match self.repeat.take() {
            Some(s) => {
                debug!(token = s.token.0, "repeat session stopped");
                true
            }
            None => false,
        }
    }

    fn request(&self, token: RepeatToken) -> RepeatRequest {
        RepeatRequest {
            token,
            delay: self.repeat_interval,
        }
    }

    /// Set an in-range value, notifying the listener on change.
    fn apply(&mut self, value: i32) -> Option<Change> {
        let change = self.assign(value)?;
        if let Some(listener) = self.listener.as_mut() {
            listener(change.previous, change.current);
        }
        Some(change)
    }

    /// Set an in-range value without notifying.
    pub(crate) fn assign(&mut self, value: i32) -> Option<Change> {
        debug_assert!(self.bounds.contains(value), "assigned value out of range");
        let change = Change::between(self.current, value)?;
        self.current = value;
        trace!(previous = change.previous, current = change.current, "counter changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recorded(c: &mut BoundedCounter) -> Rc<RefCell<Vec<(i32, i32)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        c.set_change_listener(move |prev, next| sink.borrow_mut().push((prev, next)));
        log
    }

    fn ranged(start: i32, end: i32) -> BoundedCounter {
        let mut c = BoundedCounter::new();
        c.set_range(start, end).unwrap();
        c
    }

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    #[test]
    fn set_range_resets_to_start_silently() {
        let mut c = ranged(0, 10);
        let log = recorded(&mut c);
        c.set_current(7).unwrap();
        c.set_range(-3, 3).unwrap();
        assert_eq!(c.current(), -3);
        assert_eq!(*log.borrow(), [(0, 7)]);
    }

    #[test]
    fn set_range_rejects_bad_config() {
        let mut c = ranged(0, 10);
        c.set_current(4).unwrap();
        assert_eq!(
            c.set_range(3, 1),
            Err(ConfigError::InvertedBounds { start: 3, end: 1 })
        );
        assert_eq!(
            c.set_range_with_labels(0, 11, ["Jan"]),
            Err(ConfigError::LabelCount {
                expected: 12,
                actual: 1
            })
        );
        // Failed configuration leaves state untouched.
        assert_eq!(c.current(), 4);
        assert_eq!(c.bounds(), Bounds::new(0, 10).unwrap());
    }

    #[test]
    fn set_current_validates() {
        let mut c = ranged(0, 59);
        let log = recorded(&mut c);
        assert_eq!(
            c.set_current(42),
            Ok(Some(Change {
                previous: 0,
                current: 42
            }))
        );
        assert_eq!(
            c.set_current(60),
            Err(RangeError {
                value: 60,
                start: 0,
                end: 59
            })
        );
        assert!(c.set_current(-1).is_err());
        assert_eq!(c.current(), 42);
        // Same value: no event.
        assert_eq!(c.set_current(42), Ok(None));
        assert_eq!(*log.borrow(), [(0, 42)]);
    }

    #[test]
    fn decrement_at_start_clamps_silently() {
        let mut c = ranged(0, 59);
        let log = recorded(&mut c);
        assert_eq!(c.increment(-1), None);
        assert_eq!(c.current(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn decrement_at_start_wraps_when_circular() {
        let mut c = ranged(0, 59);
        c.set_circular(true);
        let log = recorded(&mut c);
        assert_eq!(
            c.increment(-1),
            Some(Change {
                previous: 0,
                current: 59
            })
        );
        assert_eq!(*log.borrow(), [(0, 59)]);
    }

    #[test]
    fn full_lap_returns_to_start() {
        let mut c = ranged(3, 9);
        c.set_circular(true);
        let lap = i32::try_from(c.bounds().count()).unwrap();
        assert_eq!(c.increment(lap), None);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn repeated_increment_converges_to_end() {
        let mut c = ranged(-2, 4);
        for _ in 0..20 {
            c.increment(1);
            assert!(c.current() <= 4);
        }
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn zero_increment_never_fires() {
        let mut c = ranged(0, 5);
        c.set_circular(true);
        let log = recorded(&mut c);
        for v in 0..=5 {
            c.set_current(v).unwrap();
            log.borrow_mut().clear();
            assert_eq!(c.increment(0), None);
            assert!(log.borrow().is_empty());
        }
    }

    #[test]
    fn listener_is_replaced_not_queued() {
        let mut c = ranged(0, 5);
        let first = recorded(&mut c);
        let second = recorded(&mut c);
        c.increment(1);
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), [(0, 1)]);
        c.clear_change_listener();
        c.increment(1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn commit_round_trips_current() {
        let mut c = ranged(0, 100);
        c.set_current(37).unwrap();
        let log = recorded(&mut c);
        let shown = c.display_text();
        assert_eq!(c.commit_text(&shown), CommitOutcome::Unchanged);
        assert_eq!(c.current(), 37);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn commit_label_prefix() {
        let mut c = BoundedCounter::new();
        c.set_range_with_labels(0, 11, MONTHS).unwrap();
        let log = recorded(&mut c);
        assert_eq!(
            c.commit_text("oct"),
            CommitOutcome::Changed(Change {
                previous: 0,
                current: 9
            })
        );
        assert_eq!(c.display_text(), "Oct");
        assert_eq!(*log.borrow(), [(0, 9)]);
    }

    #[test]
    fn commit_empty_keeps_value() {
        let mut c = ranged(0, 9);
        c.set_current(5).unwrap();
        assert_eq!(c.commit_text(""), CommitOutcome::Empty);
        assert_eq!(c.current(), 5);
    }

    #[test]
    fn commit_garbage_falls_back_to_start() {
        let mut c = ranged(2, 9);
        c.set_current(5).unwrap();
        assert_eq!(
            c.commit_text("??"),
            CommitOutcome::Changed(Change {
                previous: 5,
                current: 2
            })
        );
    }

    #[test]
    fn commit_out_of_range_is_ignored() {
        let mut c = ranged(0, 9);
        let log = recorded(&mut c);
        assert_eq!(c.commit_text("12"), CommitOutcome::OutOfRange(12));
        assert_eq!(c.current(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn focus_lost_respects_enabled() {
        let mut c = ranged(0, 9);
        c.set_enabled(false);
        assert_eq!(c.focus_lost("4"), None);
        assert_eq!(c.current(), 0);
        c.set_enabled(true);
        assert_eq!(
            c.focus_lost("4"),
            Some(CommitOutcome::Changed(Change {
                previous: 0,
                current: 4
            }))
        );
    }

    #[test]
    fn display_prefers_labels_then_formatter() {
        let mut c = ranged(0, 9);
        c.set_current(7).unwrap();
        assert_eq!(c.display_text(), "7");
        c.set_formatter(Some(Rc::new(|v: i32| format!("{v:02}"))));
        assert_eq!(c.display_text(), "07");
        c.set_range_with_labels(0, 11, MONTHS).unwrap();
        assert_eq!(c.display_text(), "Jan");
        assert_eq!(c.input_kind(), InputKind::Text);
        c.set_range(0, 1).unwrap();
        assert_eq!(c.input_kind(), InputKind::Numeric);
    }

    #[test]
    fn filter_edit_splices_and_checks() {
        let c = ranged(0, 59);
        assert_eq!(c.filter_edit("5", &TextEdit::insert(1, "9")).as_deref(), Some("59"));
        assert_eq!(c.filter_edit("6", &TextEdit::insert(1, "0")), None);
        assert_eq!(c.filter_edit("59", &TextEdit::delete(0..1)).as_deref(), Some("9"));
        assert!(c.accepts(""));
    }

    #[test]
    fn from_config_applies_everything() {
        let config = CounterConfig::new(1, 12)
            .with_labels(MONTHS)
            .circular(true)
            .enabled(false)
            .repeat_interval(Duration::from_millis(50));
        let c = BoundedCounter::from_config(&config).unwrap();
        assert_eq!(c.current(), 1);
        assert!(c.is_circular());
        assert!(!c.is_enabled());
        assert_eq!(c.repeat_interval(), Duration::from_millis(50));
        assert_eq!(c.display_text(), "Jan");
        assert!(BoundedCounter::from_config(&CounterConfig::new(2, 1)).is_err());
    }

    #[test]
    fn repeat_steps_until_stopped() {
        let mut c = ranged(0, 3);
        let log = recorded(&mut c);
        let start = c.start_repeat(1, None).unwrap();
        assert_eq!(start.next.delay, DEFAULT_REPEAT_INTERVAL);
        let t = start.next.token;
        assert!(c.repeat_tick(t).is_some());
        assert!(c.repeat_tick(t).is_some());
        // At the end without wrap: ticks keep coming but change nothing.
        let idle = c.repeat_tick(t).unwrap();
        assert_eq!(idle.change, None);
        assert_eq!(c.current(), 3);
        assert!(c.stop_repeat());
        assert!(!c.stop_repeat());
        assert!(c.repeat_tick(t).is_none());
        assert_eq!(*log.borrow(), [(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn repeat_commits_pending_text_first() {
        let mut c = ranged(0, 20);
        let step = c.start_repeat(-1, Some("10")).unwrap();
        assert_eq!(c.current(), 9);
        assert_eq!(
            step.change,
            Some(Change {
                previous: 10,
                current: 9
            })
        );
    }

    #[test]
    fn new_session_invalidates_old_token() {
        let mut c = ranged(0, 20);
        let a = c.start_repeat(1, None).unwrap().next.token;
        let b = c.start_repeat(2, None).unwrap().next.token;
        assert_ne!(a, b);
        assert!(c.repeat_tick(a).is_none());
        assert!(c.repeat_tick(b).is_some());
        assert_eq!(c.current(), 5);
    }

    #[test]
    fn set_range_cancels_repeat() {
        let mut c = ranged(0, 20);
        let t = c.start_repeat(1, None).unwrap().next.token;
        c.set_range(0, 5).unwrap();
        assert!(!c.is_repeating());
        assert!(c.repeat_tick(t).is_none());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn zero_step_ends_session() {
        let mut c = ranged(0, 20);
        c.start_repeat(1, None).unwrap();
        assert!(c.start_repeat(0, None).is_none());
        assert!(!c.is_repeating());
    }

    #[test]
    fn interval_change_applies_to_next_request() {
        let mut c = ranged(0, 20);
        let t = c.start_repeat(1, None).unwrap().next.token;
        c.set_repeat_interval(Duration::from_millis(30));
        assert_eq!(
            c.repeat_tick(t).unwrap().next.delay,
            Duration::from_millis(30)
        );
    }
}
