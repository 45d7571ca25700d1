// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step buttons: map host button gestures onto counter operations.
//!
//! ## Gestures
//!
//! - Click: commit any pending field text, then step once in the button's
//!   direction. The host should move focus to the text field.
//! - Long press: start a repeat session in the button's direction.
//! - Release: end the repeat session. Hosts send this for pointer up, pointer
//!   cancel, and key-up of a confirm key (Enter or D-pad center).
//!
//! Clicks and long presses are ignored while the target is disabled; releases
//! always stop a running session.
//!
//! ```
//! use understory_stepper::counter::BoundedCounter;
//! use understory_stepper::gesture::{Gesture, StepButton};
//!
//! let mut c = BoundedCounter::new();
//! c.set_range(0, 9).unwrap();
//!
//! let up = StepButton::up();
//! up.handle(&mut c, Gesture::Click, Some("4"));
//! assert_eq!(c.current(), 5);
//!
//! let held = up.handle(&mut c, Gesture::LongPress, None);
//! assert!(held.repeat.is_some());
//! up.handle(&mut c, Gesture::Release, None);
//! assert!(!c.is_repeating());
//! ```

use crate::counter::BoundedCounter;
use crate::range::LinkedRangeCounter;
use crate::types::{Direction, RepeatRequest, Side};

/// A button gesture reported by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Gesture {
    /// Short press and release.
    Click,
    /// Press held past the host's long-press threshold.
    LongPress,
    /// Press ended or was canceled.
    Release,
}

/// What the host should do after a gesture.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ButtonResponse {
    /// Schedule a repeat tick for this request.
    pub repeat: Option<RepeatRequest>,
    /// Move input focus to the counter's text field.
    pub focus_field: bool,
}

/// Something a step button can drive.
///
/// Implemented by [`BoundedCounter`] and by [`RangeSide`], one side of a
/// [`LinkedRangeCounter`].
pub trait StepTarget {
    /// Whether gestures should be honored.
    fn is_enabled(&self) -> bool;
    /// Commit pending field text.
    fn commit(&mut self, text: &str);
    /// Step by `delta`.
    fn step(&mut self, delta: i32);
    /// Start a repeat session; see [`BoundedCounter::start_repeat`].
    fn start_hold(&mut self, step: i32, pending: Option<&str>) -> Option<RepeatRequest>;
    /// End the repeat session.
    fn end_hold(&mut self);
}

impl StepTarget for BoundedCounter {
    fn is_enabled(&self) -> bool {
        Self::is_enabled(self)
    }

    fn commit(&mut self, text: &str) {
        self.commit_text(text);
    }

    fn step(&mut self, delta: i32) {
        self.increment(delta);
    }

    fn start_hold(&mut self, step: i32, pending: Option<&str>) -> Option<RepeatRequest> {
        self.start_repeat(step, pending).map(|s| s.next)
    }

    fn end_hold(&mut self) {
        self.stop_repeat();
    }
}

/// One side of a [`LinkedRangeCounter`], borrowed for gesture handling.
///
/// Operations go through the range so the linkage holds.
#[derive(Debug)]
pub struct RangeSide<'a> {
    range: &'a mut LinkedRangeCounter,
    side: Side,
}

impl<'a> RangeSide<'a> {
    /// Borrow `side` of `range`.
    pub fn new(range: &'a mut LinkedRangeCounter, side: Side) -> Self {
        Self { range, side }
    }
}

impl StepTarget for RangeSide<'_> {
    fn is_enabled(&self) -> bool {
        self.range.counter(self.side).is_enabled()
    }

    fn commit(&mut self, text: &str) {
        self.range.commit_text(self.side, text);
    }

    fn step(&mut self, delta: i32) {
        self.range.increment(self.side, delta);
    }

    fn start_hold(&mut self, step: i32, pending: Option<&str>) -> Option<RepeatRequest> {
        self.range.start_repeat(self.side, step, pending).0
    }

    fn end_hold(&mut self) {
        self.range.stop_repeat(self.side);
    }
}

/// An increment or decrement button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StepButton {
    direction: Direction,
}

impl StepButton {
    /// A button stepping in `direction`.
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// The increment button.
    pub const fn up() -> Self {
        Self::new(Direction::Up)
    }

    /// The decrement button.
    pub const fn down() -> Self {
        Self::new(Direction::Down)
    }

    /// Direction this button steps in.
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Apply `gesture` to `target`.
    ///
    /// `pending` is the text field's current content, committed before
    /// stepping so a half-typed value is not lost.
    pub fn handle<T: StepTarget + ?Sized>(
        self,
        target: &mut T,
        gesture: Gesture,
        pending: Option<&str>,
    ) -> ButtonResponse {
        match gesture {
            Gesture::Release => {
                target.end_hold();
                ButtonResponse::default()
            }
            _ if !target.is_enabled() => ButtonResponse::default(),
            Gesture::Click => {
                if let Some(text) = pending {
                    target.commit(text);
                }
                target.step(self.direction.step());
                ButtonResponse {
                    repeat: None,
                    focus_field: true,
                }
            }
            Gesture::LongPress => ButtonResponse {
                repeat: target.start_hold(self.direction.step(), pending),
                focus_field: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranged(start: i32, end: i32) -> BoundedCounter {
        let mut c = BoundedCounter::new();
        c.set_range(start, end).unwrap();
        c
    }

    #[test]
    fn click_commits_then_steps() {
        let mut c = ranged(0, 9);
        let r = StepButton::down().handle(&mut c, Gesture::Click, Some("7"));
        assert_eq!(c.current(), 6);
        assert!(r.focus_field);
        assert!(r.repeat.is_none());
    }

    #[test]
    fn disabled_ignores_click_and_long_press() {
        let mut c = ranged(0, 9);
        c.set_enabled(false);
        let up = StepButton::up();
        assert_eq!(
            up.handle(&mut c, Gesture::Click, Some("5")),
            ButtonResponse::default()
        );
        assert_eq!(
            up.handle(&mut c, Gesture::LongPress, None),
            ButtonResponse::default()
        );
        assert_eq!(c.current(), 0);
        assert!(!c.is_repeating());
    }

    #[test]
    fn release_stops_even_when_disabled() {
        let mut c = ranged(0, 9);
        let up = StepButton::up();
        let r = up.handle(&mut c, Gesture::LongPress, None);
        let token = r.repeat.unwrap().token;
        c.set_enabled(false);
        up.handle(&mut c, Gesture::Release, None);
        assert!(!c.is_repeating());
        assert!(c.repeat_tick(token).is_none());
    }

    #[test]
    fn range_side_keeps_linkage() {
        let mut r = LinkedRangeCounter::new();
        r.set_range(0, 5).unwrap();
        r.set_max_current(1).unwrap();
        let up = StepButton::up();
        {
            let mut min = RangeSide::new(&mut r, Side::Min);
            up.handle(&mut min, Gesture::Click, None);
            up.handle(&mut min, Gesture::Click, None);
        }
        assert_eq!((r.min_current(), r.max_current()), (2, 2));

        let req = {
            let mut max = RangeSide::new(&mut r, Side::Max);
            StepButton::down().handle(&mut max, Gesture::LongPress, None)
        };
        assert_eq!((r.min_current(), r.max_current()), (1, 1));
        let (next, _) = r.repeat_tick(Side::Max, req.repeat.unwrap().token);
        assert!(next.is_some());
        assert_eq!((r.min_current(), r.max_current()), (0, 0));
    }
}
