// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text entry: resolving typed text to values and filtering keystrokes.
//!
//! ## Overview
//!
//! A stepper's text field is edited freely by the host toolkit. Two pure
//! helpers keep the edits meaningful:
//!
//! - [`filter_text`] decides whether a prospective field content is allowed
//!   while the user types. Hosts apply it per edit, typically through
//!   [`apply_edit`] to splice the edit into the current content first.
//! - [`resolve_text`] turns a committed field content into a value. Labels are
//!   matched by case-insensitive prefix, in order; plain integers are accepted
//!   as a fallback. Text that resolves to nothing falls back to `start`.
//!
//! ```
//! use understory_stepper::text::{resolve_text, Resolution};
//! use understory_stepper::types::Bounds;
//!
//! let labels: Vec<String> = ["Jan", "Feb", "Mar"].map(String::from).into();
//! let b = Bounds::new(1, 3).unwrap();
//! assert_eq!(resolve_text("fe", b, Some(&labels[..])), Resolution::Label(2));
//! assert_eq!(resolve_text("3", b, Some(&labels[..])), Resolution::Number(3));
//! assert_eq!(resolve_text("xyz", b, Some(&labels[..])), Resolution::Fallback(1));
//! ```

use alloc::string::String;
use core::ops::Range;

use crate::types::{Bounds, Change};

/// How a piece of text was turned into a candidate value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Resolution {
    /// Matched the label at `value - start`.
    Label(i32),
    /// Parsed as a decimal integer.
    Number(i32),
    /// Nothing matched; the range start is used instead.
    Fallback(i32),
}

impl Resolution {
    /// The candidate value regardless of how it was found.
    pub const fn value(self) -> i32 {
        match self {
            Self::Label(v) | Self::Number(v) | Self::Fallback(v) => v,
        }
    }
}

/// Resolve `text` to a candidate value.
///
/// With labels, the first label that starts with `text` (ignoring case) wins;
/// otherwise the text is parsed as an integer. Unparseable text resolves to
/// [`Resolution::Fallback`] carrying `bounds.start()`.
///
/// The result is not range checked: a typed number may lie outside `bounds`.
pub fn resolve_text(text: &str, bounds: Bounds, labels: Option<&[String]>) -> Resolution {
    if let Some(labels) = labels {
        let needle = text.to_lowercase();
        if let Some(i) = labels
            .iter()
            .position(|l| l.to_lowercase().starts_with(&needle))
        {
            // Label tables are validated to one entry per value, so the index fits.
            let offset = i32::try_from(i).unwrap_or(i32::MAX);
            return Resolution::Label(bounds.start().saturating_add(offset));
        }
    }
    match text.parse::<i32>() {
        Ok(v) => Resolution::Number(v),
        Err(_) => Resolution::Fallback(bounds.start()),
    }
}

/// Decide whether `candidate` is an acceptable field content while typing.
///
/// - With labels: accept only a case-insensitive prefix of some label.
/// - Without labels: accept only ASCII digits whose value does not exceed
///   `bounds.end()`. Values below `start` are accepted so the user can delete
///   and retype. Digit strings too large for `i32` are rejected.
///
/// The empty string is always accepted.
pub fn filter_text(candidate: &str, bounds: Bounds, labels: Option<&[String]>) -> bool {
    if candidate.is_empty() {
        return true;
    }
    if let Some(labels) = labels {
        let needle = candidate.to_lowercase();
        return labels
            .iter()
            .any(|l| l.to_lowercase().starts_with(&needle));
    }
    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match candidate.parse::<i32>() {
        Ok(v) => v <= bounds.end(),
        Err(_) => false,
    }
}

/// A single edit of a text field: replace `range` (byte offsets) with `insert`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextEdit<'a> {
    /// Byte range of the current content being replaced.
    pub range: Range<usize>,
    /// Text inserted in its place.
    pub insert: &'a str,
}

impl<'a> TextEdit<'a> {
    /// Insert `text` at byte offset `at`.
    pub fn insert(at: usize, text: &'a str) -> Self {
        Self {
            range: at..at,
            insert: text,
        }
    }

    /// Delete the given byte range.
    pub fn delete(range: Range<usize>) -> Self {
        Self { range, insert: "" }
    }
}

/// Splice `edit` into `field`, returning the prospective content.
///
/// Returns `None` when the range is inverted, out of bounds, or not on a
/// character boundary.
pub fn apply_edit(field: &str, edit: &TextEdit<'_>) -> Option<String> {
    if edit.range.start > edit.range.end {
        return None;
    }
    let head = field.get(..edit.range.start)?;
    let tail = field.get(edit.range.end..)?;
    let mut out = String::with_capacity(head.len() + edit.insert.len() + tail.len());
    out.push_str(head);
    out.push_str(edit.insert);
    out.push_str(tail);
    Some(out)
}

/// Result of committing field text to a counter.
///
/// Every outcome asks the host to redraw the field from the counter's
/// authoritative [`display_text`](crate::counter::BoundedCounter::display_text).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CommitOutcome {
    /// The field was empty; the current value is kept.
    Empty,
    /// The text resolved to the current value.
    Unchanged,
    /// The text resolved to a new value.
    Changed(Change),
    /// The text resolved outside the bounds and was ignored.
    OutOfRange(i32),
}

impl CommitOutcome {
    /// The committed change, if any.
    pub const fn change(self) -> Option<Change> {
        match self {
            Self::Changed(c) => Some(c),
            _ => None,
        }
    }
}
