// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for counter configuration and absolute assignment.

use thiserror::Error;

/// Invalid static configuration of a counter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The range start is greater than its end.
    #[error("range start {start} is greater than range end {end}")]
    InvertedBounds {
        /// Requested lower bound.
        start: i32,
        /// Requested upper bound.
        end: i32,
    },
    /// The label table does not have one entry per value.
    #[error("expected {expected} labels for the range, got {actual}")]
    LabelCount {
        /// Number of values in the range.
        expected: u64,
        /// Number of labels supplied.
        actual: usize,
    },
}

/// An absolute assignment outside the counter's bounds.
///
/// Relative stepping never produces this; it clamps or wraps instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("value {value} is outside the range [{start}, {end}]")]
pub struct RangeError {
    /// Rejected value.
    pub value: i32,
    /// Lower bound at the time of the call.
    pub start: i32,
    /// Upper bound at the time of the call.
    pub end: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_values() {
        let e = ConfigError::InvertedBounds { start: 3, end: 1 };
        assert_eq!(e.to_string(), "range start 3 is greater than range end 1");
        let e = RangeError {
            value: 12,
            start: 0,
            end: 11,
        };
        assert_eq!(e.to_string(), "value 12 is outside the range [0, 11]");
    }
}
