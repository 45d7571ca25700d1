// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static counter configuration.
//!
//! [`CounterConfig`] gathers everything a host usually knows up front: the
//! range, optional display labels, wrap policy, enabled state, and repeat
//! speed. Validate it once with [`CounterConfig::validate`] or hand it to
//! [`BoundedCounter::from_config`](crate::counter::BoundedCounter::from_config).
//!
//! ```
//! use understory_stepper::config::CounterConfig;
//!
//! let months = CounterConfig::new(0, 11)
//!     .with_labels(["Jan", "Feb", "Mar", "Apr", "May", "Jun",
//!                   "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"])
//!     .circular(true);
//! assert!(months.validate().is_ok());
//!
//! let broken = CounterConfig::new(0, 11).with_labels(["Jan"]);
//! assert!(broken.validate().is_err());
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::time::Duration;

use crate::error::ConfigError;
use crate::types::{Bounds, CounterFlags};

/// Delay between automatic steps of a repeat session.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(200);

/// Configuration for a counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    /// Lower bound (inclusive).
    pub start: i32,
    /// Upper bound (inclusive).
    pub end: i32,
    /// Display labels, one per value from `start` to `end`.
    pub labels: Option<Rc<[String]>>,
    /// Wrap at the bounds instead of clamping.
    pub circular: bool,
    /// Honor host gestures.
    pub enabled: bool,
    /// Delay between automatic steps while a repeat session is active.
    pub repeat_interval: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            labels: None,
            circular: false,
            enabled: true,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
        }
    }
}

impl CounterConfig {
    /// Configuration for the range `[start, end]` with default policies.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Attach display labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the wrap policy.
    pub fn circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Set the enabled state.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the repeat interval.
    pub fn repeat_interval(mut self, interval: Duration) -> Self {
        self.repeat_interval = interval;
        self
    }

    /// Check the bounds and label count, returning the validated bounds.
    pub fn validate(&self) -> Result<Bounds, ConfigError> {
        let bounds = Bounds::new(self.start, self.end)?;
        if let Some(labels) = &self.labels {
            check_labels(bounds, labels)?;
        }
        Ok(bounds)
    }

    pub(crate) fn flags(&self) -> CounterFlags {
        let mut flags = CounterFlags::empty();
        flags.set(CounterFlags::CIRCULAR, self.circular);
        flags.set(CounterFlags::ENABLED, self.enabled);
        flags
    }
}

/// Require exactly one label per value in `bounds`.
pub(crate) fn check_labels(bounds: Bounds, labels: &[String]) -> Result<(), ConfigError> {
    let expected = bounds.count();
    if u64::try_from(labels.len()).ok() != Some(expected) {
        return Err(ConfigError::LabelCount {
            expected,
            actual: labels.len(),
        });
    }
    Ok(())
}
