use std::fmt::Display;
use std::ops::Range;

use crate::time_of_day::TimeOfDay;

// TimeSpan

/// Opening window within a single day.
///
/// Windows never wrap past midnight: when `close` is not after `open`, the
/// span is empty.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TimeSpan {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl TimeSpan {
    #[inline]
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    #[inline]
    pub fn range(&self) -> Range<TimeOfDay> {
        self.open..self.close
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close <= self.open
    }

    /// Check if `time` is in `open..close`.
    ///
    /// ```
    /// use reuse_hours_syntax::rules::time::TimeSpan;
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// let span = TimeSpan::new(TimeOfDay::new(10, 0).unwrap(), TimeOfDay::new(18, 0).unwrap());
    /// assert!(span.contains(TimeOfDay::new(10, 0).unwrap()));
    /// assert!(!span.contains(TimeOfDay::new(18, 0).unwrap()));
    /// ```
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.range().contains(&time)
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}
