use std::iter::Peekable;
use std::ops::Range;

use reuse_hours_syntax::TimeOfDay;

/// State of a location during a period of the day.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum DayState {
    Open,
    Closed,
}

/// A period of time in a schedule annotated with a state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeRange {
    /// Active period for this range
    pub range: Range<TimeOfDay>,
    /// State of the location while this period is active
    pub state: DayState,
}

impl TimeRange {
    /// Small helper to create a new range.
    pub fn new(range: Range<TimeOfDay>, state: DayState) -> Self {
        TimeRange { range, state }
    }
}

/// Opening windows of a location for a single day.
///
/// It can be turned into an iterator which will yield consecutive ranges of
/// different states, with no holes or overlapping.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule {
    /// Always keep a sequence of non-overlaping, increasing time ranges.
    pub(crate) inner: Vec<Range<TimeOfDay>>,
}

impl Schedule {
    /// Creates a new empty schedule, which represents an always closed day.
    ///
    /// ```
    /// use reuse_hours::schedule::Schedule;
    ///
    /// assert!(Schedule::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new schedule from a list of opening windows.
    ///
    /// Windows are clipped to `24:00`, then empty windows are dropped, which
    /// includes windows that would wrap past midnight.
    ///
    /// ```
    /// use reuse_hours::schedule::Schedule;
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// let sch1 = Schedule::from_ranges([
    ///     TimeOfDay::new(10, 0).unwrap()..TimeOfDay::new(14, 0).unwrap(),
    ///     TimeOfDay::new(12, 0).unwrap()..TimeOfDay::new(16, 0).unwrap(),
    ///     TimeOfDay::new(22, 0).unwrap()..TimeOfDay::new(2, 0).unwrap(),
    /// ]);
    ///
    /// let sch2 = Schedule::from_ranges([
    ///     TimeOfDay::new(10, 0).unwrap()..TimeOfDay::new(16, 0).unwrap(),
    /// ]);
    ///
    /// assert_eq!(sch1, sch2);
    /// ```
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range<TimeOfDay>>) -> Self {
        let mut inner: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                range.start.min(TimeOfDay::MIDNIGHT_24)..range.end.min(TimeOfDay::MIDNIGHT_24)
            })
            .filter(|range| range.start < range.end)
            .collect();

        // Ensure ranges are disjoint and in increasing order
        inner.sort_unstable_by_key(|range| range.start);
        let mut i = 0;

        while i + 1 < inner.len() {
            if inner[i].end >= inner[i + 1].start {
                let next = inner.remove(i + 1);
                inner[i].end = std::cmp::max(inner[i].end, next.end);
            } else {
                i += 1;
            }
        }

        Self { inner }
    }

    /// A schedule open for the whole day.
    pub fn always_open() -> Self {
        Self::from_ranges([TimeOfDay::MIDNIGHT_00..TimeOfDay::MIDNIGHT_24])
    }

    /// Check if a schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check if the location is open at given time of the day.
    ///
    /// ```
    /// use reuse_hours::schedule::Schedule;
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// let schedule = Schedule::from_ranges([
    ///     TimeOfDay::new(10, 0).unwrap()..TimeOfDay::new(18, 0).unwrap(),
    /// ]);
    ///
    /// assert!(schedule.is_open_at(TimeOfDay::new(10, 0).unwrap()));
    /// assert!(!schedule.is_open_at(TimeOfDay::new(18, 0).unwrap()));
    /// ```
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        self.inner.iter().any(|range| range.contains(&time))
    }

    /// Iterate over opening windows, in increasing order.
    pub fn open_ranges(&self) -> impl Iterator<Item = &Range<TimeOfDay>> + '_ {
        self.inner.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = TimeRange;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

/// Return value for [`Schedule::into_iter`].
#[derive(Debug)]
pub struct IntoIter {
    last_end: TimeOfDay,
    ranges: Peekable<std::vec::IntoIter<Range<TimeOfDay>>>,
}

impl IntoIter {
    /// Create a new iterator from a schedule.
    fn new(schedule: Schedule) -> Self {
        Self {
            last_end: TimeOfDay::MIDNIGHT_00,
            ranges: schedule.inner.into_iter().peekable(),
        }
    }

    /// Must be called before a value is yielded.
    fn pre_yield(&mut self, value: TimeRange) -> Option<TimeRange> {
        assert!(
            value.range.start < value.range.end,
            "infinite loop detected"
        );

        self.last_end = value.range.end;
        Some(value)
    }
}

impl Iterator for IntoIter {
    type Item = TimeRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.last_end >= TimeOfDay::MIDNIGHT_24 {
            // Iteration ended
            return None;
        }

        match self.ranges.next_if(|range| range.start == self.last_end) {
            // Start from an interval
            Some(range) => self.pre_yield(TimeRange::new(range, DayState::Open)),
            // Start from a hole, which lasts until next interval
            None => {
                let end = self
                    .ranges
                    .peek()
                    .map(|range| range.start)
                    .unwrap_or(TimeOfDay::MIDNIGHT_24);

                self.pre_yield(TimeRange::new(self.last_end..end, DayState::Closed))
            }
        }
    }
}

impl std::iter::FusedIterator for IntoIter {}

/// Macro that allows to quickly create a schedule.
///
/// ## Syntax
///
/// Opening windows are separated by semicolons, with times written
/// `{hour},{minutes}`:
///
/// ```
/// let schedule = reuse_hours::schedule! {
///      9,00 => 12,00;
///     14,00 => 18,00;
/// };
///
/// assert_eq!(schedule.open_ranges().count(), 2);
/// ```
#[macro_export]
macro_rules! schedule {
    (
        $( $hh1:expr,$mm1:expr => $hh2:expr,$mm2:expr );*
        $( ; )?
    ) => {{
        #[allow(unused_imports)]
        use $crate::schedule::Schedule;

        #[allow(unused_imports)]
        use $crate::TimeOfDay;

        Schedule::from_ranges([
            $(
                TimeOfDay::new($hh1, $mm1).expect("Invalid interval start")
                    ..TimeOfDay::new($hh2, $mm2).expect("Invalid interval end"),
            )*
        ])
    }};
}
