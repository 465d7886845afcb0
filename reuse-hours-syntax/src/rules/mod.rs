pub mod day;
pub mod time;

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;
use crate::time_of_day::TimeOfDay;

// HoursExpression

/// A classified hours string, as returned by [`crate::parse`].
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum HoursExpression {
    /// No hours were written for this location.
    #[default]
    Missing,
    /// The author refers to an external source ("see website", "call ...").
    Deferred,
    /// The location never closes.
    AlwaysOpen,
    /// Comma-separated clauses, in written order.
    Clauses(Vec<Clause>),
}

impl HoursExpression {
    /// Iterate over clauses describing an actual schedule.
    pub fn segments(&self) -> impl Iterator<Item = &ScheduleSegment> + '_ {
        let clauses = match self {
            Self::Clauses(clauses) => clauses.as_slice(),
            _ => &[],
        };

        clauses.iter().filter_map(|clause| match clause {
            Clause::Schedule(segment) => Some(segment),
            _ => None,
        })
    }

    /// Check if an annotation clause states the location never closes, even
    /// if the rest of the expression has a schedule.
    pub fn has_always_open_annotation(&self) -> bool {
        let Self::Clauses(clauses) = self else {
            return false;
        };

        clauses
            .iter()
            .any(|clause| matches!(clause, Clause::Annotation { always_open: true, .. }))
    }
}

// Clause

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Clause {
    /// Metadata about part of the location, such as "Bins: 24/7".
    Annotation { text: String, always_open: bool },
    /// A day and time window, such as "Mon-Sat 10am-6pm".
    Schedule(ScheduleSegment),
    /// Anything else, ignored during evaluation.
    Unparsed(String),
}

// ScheduleSegment

/// On each of `days`, open during `span`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScheduleSegment {
    pub days: day::DaySet,
    pub span: time::TimeSpan,
}

impl ScheduleSegment {
    #[inline]
    pub fn open(&self) -> TimeOfDay {
        self.span.open
    }

    #[inline]
    pub fn close(&self) -> TimeOfDay {
        self.span.close
    }

    /// Check if this segment has a window on given day.
    #[inline]
    pub fn applies_on(&self, wday: day::Weekday) -> bool {
        self.days.contains(wday)
    }
}

impl FromStr for ScheduleSegment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_schedule_segment(s)
    }
}

impl Display for ScheduleSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.days, self.span)
    }
}
