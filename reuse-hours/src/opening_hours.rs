use std::fmt::Display;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use reuse_hours_syntax::rules::{Clause, HoursExpression};
use reuse_hours_syntax::TimeOfDay;

use crate::localization::{Localize, NoLocation};
use crate::schedule::Schedule;
use crate::status::{OpenReason, OpenStatus, UnknownReason};
use crate::Context;

// OpeningHours

/// A classified hours string and its evaluation context.
///
/// Note that the expression is immutable and wrapped by an `Arc` so this is
/// safe and fast to clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OpeningHours<L: Localize = NoLocation> {
    /// Raw text, as written by the author
    raw: Arc<str>,
    /// Classified clauses of the raw text
    expr: Arc<HoursExpression>,
    /// Evaluation context
    pub(crate) ctx: Context<L>,
}

impl OpeningHours<NoLocation> {
    /// Classify raw hours text. This never fails, missing or unparsable hours
    /// will just evaluate to an unknown status.
    ///
    /// ```
    /// use reuse_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("Mon-Sat 10am-6pm, Sun 10am-5pm");
    /// assert_eq!(oh.expression().segments().count(), 2);
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: Arc::from(raw),
            expr: Arc::new(reuse_hours_syntax::parse(raw)),
            ctx: Context::default(),
        }
    }
}

impl<L: Localize> OpeningHours<L> {
    // --
    // -- Builder Methods
    // --

    /// Set a new evaluation context for this expression.
    ///
    /// ```
    /// use reuse_hours::localization::TzLocation;
    /// use reuse_hours::{Context, OpeningHours};
    ///
    /// let tz = chrono::FixedOffset::west_opt(8 * 3600).unwrap();
    ///
    /// let oh = OpeningHours::parse("Mon-Fri 7am-5pm")
    ///     .with_context(Context::default().with_locale(TzLocation::new(tz)));
    /// ```
    pub fn with_context<L2: Localize>(self, ctx: Context<L2>) -> OpeningHours<L2> {
        OpeningHours { raw: self.raw, expr: self.expr, ctx }
    }

    /// Get the raw text this was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the classified clauses of the expression.
    pub fn expression(&self) -> &HoursExpression {
        &self.expr
    }

    // --
    // -- Low level implementations.
    // --

    fn status_naive(&self, current_time: NaiveDateTime) -> OpenStatus {
        let clauses = match self.expr.as_ref() {
            HoursExpression::Missing => return OpenStatus::Unknown(UnknownReason::Missing),
            HoursExpression::Deferred => return OpenStatus::Unknown(UnknownReason::CheckHours),
            HoursExpression::AlwaysOpen => return OpenStatus::Open(OpenReason::AlwaysOpen),
            HoursExpression::Clauses(clauses) => clauses,
        };

        let weekday = current_time.weekday();
        let time = TimeOfDay::from(current_time.time());
        let mut open_now = false;
        let mut opens_later: Option<TimeOfDay> = None;

        for clause in clauses {
            let segment = match clause {
                Clause::Annotation { always_open, .. } => {
                    open_now |= *always_open;
                    continue;
                }
                Clause::Unparsed(_) => continue,
                Clause::Schedule(segment) => segment,
            };

            if !segment.applies_on(weekday) {
                continue;
            }

            if segment.span.contains(time) {
                open_now = true;
            } else if time < segment.open() {
                // Keep the earliest opening regardless of the written order
                opens_later = Some(match opens_later {
                    Some(prev) => std::cmp::min(prev, segment.open()),
                    None => segment.open(),
                });
            }
        }

        if open_now {
            OpenStatus::Open(OpenReason::Now)
        } else if let Some(open) = opens_later {
            OpenStatus::OpeningAt(open)
        } else {
            OpenStatus::Closed
        }
    }

    fn schedule_on_weekday(&self, weekday: Weekday) -> Schedule {
        match self.expr.as_ref() {
            HoursExpression::Missing | HoursExpression::Deferred => Schedule::new(),
            HoursExpression::AlwaysOpen => Schedule::always_open(),
            expr @ HoursExpression::Clauses(_) if expr.has_always_open_annotation() => {
                Schedule::always_open()
            }
            expr @ HoursExpression::Clauses(_) => Schedule::from_ranges(
                expr.segments()
                    .filter(|segment| segment.applies_on(weekday))
                    .map(|segment| segment.span.range()),
            ),
        }
    }

    // --
    // -- High level implementations / Syntactic sugar
    // --

    /// Get the opening windows at a given day.
    ///
    /// The schedule is empty when the state is unknown.
    ///
    /// ```
    /// use reuse_hours::{schedule, OpeningHours};
    ///
    /// let oh = OpeningHours::parse("Mon-Sat 10am-6pm, Sun 10am-5pm");
    /// let sunday = chrono::NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
    /// assert_eq!(oh.schedule_at(sunday), schedule! { 10,00 => 17,00 });
    /// ```
    pub fn schedule_at(&self, date: NaiveDate) -> Schedule {
        self.schedule_on_weekday(date.weekday())
    }

    /// Get the status at given time.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use reuse_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("Mon-Sat 10am-6pm, Sun 10am-5pm");
    /// let date = NaiveDateTime::parse_from_str("2024-05-15 07:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(oh.status(date).label(), "Opens 10am");
    /// ```
    pub fn status(&self, current_time: L::DateTime) -> OpenStatus {
        self.status_naive(self.ctx.locale.naive(current_time))
    }

    /// Get the time at which the location opens later today, if it is
    /// currently closed.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use reuse_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("Tue & Thu 5:30-7pm");
    /// let date_1 = NaiveDateTime::parse_from_str("2024-05-14 04:00", "%Y-%m-%d %H:%M").unwrap();
    /// let date_2 = NaiveDateTime::parse_from_str("2024-05-14 05:30", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(oh.next_opening(date_1), Some(date_2));
    /// assert_eq!(oh.next_opening(date_2), None);
    /// ```
    pub fn next_opening(&self, current_time: L::DateTime) -> Option<L::DateTime> {
        let naive = self.ctx.locale.naive(current_time);

        let OpenStatus::OpeningAt(open) = self.status_naive(naive) else {
            return None;
        };

        let midnight = NaiveDateTime::new(naive.date(), NaiveTime::MIN);
        let opening = midnight + TimeDelta::minutes(open.mins_from_midnight().into());
        Some(self.ctx.locale.datetime(opening))
    }

    /// Check if this is open at a given time.
    pub fn is_open(&self, current_time: L::DateTime) -> bool {
        self.status(current_time).is_open()
    }

    /// Check if this is closed at a given time, including when it opens later
    /// the same day.
    pub fn is_closed(&self, current_time: L::DateTime) -> bool {
        matches!(
            self.status(current_time),
            OpenStatus::Closed | OpenStatus::OpeningAt(_)
        )
    }

    /// Check if this is unknown at a given time.
    pub fn is_unknown(&self, current_time: L::DateTime) -> bool {
        matches!(self.status(current_time), OpenStatus::Unknown(_))
    }
}

impl From<&str> for OpeningHours {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<L: Localize> Display for OpeningHours<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Evaluate the status of optional raw hours at a given local time.
///
/// ```
/// use chrono::NaiveDateTime;
/// use reuse_hours::get_open_status;
///
/// let date = NaiveDateTime::parse_from_str("2024-05-15 14:00", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(get_open_status(None, date).status(), "unknown");
/// assert_eq!(get_open_status(Some("24/7"), date).label(), "Open 24/7");
/// assert_eq!(get_open_status(Some("Mon-Sat 10am-6pm"), date).label(), "Open Now");
/// ```
pub fn get_open_status(hours: Option<&str>, current_time: NaiveDateTime) -> OpenStatus {
    OpeningHours::parse(hours.unwrap_or_default()).status(current_time)
}
