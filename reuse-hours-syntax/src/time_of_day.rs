use std::convert::TryInto;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::Error;

/// A time within a single day, counted in minutes from *00:00*.
///
/// Times built with [`TimeOfDay::new`] lie in `00:00..=24:00`, `24:00` being
/// the end of the day. Clock readings taken from free-form text are kept as
/// written and may go past the end of the day (`13pm` is `25:00`).
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT_00: Self = Self { minutes: 0 };
    pub const MIDNIGHT_24: Self = Self { minutes: 24 * 60 };

    /// Create a new time of day, this may return `None` if input values are
    /// out of range.
    ///
    /// ```
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(17, 30).is_some());
    /// assert!(TimeOfDay::new(24, 0).is_some());
    /// assert!(TimeOfDay::new(24, 1).is_none()); // past the end of the day
    /// assert!(TimeOfDay::new(10, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self::from_clock(hour, minute))
        }
    }

    /// Read a clock without any bound check, extra minutes carry over to the
    /// hours.
    ///
    /// ```
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_clock(10, 75), TimeOfDay::new(11, 15).unwrap());
    /// assert_eq!(TimeOfDay::from_clock(25, 0).to_string(), "25:00");
    /// assert!(!TimeOfDay::from_clock(25, 0).is_within_day());
    /// ```
    #[inline]
    pub const fn from_clock(hour: u8, minute: u8) -> Self {
        Self { minutes: 60 * hour as u16 + minute as u16 }
    }

    /// Get the number of full hours in this time.
    #[inline]
    pub fn hour(self) -> u8 {
        (self.minutes / 60).try_into().unwrap_or(u8::MAX)
    }

    /// Get the number of remaining minutes in this time.
    #[inline]
    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// let time = TimeOfDay::new(17, 30).unwrap();
    /// assert_eq!(time.mins_from_midnight(), 1050);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        self.minutes
    }

    /// Build a time from the total number of minutes from midnight and return
    /// `None` if the result is out of bounds.
    ///
    /// ```
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_mins_from_midnight(600), TimeOfDay::new(10, 0));
    /// assert!(TimeOfDay::from_mins_from_midnight(24 * 60 + 1).is_none());
    /// ```
    #[inline]
    pub fn from_mins_from_midnight(minutes: u16) -> Option<Self> {
        let time = Self { minutes };
        time.is_within_day().then_some(time)
    }

    /// Check if this time lies in `00:00..=24:00`.
    #[inline]
    pub fn is_within_day(self) -> bool {
        self <= Self::MIDNIGHT_24
    }

    /// Format this time on a 12-hour clock, omitting minutes when they are
    /// zero.
    ///
    /// ```
    /// use reuse_hours_syntax::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(17, 30).unwrap().twelve_hour().to_string(), "5:30pm");
    /// assert_eq!(TimeOfDay::new(10, 0).unwrap().twelve_hour().to_string(), "10am");
    /// assert_eq!(TimeOfDay::new(0, 0).unwrap().twelve_hour().to_string(), "12am");
    /// ```
    #[inline]
    pub fn twelve_hour(self) -> TwelveHour {
        TwelveHour(self)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_time_of_day(s)
    }
}

impl TryInto<NaiveTime> for TimeOfDay {
    type Error = Error;

    #[inline]
    fn try_into(self) -> Result<NaiveTime, Self::Error> {
        NaiveTime::from_hms_opt(self.hour().into(), self.minute().into(), 0).ok_or_else(|| {
            Error::Overflow {
                value: self.to_string(),
                expected: "a time between 00:00 and 23:59".to_string(),
            }
        })
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[inline]
    fn from(time: NaiveTime) -> TimeOfDay {
        Self {
            minutes: (60 * time.hour() + time.minute())
                .try_into()
                .expect("invalid NaiveTime"),
        }
    }
}

// TwelveHour

/// Display a [`TimeOfDay`] as written on a badge, such as `5pm` or `5:30pm`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TwelveHour(TimeOfDay);

impl Display for TwelveHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hour = self.0.hour() % 24;
        let period = if hour >= 12 { "pm" } else { "am" };

        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };

        let minute = self.0.minute();

        if minute > 0 {
            write!(f, "{display_hour}:{minute:02}{period}")
        } else {
            write!(f, "{display_hour}{period}")
        }
    }
}
