//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
#[cfg(test)]
mod tests;

use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike};

use std::fmt::Debug;

use reuse_hours::{get_open_status, OpenStatus, OpeningHours, TimeOfDay};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub hours: String,
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// Evaluating twice gives the same result
    Repeat,
    /// The status is consistent with the schedule of the day
    CompareSchedule,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("operation", &self.operation);
        debug.field("hours", &self.hours);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_status(data: Data) -> bool {
    let Some(date) = DateTime::from_timestamp(data.date_secs, 0) else {
        return false;
    };

    let date = date.naive_utc();

    if date.year() < 1900 || date.year() > 9999 {
        return false;
    }

    let oh = OpeningHours::parse(&data.hours);
    let status = oh.status(date);

    match &data.operation {
        Operation::Repeat => {
            assert_eq!(status, oh.status(date));
            assert_eq!(status, get_open_status(Some(&data.hours), date));
            assert_eq!(oh.next_opening(date), oh.next_opening(date));
        }
        Operation::CompareSchedule => {
            let time = TimeOfDay::from(date.time());
            let schedule = oh.schedule_at(date.date());

            match status {
                OpenStatus::Open(_) => assert!(schedule.is_open_at(time)),
                OpenStatus::Closed | OpenStatus::OpeningAt(_) => {
                    assert!(!schedule.is_open_at(time))
                }
                OpenStatus::Unknown(_) => assert!(schedule.is_empty()),
            }

            if let OpenStatus::OpeningAt(open) = status {
                assert!(time < open);
                assert!(oh.next_opening(date).is_some_and(|next| next > date));
            }
        }
    }

    true
}
