//! Parsing of the free-form opening hours written on location records, such
//! as `"Mon-Sat 10am-6pm, Sun 10am-5pm"` or `"Phone: Mon-Fri 7am-5pm, Bins: 24/7"`.
//!
//! Authors do not follow any grammar, so nothing in this crate fails loudly:
//! parts of an input that can't be understood are reported as missing and
//! the caller decides to skip them.

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;
pub mod split;
pub mod time_of_day;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::{parse, parse_days, parse_segment, parse_time};
pub use rules::day::DaySet;
pub use rules::{Clause, HoursExpression, ScheduleSegment};
pub use split::split_segments;
pub use time_of_day::TimeOfDay;
