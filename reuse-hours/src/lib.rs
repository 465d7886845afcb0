#![doc = include_str!("../../README.md")]

pub mod context;
pub mod directory;
pub mod localization;
pub mod opening_hours;
#[macro_use]
pub mod schedule;
pub mod status;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::Context;
pub use crate::directory::{Directory, Location};
pub use crate::localization::{distance_miles, GeoPoint, Localize, NoLocation, TzLocation};
pub use crate::opening_hours::{get_open_status, OpeningHours};
pub use crate::status::{OpenReason, OpenStatus, UnknownReason};
pub use reuse_hours_syntax::error::Error as ParserError;
pub use reuse_hours_syntax::TimeOfDay;
