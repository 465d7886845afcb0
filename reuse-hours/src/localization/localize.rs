use std::fmt::Debug;

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

/// Specifies how instants given by the caller are mapped to the local time
/// the hours of a location are written in.
pub trait Localize: Clone + Send + Sync {
    /// The type for localized date & time.
    type DateTime: Clone + Debug;

    /// Get naive local time.
    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime;

    /// Localize a naive datetime.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime;
}

// No location info.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }
}

/// Time is evaluated in the timezone of the location.
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use reuse_hours::localization::{Localize, TzLocation};
///
/// let locale = TzLocation::new(FixedOffset::west_opt(7 * 3600).unwrap());
/// let instant = Utc.with_ymd_and_hms(2024, 5, 15, 21, 0, 0).unwrap();
/// let instant = instant.with_timezone(locale.get_timezone());
///
/// assert_eq!(locale.naive(instant).to_string(), "2024-05-15 14:00:00");
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> TzLocation<Tz> {
    /// Create a new location context which only contains timezone information.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Get the timezone for this location.
    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

impl<Tz> Localize for TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    type DateTime = DateTime<Tz>;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt.with_timezone(&self.tz).naive_local()
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        // Local times skipped by a DST change are moved forward to the
        // first valid minute.
        let mut shifted = naive;

        for _ in 0..24 * 60 {
            if let Some(dt) = self.tz.from_local_datetime(&shifted).earliest() {
                return dt;
            }

            shifted += TimeDelta::minutes(1);
        }

        #[cfg(feature = "log")]
        log::warn!("No valid local time in the day following {naive}, reading it as UTC");

        self.tz.from_utc_datetime(&naive)
    }
}
