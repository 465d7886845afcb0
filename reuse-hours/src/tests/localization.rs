use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::status::{OpenReason, OpenStatus};
use crate::{datetime, Context, Localize, OpeningHours, TimeOfDay, TzLocation};

#[test]
fn ctx_with_tz() {
    let tz = chrono_tz::America::Los_Angeles;
    let ctx = Context::default().with_locale(TzLocation::new(tz));
    let oh = OpeningHours::parse("Mon-Sat 10am-6pm").with_context(ctx);

    assert_eq!(
        oh.next_opening(datetime!("2024-05-15 07:00", tz)).unwrap(),
        datetime!("2024-05-15 10:00", tz),
    );

    assert_eq!(
        oh.status(datetime!("2024-05-15 14:00", tz)),
        OpenStatus::Open(OpenReason::Now),
    );
}

#[test]
fn instants_from_another_timezone() {
    let tz = chrono_tz::America::Los_Angeles;
    let ctx = Context::default().with_locale(TzLocation::new(tz));
    let oh = OpeningHours::parse("Mon-Fri 7am-5pm").with_context(ctx);

    // 13:00 UTC is 06:00 in Portland
    let date = Utc.with_ymd_and_hms(2024, 5, 15, 13, 0, 0).unwrap();
    let status = oh.status(date.with_timezone(&tz));
    assert_eq!(status, OpenStatus::OpeningAt(TimeOfDay::new(7, 0).unwrap()));

    // 01:00 UTC on Thursday is still Wednesday evening in Portland
    let date = Utc.with_ymd_and_hms(2024, 5, 16, 1, 0, 0).unwrap();
    assert_eq!(oh.status(date.with_timezone(&tz)), OpenStatus::Closed);
}

#[test]
fn weekday_is_taken_from_local_time() {
    let tz = chrono_tz::Europe::Paris;
    let ctx = Context::default().with_locale(TzLocation::new(tz));
    let oh = OpeningHours::parse("Sat 9am-12pm").with_context(ctx);

    // Friday 23:30 UTC is Saturday in Paris
    let date = Utc.with_ymd_and_hms(2024, 5, 17, 23, 30, 0).unwrap();
    assert!(oh.is_closed(date.with_timezone(&tz)));

    let date = Utc.with_ymd_and_hms(2024, 5, 18, 8, 0, 0).unwrap();
    assert!(oh.is_open(date.with_timezone(&tz)));
}

// In Portland, time skipped from 02:00 to 03:00 on 10/03/2024
#[test]
fn opens_at_invalid_time() {
    let tz = chrono_tz::America::Los_Angeles;
    let ctx = Context::default().with_locale(TzLocation::new(tz));
    let oh = OpeningHours::parse("Sun 2:30am-5am").with_context(ctx);

    assert_eq!(
        oh.next_opening(datetime!("2024-03-10 01:00", tz)).unwrap(),
        datetime!("2024-03-10 03:00", tz),
    );
}

// In Portland, the clock jumped back to 01:00 on 03/11/2024 02:00
#[test]
fn opens_at_ambiguous_time() {
    let tz = chrono_tz::America::Los_Angeles;
    let ctx = Context::default().with_locale(TzLocation::new(tz));
    let oh = OpeningHours::parse("Sun 1:30am-5am").with_context(ctx);

    let expected = tz
        .from_local_datetime(&datetime!("2024-11-03 01:30"))
        .earliest()
        .unwrap();

    assert_eq!(
        oh.next_opening(datetime!("2024-11-03 00:30", tz)).unwrap(),
        expected,
    );
}

#[test]
fn naive_locale_is_identity() {
    let ctx = Context::default();
    let date = datetime!("2024-05-15 14:00");
    assert_eq!(ctx.locale.naive(date), date);
    assert_eq!(ctx.locale.datetime(date), date);
}

/// A timezone in which no local time exists.
#[derive(Clone, Copy, Debug)]
struct NoLocalTime;

impl TimeZone for NoLocalTime {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        NoLocalTime
    }

    fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<FixedOffset> {
        LocalResult::None
    }

    fn offset_from_local_datetime(&self, _local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        LocalResult::None
    }

    fn offset_from_utc_date(&self, _utc: &NaiveDate) -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn offset_from_utc_datetime(&self, _utc: &NaiveDateTime) -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }
}

#[test]
fn unrepresentable_local_time_is_read_as_utc() {
    let locale = TzLocation::new(NoLocalTime);
    let naive = datetime!("2024-05-15 10:00");
    assert_eq!(locale.datetime(naive).naive_utc(), naive);
}
