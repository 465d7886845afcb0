use crate::{parse_time, Error, TimeOfDay};

fn minutes(raw: &str) -> Option<u16> {
    parse_time(raw).map(TimeOfDay::mins_from_midnight)
}

#[test]
fn meridiem() {
    assert_eq!(minutes("10am"), Some(600));
    assert_eq!(minutes("5:30pm"), Some(1050));
    assert_eq!(minutes("12am"), Some(0));
    assert_eq!(minutes("12pm"), Some(720));
    assert_eq!(minutes("12:15am"), Some(15));
}

#[test]
fn case_and_spacing() {
    assert_eq!(minutes("  9 AM "), Some(540));
    assert_eq!(minutes("7:05 Pm"), Some(19 * 60 + 5));
}

#[test]
fn no_meridiem_keeps_literal_hour() {
    assert_eq!(minutes("5:30"), Some(330));
    assert_eq!(minutes("17"), Some(1020));
    assert_eq!(minutes("24:00"), Some(1440));
}

#[test]
fn invalid() {
    assert_eq!(minutes("nonsense"), None);
    assert_eq!(minutes(""), None);
    assert_eq!(minutes("123"), None);
    assert_eq!(minutes("10:5"), None);
    assert_eq!(minutes("10am-6pm"), None);
}

#[test]
fn out_of_range_is_kept_as_written() {
    assert_eq!(minutes("13pm"), Some(25 * 60));
    assert_eq!(minutes("25"), Some(25 * 60));
    assert_eq!(minutes("10:75"), Some(675));
    assert_eq!(minutes("99:99pm"), Some(111 * 60 + 99));
    assert_eq!(parse_time("10:75am").unwrap().to_string(), "11:15");
}

#[test]
fn out_of_range_overflows_on_conversion() {
    let time: TimeOfDay = "13pm".parse().unwrap();
    let naive: Result<chrono::NaiveTime, _> = time.try_into();
    assert!(matches!(naive, Err(Error::Overflow { .. })));

    let naive: Result<chrono::NaiveTime, _> = TimeOfDay::MIDNIGHT_24.try_into();
    assert!(matches!(naive, Err(Error::Overflow { .. })));

    let naive: chrono::NaiveTime = parse_time("11:59pm").unwrap().try_into().unwrap();
    assert_eq!(naive, chrono::NaiveTime::from_hms_opt(23, 59, 0).unwrap());
}

#[test]
fn from_str_reports_syntax_errors() {
    assert!(matches!("noon".parse::<TimeOfDay>(), Err(Error::Parser(_))));
}

#[test]
fn twelve_hour_display() {
    let display = |raw: &str| parse_time(raw).unwrap().twelve_hour().to_string();
    assert_eq!(display("17:30"), "5:30pm");
    assert_eq!(display("5pm"), "5pm");
    assert_eq!(display("12pm"), "12pm");
    assert_eq!(display("12:05am"), "12:05am");
    assert_eq!(display("9:00"), "9am");
    assert_eq!(display("10:75am"), "11:15am");
}
