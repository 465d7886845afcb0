use chrono::NaiveDateTime;

use crate::{run_fuzz_status, Data, Operation};

fn date_secs(date: &str) -> i64 {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M")
        .expect("invalid datetime literal")
        .and_utc()
        .timestamp()
}

#[test]
fn no_fuzz_before_1900() {
    let data = Data {
        date_secs: date_secs("1899-12-31 12:00"),
        hours: "24/7".to_string(),
        operation: Operation::Repeat,
    };

    assert!(!run_fuzz_status(data));
}

#[test]
fn no_fuzz_for_invalid_timestamp() {
    let data = Data {
        date_secs: i64::MAX,
        hours: "24/7".to_string(),
        operation: Operation::Repeat,
    };

    assert!(!run_fuzz_status(data));
}

#[test]
fn fuzz_overnight_window() {
    let data = Data {
        date_secs: date_secs("2024-05-15 01:00"),
        hours: "Daily 10pm-2am".to_string(),
        operation: Operation::CompareSchedule,
    };

    assert!(run_fuzz_status(data));
}

#[test]
fn fuzz_always_open_annotation() {
    let data = Data {
        date_secs: date_secs("2024-05-15 01:00"),
        hours: "Mon 9am-5pm, Hazardous waste 24/7".to_string(),
        operation: Operation::CompareSchedule,
    };

    assert!(run_fuzz_status(data));
}

#[test]
fn fuzz_garbage() {
    for hours in ["", ",,,", "- -", "99:99pm-1", "Mon 13pm-5pm", "Sat-Sat 0-24:00"] {
        for operation in [Operation::Repeat, Operation::CompareSchedule] {
            let data = Data {
                date_secs: date_secs("2024-05-18 23:59"),
                hours: hours.to_string(),
                operation,
            };

            assert!(run_fuzz_status(data), "{hours}");
        }
    }
}
