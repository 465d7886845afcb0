mod localization;
mod next_opening;

use crate::directory::Location;

fn sample() -> Vec<Location> {
    serde_json::from_str(include_str!("data/sample.json")).expect("invalid sample data")
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&$crate::datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

#[macro_export]
macro_rules! status_at {
    ( $expression: expr, $datetime: expr $( , )? ) => {{
        $crate::OpeningHours::parse($expression).status($crate::datetime!($datetime))
    }};
}
