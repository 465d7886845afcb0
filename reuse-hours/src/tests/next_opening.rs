use crate::{datetime, OpeningHours};

#[test]
fn opens_later_today() {
    let oh = OpeningHours::parse("Mon-Sat 10am-6pm, Sun 10am-5pm");

    assert_eq!(
        oh.next_opening(datetime!("2024-05-15 07:00")),
        Some(datetime!("2024-05-15 10:00")),
    );

    assert_eq!(
        oh.next_opening(datetime!("2024-05-15 09:59")),
        Some(datetime!("2024-05-15 10:00")),
    );
}

#[test]
fn minutes_are_kept() {
    let oh = OpeningHours::parse("Mon-Fri 7:30am-4pm");

    assert_eq!(
        oh.next_opening(datetime!("2024-05-15 00:00")),
        Some(datetime!("2024-05-15 07:30")),
    );
}

#[test]
fn extra_minutes_carry_over() {
    let oh = OpeningHours::parse("Mon 10:75am-6pm");

    assert_eq!(
        oh.next_opening(datetime!("2024-05-20 09:00")),
        Some(datetime!("2024-05-20 11:15")),
    );
}

#[test]
fn none_when_open() {
    let oh = OpeningHours::parse("Mon-Sat 10am-6pm");
    assert_eq!(oh.next_opening(datetime!("2024-05-15 14:00")), None);
    assert_eq!(OpeningHours::parse("24/7").next_opening(datetime!("2024-05-15 14:00")), None);
}

#[test]
fn none_when_closed_for_the_day() {
    let oh = OpeningHours::parse("Mon-Sat 10am-6pm");
    assert_eq!(oh.next_opening(datetime!("2024-05-15 18:00")), None);

    // Closed on sundays, the next days are not looked up
    assert_eq!(oh.next_opening(datetime!("2024-05-19 08:00")), None);
}

#[test]
fn none_when_unknown() {
    let now = datetime!("2024-05-15 08:00");
    assert_eq!(OpeningHours::parse("").next_opening(now), None);
    assert_eq!(OpeningHours::parse("Varies by location").next_opening(now), None);
}
