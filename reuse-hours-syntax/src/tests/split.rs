use crate::split_segments;

#[test]
fn single_clause() {
    assert_eq!(split_segments("Mon-Sat 10am-6pm").collect::<Vec<_>>(), ["Mon-Sat 10am-6pm"]);
}

#[test]
fn empty() {
    assert_eq!(split_segments("").collect::<Vec<_>>(), [""]);
}

#[test]
fn comma_followed_by_letter() {
    assert_eq!(
        split_segments("Mon-Fri 7am-5:30pm,Sat 8am-5pm,   Sun 9am-1pm").collect::<Vec<_>>(),
        ["Mon-Fri 7am-5:30pm", "Sat 8am-5pm", "Sun 9am-1pm"],
    );
}

#[test]
fn comma_followed_by_digit() {
    assert_eq!(
        split_segments("Sat 9am-12, 1pm-4pm, Sun 10am-2pm").collect::<Vec<_>>(),
        ["Sat 9am-12, 1pm-4pm", "Sun 10am-2pm"],
    );
}

#[test]
fn trailing_comma() {
    assert_eq!(
        split_segments("Mon 9am-5pm,").collect::<Vec<_>>(),
        ["Mon 9am-5pm,"],
    );
}

#[test]
fn restartable() {
    let segments = split_segments("Daily 8am-5pm, Hazardous Waste Mon-Sat 9am-4pm");
    let first_pass: Vec<_> = segments.clone().collect();
    let second_pass: Vec<_> = segments.collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass, ["Daily 8am-5pm", "Hazardous Waste Mon-Sat 9am-4pm"]);
}

#[test]
fn fused() {
    let mut segments = split_segments("Sun 10am-5pm");
    assert!(segments.next().is_some());
    assert!(segments.next().is_none());
    assert!(segments.next().is_none());
}
