use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::rules::day::{weekday_from_name, DaySet};
use crate::rules::time::TimeSpan;
use crate::rules::{Clause, HoursExpression, ScheduleSegment};
use crate::split::split_segments;
use crate::time_of_day::TimeOfDay;

/// Phrases showing that the author refers to another source for hours. They
/// take precedence over anything else written in the expression.
const DEFERRAL_PHRASES: [&str; 5] = ["see website", "check website", "varies", "events", "call "];

/// Phrases for a location that never closes.
const ALWAYS_OPEN_PHRASES: [&str; 2] = ["24/7", "24 hours"];

/// Markers of a clause that describes a part of the location rather than its
/// schedule.
const ANNOTATION_MARKERS: [&str; 3] = ["hazardous", "phone:", "bins:"];

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct HoursParser;

enum Meridiem {
    Am,
    Pm,
}

/// Classify a raw hours string.
///
/// This never fails: clauses that can't be understood are kept as
/// [`Clause::Unparsed`].
///
/// ```
/// use reuse_hours_syntax::{parse, Clause, HoursExpression};
///
/// assert_eq!(parse(""), HoursExpression::Missing);
/// assert_eq!(parse("See website for hours"), HoursExpression::Deferred);
/// assert_eq!(parse("Bins: 24/7"), HoursExpression::AlwaysOpen);
///
/// let HoursExpression::Clauses(clauses) = parse("Mon-Sat 10am-6pm, Sun by appointment") else {
///     panic!("expected clauses");
/// };
///
/// assert!(matches!(clauses[0], Clause::Schedule(_)));
/// assert!(matches!(clauses[1], Clause::Unparsed(_)));
/// ```
pub fn parse(data: &str) -> HoursExpression {
    if data.is_empty() {
        return HoursExpression::Missing;
    }

    let lower = data.to_lowercase();

    if DEFERRAL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return HoursExpression::Deferred;
    }

    if ALWAYS_OPEN_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return HoursExpression::AlwaysOpen;
    }

    HoursExpression::Clauses(split_segments(data).map(build_clause).collect())
}

/// Parse a clock time such as `10am`, `5:30pm` or `17`.
///
/// ```
/// use reuse_hours_syntax::{parse_time, TimeOfDay};
///
/// assert_eq!(parse_time("5:30pm"), TimeOfDay::new(17, 30));
/// assert_eq!(parse_time("12am"), TimeOfDay::new(0, 0));
/// assert_eq!(parse_time("nonsense"), None);
/// ```
pub fn parse_time(data: &str) -> Option<TimeOfDay> {
    parse_time_of_day(data).ok()
}

/// Parse a day specifier such as `Mon-Sat`, `Tue & Thu` or `Daily`.
///
/// Unknown day names are skipped, which may result in an empty set.
///
/// ```
/// use reuse_hours_syntax::parse_days;
///
/// assert_eq!(parse_days("Mon-Sat").indices(), [1, 2, 3, 4, 5, 6]);
/// assert_eq!(parse_days("Tue & Thu").indices(), [2, 4]);
/// assert!(parse_days("Bogusday").is_empty());
/// ```
pub fn parse_days(data: &str) -> DaySet {
    let data = data.trim().to_lowercase();

    if data == "daily" {
        return DaySet::every_day();
    }

    if let Some(days) = build_day_range(&data) {
        return days;
    }

    data.split(['&', ','])
        .filter_map(|part| weekday_from_name(part.trim()))
        .collect()
}

/// Parse a single clause such as `Mon-Sat 10am-6pm`.
///
/// ```
/// use reuse_hours_syntax::{parse_segment, TimeOfDay};
///
/// let segment = parse_segment("Tue & Thu 5:30-7pm").unwrap();
/// assert_eq!(segment.days.indices(), [2, 4]);
/// assert_eq!(segment.open(), TimeOfDay::new(5, 30).unwrap());
/// assert_eq!(segment.close(), TimeOfDay::new(19, 0).unwrap());
///
/// assert!(parse_segment("Bogusday 10am-6pm").is_none());
/// ```
pub fn parse_segment(data: &str) -> Option<ScheduleSegment> {
    parse_schedule_segment(data).ok()
}

pub(crate) fn parse_time_of_day(data: &str) -> Result<TimeOfDay> {
    let pair = HoursParser::parse(Rule::input_time, data.trim())
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no time found");

    Ok(build_time(pair))
}

pub(crate) fn parse_schedule_segment(data: &str) -> Result<ScheduleSegment> {
    let mut pairs = HoursParser::parse(Rule::input_segment, data.trim()).map_err(Error::from)?;
    let day_spec = pairs.next().expect("grammar error: no day specifier found");
    let open = pairs.next().expect("grammar error: no opening time found");
    let close = pairs.next().expect("grammar error: no closing time found");
    let days = parse_days(day_spec.as_str());

    if days.is_empty() {
        return Err(Error::EmptyDays(day_spec.as_str().to_string()));
    }

    let span = TimeSpan::new(build_time(open), build_time(close));
    Ok(ScheduleSegment { days, span })
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

// ---
// --- Clauses
// ---

fn build_clause(raw: &str) -> Clause {
    let text = raw.trim();
    let lower = text.to_lowercase();

    if ANNOTATION_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return Clause::Annotation {
            text: text.to_string(),
            always_open: lower.contains("24/7"),
        };
    }

    match parse_schedule_segment(text) {
        Ok(segment) => Clause::Schedule(segment),
        Err(_err) => {
            #[cfg(feature = "log")]
            log::debug!(clause = text; "ignoring clause that is not a schedule: {_err}");
            Clause::Unparsed(text.to_string())
        }
    }
}

// ---
// --- Days
// ---

fn build_day_range(data: &str) -> Option<DaySet> {
    let mut pairs = HoursParser::parse(Rule::input_day_range, data).ok()?;
    let start = weekday_from_name(pairs.next()?.as_str())?;
    let end = weekday_from_name(pairs.next()?.as_str())?;
    Some(DaySet::walk(start, end))
}

// ---
// --- Time
// ---

fn build_time(pair: Pair<Rule>) -> TimeOfDay {
    assert_eq!(pair.as_rule(), Rule::time);
    #[cfg(feature = "log")]
    let raw = pair.as_str();
    let mut hour: u8 = 0;
    let mut minute: u8 = 0;
    let mut meridiem = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::hour => hour = pair.as_str().parse().expect("grammar error: invalid hour"),
            Rule::minute => minute = pair.as_str().parse().expect("grammar error: invalid minute"),
            Rule::meridiem => meridiem = Some(build_meridiem(pair)),
            other => unexpected_token(other, Rule::time),
        }
    }

    let hour = match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };

    let time = TimeOfDay::from_clock(hour, minute);

    #[cfg(feature = "log")]
    if !time.is_within_day() || minute > 59 {
        log::warn!("Found out of range time `{}` in opening hours", raw.trim());
    }

    time
}

fn build_meridiem(pair: Pair<Rule>) -> Meridiem {
    assert_eq!(pair.as_rule(), Rule::meridiem);

    let pair = pair
        .into_inner()
        .next()
        .expect("grammar error: empty meridiem");

    match pair.as_rule() {
        Rule::am => Meridiem::Am,
        Rule::pm => Meridiem::Pm,
        other => unexpected_token(other, Rule::meridiem),
    }
}
