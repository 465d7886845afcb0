use std::fmt::Display;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

// Display

fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Resolve a lowercase day name or abbreviation.
///
/// ```
/// use reuse_hours_syntax::rules::day::{weekday_from_name, Weekday};
///
/// assert_eq!(weekday_from_name("thurs"), Some(Weekday::Thu));
/// assert_eq!(weekday_from_name("Thurs"), None); // expects lowercase input
/// ```
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let wday = match name {
        "sun" | "sunday" => Weekday::Sun,
        "mon" | "monday" => Weekday::Mon,
        "tue" | "tues" | "tuesday" => Weekday::Tue,
        "wed" | "wednesday" => Weekday::Wed,
        "thu" | "thur" | "thurs" | "thursday" => Weekday::Thu,
        "fri" | "friday" => Weekday::Fri,
        "sat" | "saturday" => Weekday::Sat,
        _ => return None,
    };

    Some(wday)
}

/// Index of a weekday in a week starting on sunday.
#[inline]
pub fn weekday_index(wday: Weekday) -> u8 {
    wday.num_days_from_sunday()
        .try_into()
        .expect("weekday index out of range")
}

// DaySet

/// Days a clause applies to, in the order they were written or walked.
///
/// Duplicates may appear when the author listed the same day twice, they
/// have no effect on evaluation.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct DaySet(Vec<Weekday>);

impl DaySet {
    /// All days of the week, starting on sunday.
    pub fn every_day() -> Self {
        Self::walk(Weekday::Sun, Weekday::Sat)
    }

    /// Walk forward from `start` to `end`, wrapping after saturday.
    ///
    /// ```
    /// use reuse_hours_syntax::rules::day::{DaySet, Weekday};
    ///
    /// let days = DaySet::walk(Weekday::Sat, Weekday::Mon);
    /// assert_eq!(days.indices(), [6, 0, 1]);
    /// ```
    pub fn walk(start: Weekday, end: Weekday) -> Self {
        let mut days = vec![start];
        let mut curr = start;

        while curr != end {
            curr = curr.succ();
            days.push(curr);
        }

        Self(days)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, wday: Weekday) -> bool {
        self.0.contains(&wday)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Indices of the days in this set, sunday being 0.
    pub fn indices(&self) -> Vec<u8> {
        self.iter().map(weekday_index).collect()
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.iter().map(wday_str).collect();
        write!(f, "{}", names.join(","))
    }
}
