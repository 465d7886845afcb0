//! Split a full hours string into clauses.
//!
//! Clauses are separated by a comma followed by a letter, so that a comma
//! inside of a clause doesn't start a new one:
//!
//! ```
//! use reuse_hours_syntax::split_segments;
//!
//! let clauses: Vec<_> = split_segments("Mon-Sat 10am-6pm, Sun 10am-5pm").collect();
//! assert_eq!(clauses, ["Mon-Sat 10am-6pm", "Sun 10am-5pm"]);
//!
//! let clauses: Vec<_> = split_segments("Mon 9am-12, 1-5pm").collect();
//! assert_eq!(clauses, ["Mon 9am-12, 1-5pm"]);
//! ```

use std::iter::FusedIterator;

/// Iterate over the clauses of `data`, in written order.
#[inline]
pub fn split_segments(data: &str) -> Segments<'_> {
    Segments { remaining: Some(data) }
}

/// Iterator over the clauses of an hours string, see [`split_segments`].
///
/// Yielded clauses are not trimmed, apart from the whitespace following the
/// separating comma.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining?;

        for (idx, _) in remaining.match_indices(',') {
            let after = remaining[idx + 1..].trim_start();

            if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
                self.remaining = Some(after);
                return Some(&remaining[..idx]);
            }
        }

        self.remaining = None;
        Some(remaining)
    }
}

impl FusedIterator for Segments<'_> {}
