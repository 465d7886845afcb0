use std::fmt::Display;

use reuse_hours_syntax::TimeOfDay;

/// Why a location is reported as open.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum OpenReason {
    /// The hours say the location never closes.
    AlwaysOpen,
    /// A window of today's schedule contains current time.
    Now,
}

/// Why the state of a location can't be determined.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum UnknownReason {
    /// No hours were given for this location.
    Missing,
    /// The hours refer to an external source.
    CheckHours,
}

/// State of a location at a given time, as displayed on its badge.
///
/// ```
/// use reuse_hours::{OpenStatus, TimeOfDay};
///
/// let status = OpenStatus::OpeningAt(TimeOfDay::new(17, 30).unwrap());
/// assert_eq!(status.status(), "opening");
/// assert_eq!(status.style(), "status-opening");
/// assert_eq!(status.label(), "Opens 5:30pm");
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum OpenStatus {
    Open(OpenReason),
    Closed,
    /// Closed for now but will open later today.
    OpeningAt(TimeOfDay),
    Unknown(UnknownReason),
}

impl OpenStatus {
    /// Short tag for this status: `open`, `closed`, `opening` or `unknown`.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
            Self::Closed => "closed",
            Self::OpeningAt(_) => "opening",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Name of the style class used to render this status as a badge.
    pub fn style(&self) -> &'static str {
        match self {
            Self::Open(_) => "status-open",
            Self::Closed => "status-closed",
            Self::OpeningAt(_) => "status-opening",
            Self::Unknown(_) => "status-unknown",
        }
    }

    /// Human-readable label, such as "Open Now" or "Opens 5pm".
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl Display for OpenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(OpenReason::AlwaysOpen) => write!(f, "Open 24/7"),
            Self::Open(OpenReason::Now) => write!(f, "Open Now"),
            Self::Closed => write!(f, "Closed"),
            Self::OpeningAt(time) => write!(f, "Opens {}", time.twelve_hour()),
            Self::Unknown(UnknownReason::Missing) => write!(f, "Hours unknown"),
            Self::Unknown(UnknownReason::CheckHours) => write!(f, "Check hours"),
        }
    }
}
