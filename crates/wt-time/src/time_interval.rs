//! `TimeInterval` — a half-open work interval within one day.

use wt_core::errors::{Error, Result};

use crate::time_of_day::TimeOfDay;

/// A work interval: begin inclusive, end exclusive.
///
/// An end of [`TimeOfDay::END_OF_DAY`] means the interval runs through
/// midnight into the next calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(TimeOfDay, TimeOfDay)", into = "(TimeOfDay, TimeOfDay)")
)]
pub struct TimeInterval {
    begin: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    /// Create an interval from `begin` (inclusive) to `end` (exclusive).
    ///
    /// Fails if `end` is not after `begin`. The begin cannot be the
    /// end-of-day sentinel, because the sentinel already belongs to the next
    /// calendar date.
    pub fn new(begin: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if begin.is_end_of_day() {
            return Err(Error::Configuration(
                "work interval cannot begin at end of day".into(),
            ));
        }
        if end <= begin {
            return Err(Error::Configuration(format!(
                "work interval end {end} must be after begin {begin}"
            )));
        }
        Ok(TimeInterval { begin, end })
    }

    /// An interval spanning the entire day.
    pub fn all_day() -> Self {
        TimeInterval {
            begin: TimeOfDay::MIDNIGHT,
            end: TimeOfDay::END_OF_DAY,
        }
    }

    /// The inclusive begin.
    pub fn begin(&self) -> TimeOfDay {
        self.begin
    }

    /// The exclusive end.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Return `true` if `time` falls within the interval.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.begin <= time && time < self.end
    }
}

impl TryFrom<(TimeOfDay, TimeOfDay)> for TimeInterval {
    type Error = Error;

    fn try_from((begin, end): (TimeOfDay, TimeOfDay)) -> Result<Self> {
        TimeInterval::new(begin, end)
    }
}

impl From<TimeInterval> for (TimeOfDay, TimeOfDay) {
    fn from(interval: TimeInterval) -> Self {
        (interval.begin, interval.end)
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
