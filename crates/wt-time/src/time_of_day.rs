//! `TimeOfDay` — a clock time with second resolution and an end-of-day
//! sentinel.
//!
//! Work intervals need to express "through midnight into the next calendar
//! date" as an interval end. Truncating that to `23:59:59` would silently
//! drop the last second of the day, so the type carries one extra value,
//! [`TimeOfDay::END_OF_DAY`] (86 400 seconds), which sorts after every in-day
//! value and makes ordinary comparison exact.

use chrono::NaiveTime;
use wt_core::errors::{Error, Result};

/// Seconds in a civil day.
const SECONDS_PER_DAY: u32 = 86_400;

/// A time of day as seconds from local midnight.
///
/// Valid values are `0..=86_400`; the maximum is the end-of-day sentinel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Midnight at the start of the day (`00:00:00`).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// The end-of-day sentinel: midnight at the *end* of the day, i.e. the
    /// start of the following calendar date.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(SECONDS_PER_DAY);

    /// Create a time of day from hour, minute, and second.
    ///
    /// `24:00:00` is not constructible this way; use
    /// [`TimeOfDay::END_OF_DAY`].
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour >= 24 {
            return Err(Error::Configuration(format!(
                "hour {hour} out of range [0, 24)"
            )));
        }
        if minute >= 60 {
            return Err(Error::Configuration(format!(
                "minute {minute} out of range [0, 60)"
            )));
        }
        if second >= 60 {
            return Err(Error::Configuration(format!(
                "second {second} out of range [0, 60)"
            )));
        }
        Ok(TimeOfDay(
            u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second),
        ))
    }

    /// Create a time of day from seconds since midnight.
    ///
    /// `86_400` yields the end-of-day sentinel.
    pub fn from_seconds(seconds: u32) -> Result<Self> {
        if seconds > SECONDS_PER_DAY {
            return Err(Error::Configuration(format!(
                "time of day {seconds}s out of range [0, {SECONDS_PER_DAY}]"
            )));
        }
        Ok(TimeOfDay(seconds))
    }

    /// Seconds since local midnight (`86_400` for the sentinel).
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0
    }

    /// Return `true` if this is the end-of-day sentinel.
    pub fn is_end_of_day(&self) -> bool {
        self.0 == SECONDS_PER_DAY
    }

    /// Convert to a [`chrono::NaiveTime`].
    ///
    /// Returns `None` for the end-of-day sentinel, which has no in-day
    /// representation; callers anchor it to the following date's midnight.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if self.is_end_of_day() {
            return None;
        }
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0)
    }
}

impl TryFrom<u32> for TimeOfDay {
    type Error = Error;

    fn try_from(seconds: u32) -> Result<Self> {
        TimeOfDay::from_seconds(seconds)
    }
}

impl From<TimeOfDay> for u32 {
    fn from(time: TimeOfDay) -> u32 {
        time.0
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let h = self.0 / 3600;
        let m = self.0 % 3600 / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hms_bounds() {
        assert_eq!(
            TimeOfDay::from_hms(8, 30, 0).unwrap().seconds_from_midnight(),
            8 * 3600 + 30 * 60
        );
        assert_eq!(TimeOfDay::from_hms(0, 0, 0).unwrap(), TimeOfDay::MIDNIGHT);
        assert!(TimeOfDay::from_hms(24, 0, 0).is_err());
        assert!(TimeOfDay::from_hms(12, 60, 0).is_err());
        assert!(TimeOfDay::from_hms(12, 0, 60).is_err());
    }

    #[test]
    fn end_of_day_sorts_last() {
        let latest_in_day = TimeOfDay::from_hms(23, 59, 59).unwrap();
        assert!(latest_in_day < TimeOfDay::END_OF_DAY);
        assert!(TimeOfDay::END_OF_DAY.is_end_of_day());
        assert!(!latest_in_day.is_end_of_day());
    }

    #[test]
    fn from_seconds_range() {
        assert!(TimeOfDay::from_seconds(86_400).is_ok());
        assert!(TimeOfDay::from_seconds(86_401).is_err());
    }

    #[test]
    fn naive_time_conversion() {
        let t = TimeOfDay::from_hms(13, 45, 30).unwrap();
        let naive = t.to_naive_time().unwrap();
        assert_eq!(naive, NaiveTime::from_hms_opt(13, 45, 30).unwrap());
        assert_eq!(TimeOfDay::END_OF_DAY.to_naive_time(), None);
    }

    #[test]
    fn display() {
        assert_eq!(TimeOfDay::from_hms(7, 5, 9).unwrap().to_string(), "07:05:09");
        assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "24:00:00");
    }
}
