//! `CustomHoliday` — a recurring (day, month) holiday.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use wt_core::errors::{Error, Result};

/// A holiday that recurs on the same day and month every year.
///
/// Equality and hashing use the (day, month) pair only; there is no year.
/// February 29 is a legal value and matches only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CustomHoliday {
    day: u8,
    month: u8,
}

impl CustomHoliday {
    /// Create a holiday from day-of-month and month-of-year.
    pub fn new(day: u8, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Configuration(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let longest = longest_month(month);
        if day == 0 || day > longest {
            return Err(Error::Configuration(format!(
                "day {day} out of range [1, {longest}] for month {month}"
            )));
        }
        Ok(CustomHoliday { day, month })
    }

    /// The (day, month) pair of a concrete calendar date.
    pub fn of(date: NaiveDate) -> Self {
        CustomHoliday {
            day: date.day() as u8,
            month: date.month() as u8,
        }
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month of year (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return `true` if `date` falls on this holiday in any year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        u32::from(self.day) == date.day() && u32::from(self.month) == date.month()
    }
}

/// The longest a month can be in any year (February counts its leap length).
fn longest_month(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => unreachable!(),
    }
}

impl FromStr for CustomHoliday {
    type Err = Error;

    /// Parse the textual form `"<day>.<month>"`, e.g. `"24.12"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || Error::Configuration(format!("cannot parse custom holiday {s:?}, expected <day>.<month>"));
        let (day, month) = s.trim().split_once('.').ok_or_else(invalid)?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        CustomHoliday::new(day, month)
    }
}

impl TryFrom<String> for CustomHoliday {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CustomHoliday> for String {
    fn from(holiday: CustomHoliday) -> String {
        holiday.to_string()
    }
}

impl std::fmt::Display for CustomHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.day, self.month)
    }
}
