//! `HolidayCalendar` — decides whether a calendar date is a holiday.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::custom_holiday::CustomHoliday;
use crate::easter::EasterCalculator;

/// Signed day offsets from Easter Sunday for the moveable national holidays.
const GOOD_FRIDAY: i64 = -2;
const EASTER_MONDAY: i64 = 1;
const ASCENSION_DAY: i64 = 39;
const WHIT_MONDAY: i64 = 50;
const CORPUS_CHRISTI: i64 = 60;

/// Decides whether a calendar date is a holiday.
///
/// National holidays are the fixed dates
/// * New Year's Day (Jan 1)
/// * Labour Day (May 1)
/// * German Unity Day (Oct 3)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
///
/// plus the Easter-relative days: Good Friday, Easter Monday, Ascension Day,
/// Whit Monday, and (only when enabled) Corpus Christi. Custom holidays are
/// recurring (day, month) pairs checked independently of the national toggle.
///
/// Holiday status of a date depends only on its (day, month) and, for the
/// moveable holidays, its offset from that year's Easter Sunday, never on
/// the year itself for fixed or custom holidays. Immutable after construction
/// except for the Easter cache.
#[derive(Debug)]
pub struct HolidayCalendar {
    national_holidays_enabled: bool,
    corpus_christi_enabled: bool,
    custom_holidays: HashSet<CustomHoliday>,
    easter: EasterCalculator,
}

impl HolidayCalendar {
    /// Create a calendar from the two national-holiday flags and a set of
    /// custom holidays.
    pub fn new(
        national_holidays_enabled: bool,
        corpus_christi_enabled: bool,
        custom_holidays: HashSet<CustomHoliday>,
    ) -> Self {
        HolidayCalendar {
            national_holidays_enabled,
            corpus_christi_enabled,
            custom_holidays,
            easter: EasterCalculator::new(),
        }
    }

    /// A calendar with no holidays at all.
    pub fn empty() -> Self {
        HolidayCalendar::new(false, false, HashSet::new())
    }

    /// Return `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.national_holidays_enabled && self.is_national_holiday(date)
            || self.custom_holidays.contains(&CustomHoliday::of(date))
    }

    /// Return `true` if `date` is a national holiday, regardless of whether
    /// national holidays are enabled.
    pub fn is_national_holiday(&self, date: NaiveDate) -> bool {
        let d = date.day();
        let m = date.month();

        if // New Year's Day
           (d == 1 && m == 1)
            // Labour Day
            || (d == 1 && m == 5)
            // German Unity Day
            || (d == 3 && m == 10)
            // Christmas Day
            || (d == 25 && m == 12)
            // Boxing Day
            || (d == 26 && m == 12)
        {
            return true;
        }

        let easter_sunday = self.easter.easter_sunday(date.year());
        let offset = date.signed_duration_since(easter_sunday).num_days();
        offset == GOOD_FRIDAY
            || offset == EASTER_MONDAY
            || offset == ASCENSION_DAY
            || offset == WHIT_MONDAY
            || (self.corpus_christi_enabled && offset == CORPUS_CHRISTI)
    }
}
