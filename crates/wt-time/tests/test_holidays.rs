//! Holiday calendar integration tests: expected-holiday tables per year.

use std::collections::HashSet;

use chrono::NaiveDate;
use wt_time::{CustomHoliday, HolidayCalendar};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Collect all holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &HolidayCalendar, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) {
            holidays.push(d);
        }
        d = d.succ_opt().unwrap();
    }
    holidays
}

/// Assert that the holidays of `year` are exactly `expected`.
fn check_year(cal: &HolidayCalendar, year: i32, expected: &[NaiveDate]) {
    let calculated = holiday_list(cal, date(year, 1, 1), date(year, 12, 31));
    assert_eq!(
        calculated, expected,
        "holiday list mismatch for year {year}"
    );
}

#[test]
fn national_holidays_2023() {
    let cal = HolidayCalendar::new(true, false, HashSet::new());
    // Easter Sunday 2023: April 9.
    check_year(
        &cal,
        2023,
        &[
            date(2023, 1, 1),   // New Year's Day
            date(2023, 4, 7),   // Good Friday
            date(2023, 4, 10),  // Easter Monday
            date(2023, 5, 1),   // Labour Day
            date(2023, 5, 18),  // Ascension Day
            date(2023, 5, 29),  // Whit Monday
            date(2023, 10, 3),  // German Unity Day
            date(2023, 12, 25), // Christmas Day
            date(2023, 12, 26), // Boxing Day
        ],
    );
}

#[test]
fn national_holidays_2024_with_corpus_christi() {
    let cal = HolidayCalendar::new(true, true, HashSet::new());
    // Easter Sunday 2024: March 31.
    check_year(
        &cal,
        2024,
        &[
            date(2024, 1, 1),   // New Year's Day
            date(2024, 3, 29),  // Good Friday
            date(2024, 4, 1),   // Easter Monday
            date(2024, 5, 1),   // Labour Day
            date(2024, 5, 9),   // Ascension Day
            date(2024, 5, 20),  // Whit Monday
            date(2024, 5, 30),  // Corpus Christi
            date(2024, 10, 3),  // German Unity Day
            date(2024, 12, 25), // Christmas Day
            date(2024, 12, 26), // Boxing Day
        ],
    );
}

#[test]
fn custom_holidays_extend_the_national_set() {
    let custom: HashSet<_> = [
        CustomHoliday::new(24, 12).unwrap(),
        CustomHoliday::new(31, 12).unwrap(),
    ]
    .into();
    let cal = HolidayCalendar::new(true, false, custom);
    assert!(cal.is_holiday(date(2024, 12, 24)));
    assert!(cal.is_holiday(date(2024, 12, 25)));
    assert!(cal.is_holiday(date(2024, 12, 31)));
    assert!(!cal.is_holiday(date(2024, 12, 27)));
}

#[test]
fn custom_holidays_parse_from_configuration_text() {
    let custom: HashSet<CustomHoliday> = "24.12|31.12"
        .split('|')
        .map(|s| s.parse().unwrap())
        .collect();
    let cal = HolidayCalendar::new(false, false, custom);
    assert!(cal.is_holiday(date(2030, 12, 24)));
    assert!(cal.is_holiday(date(2030, 12, 31)));
    assert!(!cal.is_holiday(date(2030, 12, 25)));
}

#[test]
fn national_predicate_ignores_the_enable_flag() {
    let disabled = HolidayCalendar::new(false, false, HashSet::new());
    assert!(disabled.is_national_holiday(date(2024, 10, 3)));
    assert!(!disabled.is_holiday(date(2024, 10, 3)));
}

#[test]
fn holiday_status_is_independent_of_call_order() {
    let cal = HolidayCalendar::new(true, true, HashSet::new());
    // Interleave years so every call re-targets the single-slot Easter cache.
    let probes = [
        (date(2023, 4, 7), true),
        (date(2024, 3, 29), true),
        (date(2023, 4, 7), true),
        (date(2024, 5, 30), true),
        (date(2023, 6, 8), true), // Corpus Christi 2023
        (date(2024, 3, 31), false),
    ];
    for (probe, expected) in probes {
        assert_eq!(cal.is_holiday(probe), expected, "holiday status of {probe}");
    }
    for (probe, expected) in probes.iter().rev() {
        assert_eq!(cal.is_holiday(*probe), *expected, "holiday status of {probe}");
    }
}
