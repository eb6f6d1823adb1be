//! Easter Sunday computation with a one-slot cache.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, NaiveDate};

/// Computes the date of Easter Sunday for a given year.
///
/// The computation is the closed-form Meeus/Jones/Butcher algorithm for the
/// Gregorian calendar; no iterative search. The most recently requested year
/// is cached in a single atomic slot. Concurrent calls with different years
/// may both miss and both recompute; the result is deterministic either way,
/// so last-write-wins is sufficient and no lock is taken.
#[derive(Debug, Default)]
pub struct EasterCalculator {
    /// Packed `(year << 9) | day-of-year`; zero means empty (a day-of-year is
    /// never zero).
    cache: AtomicU64,
}

impl EasterCalculator {
    /// Create a calculator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The date of Easter Sunday in `year`.
    ///
    /// Valid for Gregorian years (1583 onwards).
    pub fn easter_sunday(&self, year: i32) -> NaiveDate {
        let packed = self.cache.load(Ordering::Relaxed);
        if packed != 0 && (packed >> 9) as u32 == year as u32 {
            let ordinal = (packed & 0x1ff) as u32;
            return NaiveDate::from_yo_opt(year, ordinal)
                .expect("cached ordinal came from a valid date");
        }
        let date = easter_sunday(year);
        let packed = (u64::from(year as u32) << 9) | u64::from(date.ordinal());
        self.cache.store(packed, Ordering::Relaxed);
        date
    }
}

/// Meeus/Jones/Butcher Gregorian computus.
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid March or April date")
}
