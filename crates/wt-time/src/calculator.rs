//! `WorkingTimeCalculator` — the public entry point of the engine.
//!
//! Converts between wall-clock timestamps and working time: duration that
//! accrues only within configured work intervals, skipping weekends,
//! holidays, and non-working hours.

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
    Weekday,
};
use wt_core::ensure;
use wt_core::errors::Result;

use crate::holiday_calendar::HolidayCalendar;
use crate::time_interval::TimeInterval;
use crate::time_of_day::TimeOfDay;
use crate::weekly_schedule::WeeklySchedule;
use crate::work_slot::WorkSlot;

/// Working-time arithmetic over a holiday calendar and a weekly schedule.
///
/// All operations take and return instants (`DateTime<Utc>`); calendar dates
/// and weekdays are derived in the reference zone `Tz` supplied at
/// construction. The calculator is immutable after construction (except for
/// the Easter cache inside the holiday calendar) and safe for concurrent use.
///
/// Slot walks advance one calendar day at a time past holidays and
/// non-working days. A configuration in which every day of the year is a
/// holiday would walk forever; bounding the lookahead is the caller's
/// responsibility, not a schedule invariant.
#[derive(Debug)]
pub struct WorkingTimeCalculator<Tz: TimeZone> {
    holidays: HolidayCalendar,
    schedule: WeeklySchedule,
    zone: Tz,
}

impl<Tz: TimeZone> WorkingTimeCalculator<Tz> {
    /// Create a calculator from its two configuration halves and the
    /// reference zone.
    pub fn new(holidays: HolidayCalendar, schedule: WeeklySchedule, zone: Tz) -> Self {
        WorkingTimeCalculator {
            holidays,
            schedule,
            zone,
        }
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// The weekly schedule.
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    // ── Timestamp arithmetic ──────────────────────────────────────────────

    /// Advance `start` by `duration` of working time.
    ///
    /// A `start` outside working hours is clamped forward to the next slot
    /// opening, so a zero duration returns that opening.
    ///
    /// Fails with an invalid-argument error if `duration` is negative.
    pub fn add_working_time(
        &self,
        start: DateTime<Utc>,
        duration: TimeDelta,
    ) -> Result<DateTime<Utc>> {
        ensure!(
            duration >= TimeDelta::zero(),
            "working time to add must not be negative, got {duration}"
        );
        let mut current = start;
        let mut remaining = duration;
        loop {
            let slot = self.slot_on_or_after(current);
            let earliest = slot.earliest_start(current);
            let available = slot.end() - earliest;
            if remaining <= available {
                return Ok(earliest + remaining);
            }
            remaining -= available;
            current = slot.end();
        }
    }

    /// Move `start` back by `duration` of working time.
    ///
    /// A `start` outside working hours is clamped backward to the previous
    /// slot end, so a zero duration returns that end.
    ///
    /// Fails with an invalid-argument error if `duration` is negative.
    pub fn subtract_working_time(
        &self,
        start: DateTime<Utc>,
        duration: TimeDelta,
    ) -> Result<DateTime<Utc>> {
        ensure!(
            duration >= TimeDelta::zero(),
            "working time to subtract must not be negative, got {duration}"
        );
        let mut current = start;
        let mut remaining = duration;
        loop {
            let slot = self.slot_on_or_before(current);
            let latest = slot.latest_end(current);
            let available = latest - slot.start();
            if remaining <= available {
                return Ok(latest - remaining);
            }
            remaining -= available;
            // One tick before the slot start, so the backward search cannot
            // match this slot again.
            current = slot.start() - TimeDelta::nanoseconds(1);
        }
    }

    /// The working time elapsed between two timestamps, in either order.
    pub fn working_time_between(
        &self,
        a: DateTime<Utc>,
        b: DateTime<Utc>,
    ) -> Result<TimeDelta> {
        let (mut from, to) = if a <= b { (a, b) } else { (b, a) };
        let mut total = TimeDelta::zero();
        loop {
            let slot = self.slot_on_or_after(from);
            let earliest = slot.earliest_start(from);
            if slot.end() >= to {
                if slot.start() <= to {
                    return Ok(total + (to - earliest));
                }
                // Both endpoints fall in the gap before this slot: no working
                // time, even though `to` may be far from `from`. Preserved
                // source behavior.
                return Ok(total);
            }
            total += slot.end() - earliest;
            from = slot.end();
        }
    }

    // ── Day-granularity predicates ────────────────────────────────────────

    /// Return `true` if the timestamp's calendar date (in the reference
    /// zone) is a working day: not a holiday, and the schedule carries work
    /// intervals for its weekday.
    pub fn is_working_day(&self, timestamp: DateTime<Utc>) -> bool {
        let date = self.local_date(timestamp);
        !self.holidays.is_holiday(date) && self.schedule.has_work_on(date.weekday())
    }

    /// Return `true` if the timestamp's calendar date falls on a Saturday or
    /// Sunday in the reference zone.
    pub fn is_weekend(&self, timestamp: DateTime<Utc>) -> bool {
        matches!(
            self.local_date(timestamp).weekday(),
            Weekday::Sat | Weekday::Sun
        )
    }

    /// Return `true` if the timestamp's calendar date is a holiday.
    pub fn is_holiday(&self, timestamp: DateTime<Utc>) -> bool {
        self.holidays.is_holiday(self.local_date(timestamp))
    }

    /// Return `true` if the timestamp's calendar date is a national holiday,
    /// regardless of whether national holidays are enabled.
    pub fn is_national_holiday(&self, timestamp: DateTime<Utc>) -> bool {
        self.holidays.is_national_holiday(self.local_date(timestamp))
    }

    // ── Slot location ─────────────────────────────────────────────────────

    /// The first work slot whose end is strictly after `reference`.
    ///
    /// Holidays and days without intervals are skipped one calendar day at a
    /// time.
    fn slot_on_or_after(&self, reference: DateTime<Utc>) -> WorkSlot {
        let mut date = self.local_date(reference);
        loop {
            if !self.holidays.is_holiday(date) {
                for interval in self.schedule.intervals_ascending(date.weekday()) {
                    let slot = self.anchor(date, interval);
                    if slot.end() > reference {
                        return slot;
                    }
                }
            }
            date = date.succ_opt().expect("date within supported range");
        }
    }

    /// The last work slot whose start is at or before `reference`.
    fn slot_on_or_before(&self, reference: DateTime<Utc>) -> WorkSlot {
        let mut date = self.local_date(reference);
        loop {
            if !self.holidays.is_holiday(date) {
                for interval in self.schedule.intervals_descending(date.weekday()) {
                    let slot = self.anchor(date, interval);
                    if slot.start() <= reference {
                        return slot;
                    }
                }
            }
            date = date.pred_opt().expect("date within supported range");
        }
    }

    /// Anchor a work interval to a concrete date in the reference zone.
    fn anchor(&self, date: NaiveDate, interval: &TimeInterval) -> WorkSlot {
        WorkSlot::new(
            self.instant_at(date, interval.begin()),
            self.instant_at(date, interval.end()),
        )
    }

    /// The instant at which `time` occurs on `date` in the reference zone.
    ///
    /// The end-of-day sentinel anchors to the following date's midnight.
    fn instant_at(&self, date: NaiveDate, time: TimeOfDay) -> DateTime<Utc> {
        let naive = match time.to_naive_time() {
            Some(in_day) => date.and_time(in_day),
            None => date
                .succ_opt()
                .expect("date within supported range")
                .and_time(NaiveTime::MIN),
        };
        self.resolve_local(naive)
    }

    /// Resolve a wall-clock time in the reference zone to an instant.
    ///
    /// An ambiguous time (clocks rolled back) resolves to the earlier
    /// instant. A nonexistent time (clocks rolled forward past it) resolves
    /// to the first representable wall-clock time after the gap.
    fn resolve_local(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        let mut candidate = naive;
        loop {
            match self.zone.from_local_datetime(&candidate) {
                LocalResult::Single(instant) => return instant.with_timezone(&Utc),
                LocalResult::Ambiguous(earlier, _) => return earlier.with_timezone(&Utc),
                LocalResult::None => candidate += TimeDelta::minutes(15),
            }
        }
    }

    /// The calendar date of `timestamp` in the reference zone.
    fn local_date(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.zone).date_naive()
    }
}
