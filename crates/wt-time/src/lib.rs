//! # wt-time
//!
//! The working-time engine: converts between wall-clock timestamps and
//! working time: duration that accrues only during configured business
//! hours, skipping weekends and holidays.
//!
//! [`WorkingTimeCalculator`] is the public entry point; it composes a
//! [`HolidayCalendar`] and a [`WeeklySchedule`], both immutable after
//! construction, and operates in a caller-supplied reference zone.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The working-time calculator.
pub mod calculator;

/// Recurring (day, month) holidays.
pub mod custom_holiday;

/// Easter Sunday computation.
pub mod easter;

/// Holiday calendar: fixed, Easter-relative, and custom holidays.
pub mod holiday_calendar;

/// Half-open work interval within one day.
pub mod time_interval;

/// Clock time with an end-of-day sentinel.
pub mod time_of_day;

/// Per-weekday work intervals.
pub mod weekly_schedule;

/// A work interval anchored to a concrete date.
pub mod work_slot;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::WorkingTimeCalculator;
pub use custom_holiday::CustomHoliday;
pub use easter::EasterCalculator;
pub use holiday_calendar::HolidayCalendar;
pub use time_interval::TimeInterval;
pub use time_of_day::TimeOfDay;
pub use weekly_schedule::{WeeklySchedule, WeeklyScheduleBuilder};
pub use work_slot::WorkSlot;
