//! # worktime
//!
//! A working-time calculation engine: business-hour arithmetic over holiday
//! calendars and weekly schedules, for due-date computation, SLA checks, and
//! task-age monitoring.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `wt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! worktime = "0.1"
//! ```
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use worktime::time::{
//!     HolidayCalendar, TimeInterval, TimeOfDay, WeeklySchedule, WorkingTimeCalculator,
//! };
//!
//! let nine_to_five = TimeInterval::new(
//!     TimeOfDay::from_hms(9, 0, 0)?,
//!     TimeOfDay::from_hms(17, 0, 0)?,
//! )?;
//! let schedule = WeeklySchedule::builder().weekdays(vec![nine_to_five]).build()?;
//! let calculator =
//!     WorkingTimeCalculator::new(HolidayCalendar::new(true, false, Default::default()), schedule, Utc);
//!
//! // Friday 16:00 plus two working hours lands on Monday 10:00.
//! let start = Utc.with_ymd_and_hms(2024, 6, 7, 16, 0, 0).unwrap();
//! let due = calculator.add_working_time(start, TimeDelta::hours(2))?;
//! assert_eq!(due, Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap());
//! # Ok::<(), worktime::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy and shared definitions.
pub use wt_core as core;

/// The working-time engine: calendars, schedules, and the calculator.
pub use wt_time as time;
