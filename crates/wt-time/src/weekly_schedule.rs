//! `WeeklySchedule` — per-weekday work intervals.

use std::collections::HashMap;

use chrono::Weekday;
use wt_core::ensure_config;
use wt_core::errors::Result;

use crate::time_interval::TimeInterval;

/// The work intervals of a week, keyed by day of week.
///
/// Within one weekday the intervals never overlap (validated at
/// construction); at least one weekday carries a non-empty set. A weekday
/// without intervals is a non-working day, e.g. the weekend.
///
/// The descending order is precomputed at construction so that backward
/// searches do not re-sort per call.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    ascending: [Vec<TimeInterval>; 7],
    descending: [Vec<TimeInterval>; 7],
}

impl WeeklySchedule {
    /// Create a schedule from a mapping of weekday to work intervals.
    ///
    /// Intervals are sorted ascending by begin per day. Construction fails if
    /// any two intervals on the same day overlap, or if no weekday carries
    /// any interval. Touching intervals (one ends where the next begins) are
    /// legal.
    pub fn new(intervals: HashMap<Weekday, Vec<TimeInterval>>) -> Result<Self> {
        let mut ascending: [Vec<TimeInterval>; 7] = Default::default();
        for (day, mut list) in intervals {
            list.sort_by_key(TimeInterval::begin);
            for pair in list.windows(2) {
                ensure_config!(
                    pair[1].begin() >= pair[0].end(),
                    "overlapping work intervals on {day}: {} and {}",
                    pair[0],
                    pair[1]
                );
            }
            ascending[day.num_days_from_monday() as usize] = list;
        }
        ensure_config!(
            ascending.iter().any(|list| !list.is_empty()),
            "no working time configured on any day of the week"
        );

        let descending = {
            let mut descending = ascending.clone();
            for list in &mut descending {
                list.reverse();
            }
            descending
        };
        Ok(WeeklySchedule {
            ascending,
            descending,
        })
    }

    /// Begin building a schedule.
    pub fn builder() -> WeeklyScheduleBuilder {
        WeeklyScheduleBuilder::default()
    }

    /// The degenerate whole-day configuration: Monday through Friday, one
    /// interval each spanning the entire day.
    ///
    /// Under this schedule the engine performs plain business-day arithmetic.
    pub fn standard_week() -> Self {
        Self::builder()
            .weekdays(vec![TimeInterval::all_day()])
            .build()
            .expect("a whole-day week is a valid schedule")
    }

    /// The intervals of `day`, ascending by begin. Empty for a non-working
    /// day.
    pub fn intervals_ascending(&self, day: Weekday) -> &[TimeInterval] {
        &self.ascending[day.num_days_from_monday() as usize]
    }

    /// The intervals of `day`, descending by begin.
    pub fn intervals_descending(&self, day: Weekday) -> &[TimeInterval] {
        &self.descending[day.num_days_from_monday() as usize]
    }

    /// Return `true` if `day` carries any work interval.
    pub fn has_work_on(&self, day: Weekday) -> bool {
        !self.intervals_ascending(day).is_empty()
    }
}

/// Builder for [`WeeklySchedule`].
#[derive(Debug, Default)]
pub struct WeeklyScheduleBuilder {
    intervals: HashMap<Weekday, Vec<TimeInterval>>,
}

impl WeeklyScheduleBuilder {
    /// Set the work intervals of one weekday, replacing any previous value.
    pub fn day(mut self, day: Weekday, intervals: Vec<TimeInterval>) -> Self {
        self.intervals.insert(day, intervals);
        self
    }

    /// Set the same work intervals for Monday through Friday.
    pub fn weekdays(mut self, intervals: Vec<TimeInterval>) -> Self {
        use Weekday::*;
        for day in [Mon, Tue, Wed, Thu, Fri] {
            self.intervals.insert(day, intervals.clone());
        }
        self
    }

    /// Validate and build the schedule.
    pub fn build(self) -> Result<WeeklySchedule> {
        WeeklySchedule::new(self.intervals)
    }
}
