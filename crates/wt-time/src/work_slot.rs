//! `WorkSlot` — a work interval anchored to one concrete calendar date.

use chrono::{DateTime, TimeDelta, Utc};

/// A work interval anchored to a concrete date, as a pair of absolute
/// timestamps: start inclusive, end exclusive.
///
/// Slots are derived on demand during a calculation and discarded afterwards;
/// they are never persisted or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl WorkSlot {
    pub(crate) fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start < end, "work slot must not be empty");
        WorkSlot { start, end }
    }

    /// The absolute start of the slot.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The absolute end of the slot.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The working time the whole slot carries.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Return `true` if `timestamp` falls within the slot.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// `reference` clamped up to the slot start: the earliest point at which
    /// working time can start to accrue within this slot.
    pub fn earliest_start(&self, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.start.max(reference)
    }

    /// `reference` clamped down to the slot end: the latest point at which
    /// working time can still accrue within this slot.
    pub fn latest_end(&self, reference: DateTime<Utc>) -> DateTime<Utc> {
        self.end.min(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn clamping() {
        let slot = WorkSlot::new(utc(2024, 6, 3, 8, 0), utc(2024, 6, 3, 12, 0));
        // Before opening: clamp up.
        assert_eq!(slot.earliest_start(utc(2024, 6, 3, 6, 0)), slot.start());
        // Inside: unchanged.
        assert_eq!(
            slot.earliest_start(utc(2024, 6, 3, 9, 0)),
            utc(2024, 6, 3, 9, 0)
        );
        // After closing: clamp down.
        assert_eq!(slot.latest_end(utc(2024, 6, 3, 15, 0)), slot.end());
        assert_eq!(
            slot.latest_end(utc(2024, 6, 3, 11, 0)),
            utc(2024, 6, 3, 11, 0)
        );
    }

    #[test]
    fn contains_is_half_open() {
        let slot = WorkSlot::new(utc(2024, 6, 3, 8, 0), utc(2024, 6, 3, 12, 0));
        assert!(slot.contains(slot.start()));
        assert!(!slot.contains(slot.end()));
        assert_eq!(slot.duration(), TimeDelta::hours(4));
    }
}
