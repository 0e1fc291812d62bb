//! Availability resolution: is the provider open at a requested instant,
//! and if not, when is the next open slot?
//!
//! The resolver scans the requested day's intervals in order, then rolls
//! forward day by day when nothing remains today. The forward scan is
//! bounded to one full week, so a schedule with no open intervals at all
//! yields a distinguished outcome instead of looping or faulting.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::schedule::WeeklySchedule;

/// A specific date and time at which availability begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Outcome of an availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The requested instant falls inside an open interval.
    Available,
    /// Closed at the requested instant; the next open slot is attached.
    Unavailable { next_slot: Slot },
    /// Every day of the week is closed. No slot exists at all.
    NoUpcomingSlot,
}

/// How far the rollover scan looks before concluding the schedule has no
/// open intervals. Seven days visits every weekday exactly once, including
/// the requested weekday again one week out.
const MAX_LOOKAHEAD_DAYS: u64 = 7;

/// Resolve availability for a requested date and time against a weekly
/// schedule.
///
/// Interval bounds are inclusive on both sides: a request at exactly an
/// interval's start or end is `Available`. A closed day (no entry for the
/// weekday) is treated the same as a day whose intervals are all in the
/// past, and falls through to the forward scan.
///
/// Pure function of its inputs; calling it twice with the same arguments
/// yields the same result.
pub fn resolve(date: NaiveDate, time: NaiveTime, schedule: &WeeklySchedule) -> Availability {
    // Intervals are sorted within the day, so the first interval starting
    // after the requested time is today's next opening.
    for interval in schedule.for_weekday(date.weekday()) {
        if interval.contains(time) {
            return Availability::Available;
        }
        if time < interval.start {
            return Availability::Unavailable {
                next_slot: Slot {
                    date,
                    time: interval.start,
                },
            };
        }
    }

    // Nothing left today: roll forward to the first day with any interval.
    for offset in 1..=MAX_LOOKAHEAD_DAYS {
        let candidate = date + Days::new(offset);
        if let Some(first) = schedule.for_weekday(candidate.weekday()).first() {
            return Availability::Unavailable {
                next_slot: Slot {
                    date: candidate,
                    time: first.start,
                },
            };
        }
    }

    Availability::NoUpcomingSlot
}
