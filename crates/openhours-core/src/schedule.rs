//! Weekly schedule model: per-weekday open intervals.
//!
//! A schedule maps each weekday to an ordered list of open intervals. An
//! absent or empty list denotes a closed day. The resolver assumes the
//! intervals within a day are sorted by start time and non-overlapping;
//! [`WeeklySchedule::validate`] enforces that at load time so the resolver
//! never has to sort defensively.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Serde adapter for the "HH:mm" wire format used by interval bounds.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A closed time range within one day during which the provider is open.
///
/// Both bounds are inclusive: a request at exactly `start` or exactly `end`
/// is inside the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl Interval {
    /// Whether `time` falls within this interval, endpoints included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Recurring weekly availability, keyed by day name.
///
/// Deserialized from the weekday mapping in a schedule document; weekdays
/// missing from the document come out as empty lists, so "absent" and
/// "explicitly empty" are the same thing: a closed day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    pub monday: Vec<Interval>,
    pub tuesday: Vec<Interval>,
    pub wednesday: Vec<Interval>,
    pub thursday: Vec<Interval>,
    pub friday: Vec<Interval>,
    pub saturday: Vec<Interval>,
    pub sunday: Vec<Interval>,
}

impl WeeklySchedule {
    /// The open intervals for `weekday`. Closed days give an empty slice.
    pub fn for_weekday(&self, weekday: Weekday) -> &[Interval] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Iterate the days in calendar order as (name, intervals) pairs.
    pub fn days(&self) -> impl Iterator<Item = (&'static str, &[Interval])> + '_ {
        [
            ("monday", self.monday.as_slice()),
            ("tuesday", self.tuesday.as_slice()),
            ("wednesday", self.wednesday.as_slice()),
            ("thursday", self.thursday.as_slice()),
            ("friday", self.friday.as_slice()),
            ("saturday", self.saturday.as_slice()),
            ("sunday", self.sunday.as_slice()),
        ]
        .into_iter()
    }

    /// Whether every day of the week is closed.
    pub fn is_empty(&self) -> bool {
        self.days().all(|(_, intervals)| intervals.is_empty())
    }

    /// Check the per-day invariants the resolver relies on: every interval
    /// ends no earlier than it starts, and consecutive intervals are sorted
    /// by start time without overlapping. A shared boundary instant between
    /// consecutive intervals is allowed.
    pub fn validate(&self) -> Result<()> {
        for (weekday, intervals) in self.days() {
            for interval in intervals {
                if interval.end < interval.start {
                    return Err(ScheduleError::EndBeforeStart {
                        weekday,
                        start: interval.start.format("%H:%M").to_string(),
                        end: interval.end.format("%H:%M").to_string(),
                    });
                }
            }
            for pair in intervals.windows(2) {
                if pair[1].start < pair[0].end {
                    return Err(ScheduleError::Unordered {
                        weekday,
                        at: pair[1].start.format("%H:%M").to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// On-disk schedule document shape: a top-level object whose
/// `availabilityTimings` key holds the weekday mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    pub availability_timings: WeeklySchedule,
}
