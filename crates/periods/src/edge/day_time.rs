//! Weekday + hour edge for weekly periods.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, HourMinute};
use crate::error::{PeriodError, Result};

/// Weekly boundary: a weekday and an `"HH:MM"` hour on that day.
///
/// Weekdays order linearly from Sunday (0) to Saturday (6); comparison
/// against an instant looks at the weekday first and only falls through to
/// the hour when both are on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDayTimeEdge", into = "RawDayTimeEdge")]
pub struct DayTimeEdge {
    pub day: Weekday,
    pub hour: String,
}

impl DayTimeEdge {
    pub fn new(day: Weekday, hour: impl Into<String>) -> Self {
        Self {
            day,
            hour: hour.into(),
        }
    }

    pub fn hour_minute(&self) -> Result<HourMinute> {
        self.hour.parse()
    }

    /// Sunday-based index of the edge's weekday.
    pub fn day_index(&self) -> u32 {
        weekday_index(self.day)
    }

    /// Combine `t`'s calendar date with the edge's hour:minute.
    ///
    /// Only valid when `t` already falls on the edge's weekday.
    pub fn edge_timestamp(&self, t: NaiveDateTime) -> Result<NaiveDateTime> {
        if t.weekday() != self.day {
            return Err(PeriodError::DayMismatch {
                edge: self.day,
                instant: t.weekday(),
            });
        }
        Ok(self.hour_minute()?.on(t.date()))
    }

    /// Lexicographic (weekday, hour) ordering between two weekly edges.
    pub fn order(&self, other: &DayTimeEdge) -> Ordering {
        self.day_index().cmp(&other.day_index()).then_with(|| {
            match (self.hour_minute(), other.hour_minute()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => self.hour.cmp(&other.hour),
            }
        })
    }
}

impl Edge for DayTimeEdge {
    fn compare(&self, t: NaiveDateTime) -> Option<Ordering> {
        match self.day_index().cmp(&weekday_index(t.weekday())) {
            Ordering::Equal => match self.edge_timestamp(t) {
                Ok(ts) => Some(ts.cmp(&t)),
                Err(e) => {
                    debug!(day = %self.day, hour = %self.hour, error = %e, "weekly edge not comparable");
                    None
                }
            },
            other => Some(other),
        }
    }
}

/// Sunday = 0 .. Saturday = 6.
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

/// Parse a full weekday name, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "sunday" => Ok(Weekday::Sun),
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        _ => Err(PeriodError::Format(format!("invalid weekday: {s}"))),
    }
}

/// Lowercase full weekday name, as used in declarations.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

#[derive(Serialize, Deserialize)]
struct RawDayTimeEdge {
    day: String,
    hour: String,
}

impl TryFrom<RawDayTimeEdge> for DayTimeEdge {
    type Error = PeriodError;

    fn try_from(raw: RawDayTimeEdge) -> Result<Self> {
        Ok(Self::new(parse_weekday(&raw.day)?, raw.hour))
    }
}

impl From<DayTimeEdge> for RawDayTimeEdge {
    fn from(edge: DayTimeEdge) -> Self {
        Self {
            day: weekday_name(edge.day).to_string(),
            hour: edge.hour,
        }
    }
}
