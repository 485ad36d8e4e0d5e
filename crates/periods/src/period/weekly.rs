//! Weekday + hour window recurring every week.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{shift, PeriodLabel, Window};
use crate::edge::{weekday_index, DayTimeEdge, Edge};
use crate::error::{PeriodError, Result};

/// A weekly window between two (weekday, hour) edges.
///
/// Edges order lexicographically on (weekday, hour) with Sunday first:
/// - `from` before `to`: the window lies within one week.
/// - `from` after `to`: the window wraps across the week boundary. This
///   includes same-day windows such as Monday 18:00 to Monday 08:00.
/// - equal: degenerate, open only at that exact weekly minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPeriod {
    #[serde(flatten)]
    pub label: PeriodLabel,
    pub from: DayTimeEdge,
    pub to: DayTimeEdge,
}

const DAYS_PER_WEEK: i64 = 7;

impl WeeklyPeriod {
    pub fn new(label: PeriodLabel, from: DayTimeEdge, to: DayTimeEdge) -> Self {
        Self { label, from, to }
    }

    /// Whether the window crosses the Saturday/Sunday rollover.
    pub fn wraps(&self) -> bool {
        self.from.order(&self.to) == Ordering::Greater
    }

    fn period() -> Duration {
        Duration::days(DAYS_PER_WEEK)
    }
}

/// Days to walk forward from `now` to reach `edge`, staying on `now`'s day
/// when the edge is not earlier than `now`.
fn days_forward(edge: &DayTimeEdge, now: NaiveDateTime) -> Result<i64> {
    let edge_day = i64::from(edge.day_index());
    let day = i64::from(weekday_index(now.weekday()));
    if edge_day > day || (edge_day == day && edge.edge_timestamp(now)? >= now) {
        Ok(edge_day - day)
    } else {
        Ok(DAYS_PER_WEEK - (day - edge_day))
    }
}

/// Days to walk back from `now` to reach `edge`, staying on `now`'s day when
/// the edge is not later than `now`.
fn days_back(edge: &DayTimeEdge, now: NaiveDateTime) -> Result<i64> {
    let edge_day = i64::from(edge.day_index());
    let day = i64::from(weekday_index(now.weekday()));
    if edge_day < day || (edge_day == day && edge.edge_timestamp(now)? <= now) {
        Ok(day - edge_day)
    } else {
        Ok(DAYS_PER_WEEK - (edge_day - day))
    }
}

fn upcoming(edge: &DayTimeEdge, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let days = days_forward(edge, now)?;
    edge.edge_timestamp(shift(now, Duration::days(days))?)
}

fn preceding(edge: &DayTimeEdge, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let days = days_back(edge, now)?;
    edge.edge_timestamp(shift(now, -Duration::days(days))?)
}

impl Window for WeeklyPeriod {
    fn contains(&self, t: NaiveDateTime) -> bool {
        match self.from.order(&self.to) {
            Ordering::Less => self.from.before_or_equal(t) && self.to.after_or_equal(t),
            Ordering::Greater => self.to.after_or_equal(t) || self.from.before_or_equal(t),
            Ordering::Equal => self.from.equal(t),
        }
    }

    fn current_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if !self.contains(now) {
            return Err(PeriodError::NotActive);
        }
        preceding(&self.from, now)
    }

    fn current_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if !self.contains(now) {
            return Err(PeriodError::NotActive);
        }
        upcoming(&self.to, now)
    }

    fn next_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return shift(self.current_start_at(now)?, Self::period());
        }
        upcoming(&self.from, now)
    }

    fn next_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return shift(self.current_end_at(now)?, Self::period());
        }
        upcoming(&self.to, now)
    }

    fn previous_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return shift(self.current_start_at(now)?, -Self::period());
        }
        preceding(&self.from, now)
    }

    fn previous_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return shift(self.current_end_at(now)?, -Self::period());
        }
        preceding(&self.to, now)
    }
}
