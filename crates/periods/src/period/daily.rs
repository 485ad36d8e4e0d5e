//! Hour window recurring every calendar day.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{shift, PeriodLabel, Window};
use crate::edge::{Edge, HourMinute, TimeEdge};
use crate::error::{PeriodError, Result};

/// A daily window between two hours of the day.
///
/// - `from < to`: the window lies within one day.
/// - `from > to`: the window wraps across midnight.
/// - `from == to`: degenerate, open only at that exact minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPeriod {
    #[serde(flatten)]
    pub label: PeriodLabel,
    pub from: TimeEdge,
    pub to: TimeEdge,
}

impl DailyPeriod {
    pub fn new(label: PeriodLabel, from: TimeEdge, to: TimeEdge) -> Self {
        Self { label, from, to }
    }

    /// Whether the window crosses midnight.
    pub fn wraps(&self) -> bool {
        self.from.order(&self.to) == Ordering::Greater
    }

    fn period() -> Duration {
        Duration::days(1)
    }
}

/// The edge on `now`'s date if it is not earlier than `now`, otherwise on
/// the following day.
fn upcoming(edge: &TimeEdge, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let ts = edge.edge_timestamp(now)?;
    if ts >= now {
        Ok(ts)
    } else {
        shift(ts, DailyPeriod::period())
    }
}

/// The edge on `now`'s date if it is not later than `now`, otherwise on the
/// previous day.
fn preceding(edge: &TimeEdge, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let ts = edge.edge_timestamp(now)?;
    if ts <= now {
        Ok(ts)
    } else {
        shift(ts, -DailyPeriod::period())
    }
}

impl Window for DailyPeriod {
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
        let start = self.from.edge_timestamp(now)?;
        // Active before `from` on a wrapping window: it started yesterday.
        if self.wraps() && HourMinute::of(now) < self.from.hour_minute()? {
            return shift(start, -Self::period());
        }
        Ok(start)
    }

    fn current_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if !self.contains(now) {
            return Err(PeriodError::NotActive);
        }
        let end = self.to.edge_timestamp(now)?;
        // Active after `from` on a wrapping window: it ends tomorrow.
        if self.wraps() && HourMinute::of(now) >= self.from.hour_minute()? {
            return shift(end, Self::period());
        }
        Ok(end)
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
