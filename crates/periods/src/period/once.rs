//! A window that occurs exactly once.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{PeriodLabel, Window};
use crate::edge::{Edge, TimestampEdge};
use crate::error::{PeriodError, Result};

/// A single window between two absolute instants.
///
/// `from > to` is not rejected; such a window contains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OncePeriod {
    #[serde(flatten)]
    pub label: PeriodLabel,
    pub from: TimestampEdge,
    pub to: TimestampEdge,
}

impl OncePeriod {
    pub fn new(label: PeriodLabel, from: TimestampEdge, to: TimestampEdge) -> Self {
        Self { label, from, to }
    }

    fn is_future(&self, now: NaiveDateTime) -> bool {
        self.from.after(now)
    }

    fn is_past(&self, now: NaiveDateTime) -> bool {
        self.to.before(now)
    }
}

impl Window for OncePeriod {
    fn contains(&self, t: NaiveDateTime) -> bool {
        self.from.before_or_equal(t) && self.to.after_or_equal(t)
    }

    fn current_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return Ok(self.from.timestamp);
        }
        Err(PeriodError::NotActive)
    }

    fn current_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.contains(now) {
            return Ok(self.to.timestamp);
        }
        Err(PeriodError::NotActive)
    }

    fn next_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_future(now) {
            return Ok(self.from.timestamp);
        }
        Err(PeriodError::NoFutureOccurrence)
    }

    fn next_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_future(now) {
            return Ok(self.to.timestamp);
        }
        Err(PeriodError::NoFutureOccurrence)
    }

    fn previous_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_past(now) {
            return Ok(self.from.timestamp);
        }
        Err(PeriodError::NoPastOccurrence)
    }

    fn previous_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_past(now) {
            return Ok(self.to.timestamp);
        }
        Err(PeriodError::NoPastOccurrence)
    }
}
