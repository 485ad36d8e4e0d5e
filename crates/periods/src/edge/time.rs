//! Hour-of-day edge for daily periods.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, HourMinute};
use crate::error::Result;

/// Hour-of-day boundary (`"HH:MM"`), recurring on every calendar day.
///
/// The hour is kept as declared and parsed on use, so a malformed value
/// surfaces as [`PeriodError::Format`](crate::PeriodError::Format) from
/// [`edge_timestamp`](TimeEdge::edge_timestamp) and as "non-comparable" from
/// the [`Edge`] predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeEdge {
    pub hour: String,
}

impl TimeEdge {
    pub fn new(hour: impl Into<String>) -> Self {
        Self { hour: hour.into() }
    }

    pub fn hour_minute(&self) -> Result<HourMinute> {
        self.hour.parse()
    }

    /// Combine `base`'s calendar date with the edge's hour:minute.
    pub fn edge_timestamp(&self, base: NaiveDateTime) -> Result<NaiveDateTime> {
        Ok(self.hour_minute()?.on(base.date()))
    }

    /// Ordering between two daily edges by hour of day.
    ///
    /// Falls back to comparing the raw strings when either hour is malformed.
    pub fn order(&self, other: &TimeEdge) -> Ordering {
        match (self.hour_minute(), other.hour_minute()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => self.hour.cmp(&other.hour),
        }
    }
}

impl Edge for TimeEdge {
    fn compare(&self, t: NaiveDateTime) -> Option<Ordering> {
        match self.edge_timestamp(t) {
            Ok(ts) => Some(ts.cmp(&t)),
            Err(e) => {
                debug!(hour = %self.hour, error = %e, "daily edge not comparable");
                None
            }
        }
    }
}
