//! Absolute-instant edge for once periods.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Edge;
use crate::error::PeriodError;

/// Declaration format of a timestamp edge, in the local calendar.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimestampEdge", into = "RawTimestampEdge")]
pub struct TimestampEdge {
    pub timestamp: NaiveDateTime,
}

impl TimestampEdge {
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self { timestamp }
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(s: &str) -> Result<Self, PeriodError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Self::new)
            .map_err(|e| PeriodError::Format(format!("invalid timestamp '{s}': {e}")))
    }
}

impl Edge for TimestampEdge {
    fn compare(&self, t: NaiveDateTime) -> Option<Ordering> {
        Some(self.timestamp.cmp(&t))
    }
}

#[derive(Serialize, Deserialize)]
struct RawTimestampEdge {
    timestamp: String,
}

impl TryFrom<RawTimestampEdge> for TimestampEdge {
    type Error = PeriodError;

    fn try_from(raw: RawTimestampEdge) -> Result<Self, Self::Error> {
        Self::parse(&raw.timestamp)
    }
}

impl From<TimestampEdge> for RawTimestampEdge {
    fn from(edge: TimestampEdge) -> Self {
        Self {
            timestamp: edge.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
