//! A period that contains every instant.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{PeriodLabel, Window};
use crate::error::{Boundary, PeriodError, Result};
use crate::schema::PeriodKind;

/// Always open; has no start or end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysPeriod {
    #[serde(flatten)]
    pub label: PeriodLabel,
}

impl AlwaysPeriod {
    pub fn new(label: PeriodLabel) -> Self {
        Self { label }
    }
}

fn undefined(boundary: Boundary) -> PeriodError {
    PeriodError::UndefinedBoundary {
        kind: PeriodKind::Always,
        boundary,
    }
}

impl Window for AlwaysPeriod {
    fn contains(&self, _t: NaiveDateTime) -> bool {
        true
    }

    fn current_start_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::CurrentStart))
    }

    fn current_end_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::CurrentEnd))
    }

    fn next_start_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::NextStart))
    }

    fn next_end_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::NextEnd))
    }

    fn previous_start_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::PreviousStart))
    }

    fn previous_end_at(&self, _now: NaiveDateTime) -> Result<NaiveDateTime> {
        Err(undefined(Boundary::PreviousEnd))
    }
}
