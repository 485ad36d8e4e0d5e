use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use timewindow_periods::edge::TIMESTAMP_FORMAT;
use timewindow_periods::{Boundary, Period, PeriodKind, PeriodSet, Window};

/// Outcome of one occurrence query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryReport {
    pub boundary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Evaluation of a single period at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    pub name: String,
    pub kind: PeriodKind,
    pub active: bool,
    pub boundaries: Vec<BoundaryReport>,
}

/// Evaluation of a whole declaration at an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub at: String,
    pub contains: bool,
    pub periods: Vec<PeriodReport>,
}

fn format_instant(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

impl PeriodReport {
    /// Always/never periods have no occurrences, so they carry no boundary rows.
    pub fn evaluate(period: &Period, now: NaiveDateTime) -> Self {
        let kind = period.kind();
        let boundaries = if kind.is_bounded() {
            Boundary::ALL
                .into_iter()
                .map(|boundary| match period.boundary_at(boundary, now) {
                    Ok(t) => BoundaryReport {
                        boundary: boundary.to_string(),
                        instant: Some(format_instant(t)),
                        error: None,
                    },
                    Err(e) => BoundaryReport {
                        boundary: boundary.to_string(),
                        instant: None,
                        error: Some(e.to_string()),
                    },
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            name: period.name().to_string(),
            kind,
            active: period.contains(now),
            boundaries,
        }
    }
}

impl CheckReport {
    pub fn evaluate(set: &PeriodSet, now: NaiveDateTime) -> Self {
        Self {
            at: format_instant(now),
            contains: set.contains(now),
            periods: set.iter().map(|p| PeriodReport::evaluate(p, now)).collect(),
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.contains { "OPEN" } else { "CLOSED" };
        writeln!(f, "{} at {}", state, self.at)?;
        for period in &self.periods {
            let marker = if period.active { "*" } else { " " };
            writeln!(f, "{} [{}] {}", marker, period.kind, period.name)?;
            if !period.kind.is_bounded() {
                writeln!(f, "      unbounded")?;
            }
            for b in &period.boundaries {
                match (&b.instant, &b.error) {
                    (Some(t), _) => writeln!(f, "      {:<15} {}", b.boundary, t)?,
                    (None, Some(e)) => writeln!(f, "      {:<15} - ({})", b.boundary, e)?,
                    (None, None) => writeln!(f, "      {:<15} -", b.boundary)?,
                }
            }
        }
        Ok(())
    }
}
