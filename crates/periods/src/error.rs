//! Error types for edge materialization and occurrence queries.

use std::fmt;

use chrono::Weekday;

use crate::schema::PeriodKind;

/// Errors returned by edge materialization and occurrence queries.
///
/// Every error is terminal for the single query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// An hour:minute or timestamp string failed to parse.
    #[error("{0}")]
    Format(String),

    /// A weekly edge was materialized against an instant on another weekday.
    #[error("day mismatch: edge is on {edge}, instant is on {instant}")]
    DayMismatch { edge: Weekday, instant: Weekday },

    /// A current-occurrence query was issued while the period is inactive.
    #[error("period is not active")]
    NotActive,

    /// A once period has no occurrence left in the future.
    #[error("no next occurrence for once period")]
    NoFutureOccurrence,

    /// A once period has no occurrence in the past.
    #[error("no previous occurrence for once period")]
    NoPastOccurrence,

    /// Always/never periods have no bounded occurrence.
    #[error("{kind} period has no {boundary}")]
    UndefinedBoundary { kind: PeriodKind, boundary: Boundary },

    /// The occurrence falls outside the representable calendar.
    #[error("occurrence is outside the representable calendar range")]
    OutOfRange,
}

/// Result alias for period operations.
pub type Result<T> = std::result::Result<T, PeriodError>;

/// The occurrence boundary a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    CurrentStart,
    CurrentEnd,
    NextStart,
    NextEnd,
    PreviousStart,
    PreviousEnd,
}

impl Boundary {
    pub const ALL: [Boundary; 6] = [
        Boundary::CurrentStart,
        Boundary::CurrentEnd,
        Boundary::NextStart,
        Boundary::NextEnd,
        Boundary::PreviousStart,
        Boundary::PreviousEnd,
    ];
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::CurrentStart => write!(f, "current start"),
            Boundary::CurrentEnd => write!(f, "current end"),
            Boundary::NextStart => write!(f, "next start"),
            Boundary::NextEnd => write!(f, "next end"),
            Boundary::PreviousStart => write!(f, "previous start"),
            Boundary::PreviousEnd => write!(f, "previous end"),
        }
    }
}
