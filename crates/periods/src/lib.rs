//! Recurring and one-off availability windows.
//!
//! This crate provides:
//! - Edge markers (hour of day, weekday + hour, absolute timestamp) and their
//!   comparison against an instant
//! - Five period variants (weekly, daily, once, never, always) answering
//!   containment and current/next/previous occurrence queries
//! - Two-pass decoding of JSON/YAML period declarations
//! - [`PeriodSet`], the union of many periods, with a file loader
//!
//! All computation happens in the local civil calendar: instants are
//! [`chrono::NaiveDateTime`] values and no time-zone conversion is performed.

pub mod clock;
pub mod edge;
pub mod error;
pub mod period;
pub mod schema;
pub mod set;

pub use clock::{Clock, FixedClock, SystemClock};
pub use edge::{DayTimeEdge, Edge, HourMinute, TimeEdge, TimestampEdge};
pub use error::{Boundary, PeriodError, Result};
pub use period::{
    AlwaysPeriod, DailyPeriod, NeverPeriod, OncePeriod, Period, PeriodLabel, WeeklyPeriod, Window,
};
pub use schema::{DeclarationError, PeriodKind};
pub use set::{DeclarationFormat, PeriodSet};
