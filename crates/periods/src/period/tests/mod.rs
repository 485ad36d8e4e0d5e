//! Tests for period variants.
//!
//! Fixed calendar used throughout: week of Sunday 2025-08-17 to Saturday
//! 2025-08-23 (2025-08-22 is a Friday).

mod fixed;
mod weekly;

use chrono::{NaiveDate, NaiveDateTime};

/// Instant on 2025-08-`day` at `hour:minute`.
fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Every minute of the week starting Sunday 2025-08-17 00:00.
fn week_minutes() -> impl Iterator<Item = NaiveDateTime> {
    let start = at(17, 0, 0);
    (0..7 * 24 * 60).map(move |m| start + chrono::Duration::minutes(m))
}
