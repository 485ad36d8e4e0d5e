//! Boundary markers of a period and their comparison against an instant.
//!
//! - [`TimeEdge`]: hour of day, used by daily periods
//! - [`DayTimeEdge`]: weekday + hour of day, used by weekly periods
//! - [`TimestampEdge`]: absolute instant, used by once periods
//!
//! Every predicate answers from the edge's point of view: `before(t)` is true
//! when the edge lies strictly before `t`.

mod day_time;
mod hour_minute;
mod time;
mod timestamp;


use std::cmp::Ordering;

use chrono::NaiveDateTime;

pub use self::day_time::{parse_weekday, weekday_index, weekday_name, DayTimeEdge};
pub use self::hour_minute::HourMinute;
pub use self::time::TimeEdge;
pub use self::timestamp::{TimestampEdge, TIMESTAMP_FORMAT};

/// Comparison of a boundary marker against an instant.
pub trait Edge {
    /// Order of the edge relative to `t`, or `None` when the edge cannot be
    /// compared (malformed hour). Non-comparable edges answer `false` to
    /// every predicate.
    fn compare(&self, t: NaiveDateTime) -> Option<Ordering>;

    fn before(&self, t: NaiveDateTime) -> bool {
        self.compare(t) == Some(Ordering::Less)
    }

    fn after(&self, t: NaiveDateTime) -> bool {
        self.compare(t) == Some(Ordering::Greater)
    }

    fn equal(&self, t: NaiveDateTime) -> bool {
        self.compare(t) == Some(Ordering::Equal)
    }

    fn before_or_equal(&self, t: NaiveDateTime) -> bool {
        self.before(t) || self.equal(t)
    }

    fn after_or_equal(&self, t: NaiveDateTime) -> bool {
        self.after(t) || self.equal(t)
    }
}
