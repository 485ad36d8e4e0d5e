//! Period variants and the shared [`Window`] capability set.
//!
//! Five leaf variants, none depending on another:
//! - [`WeeklyPeriod`]: weekday + hour window recurring every week
//! - [`DailyPeriod`]: hour window recurring every day
//! - [`OncePeriod`]: a single absolute window
//! - [`NeverPeriod`] / [`AlwaysPeriod`]: constant, unbounded
//!
//! [`Period`] is the closed sum type over them; decoding from declarations
//! lives in [`crate::schema`].

mod always;
mod daily;
mod label;
mod never;
mod once;
mod weekly;

#[cfg(test)]
mod tests;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::clock::{self, Clock};
use crate::error::{Boundary, PeriodError, Result};
use crate::schema::PeriodKind;

pub use self::always::AlwaysPeriod;
pub use self::daily::DailyPeriod;
pub use self::label::PeriodLabel;
pub use self::never::NeverPeriod;
pub use self::once::OncePeriod;
pub use self::weekly::WeeklyPeriod;

/// `t + delta`, or [`PeriodError::OutOfRange`] past the calendar limits.
pub(crate) fn shift(t: NaiveDateTime, delta: Duration) -> Result<NaiveDateTime> {
    t.checked_add_signed(delta).ok_or(PeriodError::OutOfRange)
}

/// Containment and occurrence queries shared by every period.
///
/// The `*_at` methods are pure functions of the supplied `now`; the
/// clock-less variants sample [`clock::now`] once and delegate.
pub trait Window {
    /// Whether instant `t` falls inside the window (boundaries inclusive).
    fn contains(&self, t: NaiveDateTime) -> bool;

    /// Start of the occurrence active at `now`.
    fn current_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    /// End of the occurrence active at `now`.
    fn current_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    /// Start of the occurrence after the one active at `now`, or of the
    /// nearest upcoming one when inactive.
    fn next_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    fn next_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    /// Start of the occurrence before the one active at `now`, or of the
    /// most recent one when inactive.
    fn previous_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    fn previous_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime>;

    fn contains_now(&self) -> bool {
        self.contains(clock::now())
    }

    fn contains_on(&self, clock: &dyn Clock) -> bool {
        self.contains(clock.now())
    }

    fn current_start(&self) -> Result<NaiveDateTime> {
        self.current_start_at(clock::now())
    }

    fn current_end(&self) -> Result<NaiveDateTime> {
        self.current_end_at(clock::now())
    }

    fn next_start(&self) -> Result<NaiveDateTime> {
        self.next_start_at(clock::now())
    }

    fn next_end(&self) -> Result<NaiveDateTime> {
        self.next_end_at(clock::now())
    }

    fn previous_start(&self) -> Result<NaiveDateTime> {
        self.previous_start_at(clock::now())
    }

    fn previous_end(&self) -> Result<NaiveDateTime> {
        self.previous_end_at(clock::now())
    }

    /// Dispatch an occurrence query by [`Boundary`].
    fn boundary_at(&self, boundary: Boundary, now: NaiveDateTime) -> Result<NaiveDateTime> {
        match boundary {
            Boundary::CurrentStart => self.current_start_at(now),
            Boundary::CurrentEnd => self.current_end_at(now),
            Boundary::NextStart => self.next_start_at(now),
            Boundary::NextEnd => self.next_end_at(now),
            Boundary::PreviousStart => self.previous_start_at(now),
            Boundary::PreviousEnd => self.previous_end_at(now),
        }
    }
}

/// Any of the five period variants.
///
/// Serializes as the declaration format, tagged with `type`. Deserialization
/// is implemented in [`crate::schema`] (two-pass, tag first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Period {
    Weekly(WeeklyPeriod),
    Daily(DailyPeriod),
    Once(OncePeriod),
    Never(NeverPeriod),
    Always(AlwaysPeriod),
}

impl Period {
    pub fn kind(&self) -> PeriodKind {
        match self {
            Period::Weekly(_) => PeriodKind::Weekly,
            Period::Daily(_) => PeriodKind::Daily,
            Period::Once(_) => PeriodKind::Once,
            Period::Never(_) => PeriodKind::Never,
            Period::Always(_) => PeriodKind::Always,
        }
    }

    pub fn label(&self) -> &PeriodLabel {
        match self {
            Period::Weekly(p) => &p.label,
            Period::Daily(p) => &p.label,
            Period::Once(p) => &p.label,
            Period::Never(p) => &p.label,
            Period::Always(p) => &p.label,
        }
    }

    pub fn name(&self) -> &str {
        &self.label().name
    }

    fn as_window(&self) -> &dyn Window {
        match self {
            Period::Weekly(p) => p,
            Period::Daily(p) => p,
            Period::Once(p) => p,
            Period::Never(p) => p,
            Period::Always(p) => p,
        }
    }
}

impl Window for Period {
    fn contains(&self, t: NaiveDateTime) -> bool {
        self.as_window().contains(t)
    }

    fn current_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().current_start_at(now)
    }

    fn current_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().current_end_at(now)
    }

    fn next_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().next_start_at(now)
    }

    fn next_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().next_end_at(now)
    }

    fn previous_start_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().previous_start_at(now)
    }

    fn previous_end_at(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.as_window().previous_end_at(now)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Period {
                fn from(p: $ty) -> Self {
                    Period::$variant(p)
                }
            }
        )*
    };
}

impl_from_variant!(
    Weekly(WeeklyPeriod),
    Daily(DailyPeriod),
    Once(OncePeriod),
    Never(NeverPeriod),
    Always(AlwaysPeriod),
);
