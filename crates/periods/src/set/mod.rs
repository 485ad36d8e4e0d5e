//! Union of many periods.
//!
//! [`PeriodSet`] holds periods in declaration order and answers containment
//! as a short-circuiting OR over its members. An empty set contains nothing.

mod loader;


use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::{self, Clock};
use crate::period::{Period, Window};

pub use self::loader::DeclarationFormat;

/// An ordered collection of periods of any kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSet {
    #[serde(default)]
    periods: Vec<Period>,
}

impl PeriodSet {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Whether any member contains `t`.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.periods.iter().any(|p| p.contains(t))
    }

    /// Whether any member contains the current instant.
    ///
    /// The clock is sampled once, so every member is judged against the same
    /// instant.
    pub fn contains_now(&self) -> bool {
        self.contains(clock::now())
    }

    pub fn contains_on(&self, clock: &dyn Clock) -> bool {
        self.contains(clock.now())
    }

    /// Members containing `t`, in declaration order.
    pub fn active_at(&self, t: NaiveDateTime) -> Vec<&Period> {
        self.periods.iter().filter(|p| p.contains(t)).collect()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl From<Vec<Period>> for PeriodSet {
    fn from(periods: Vec<Period>) -> Self {
        Self::new(periods)
    }
}

impl FromIterator<Period> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for PeriodSet {
    type Item = Period;
    type IntoIter = std::vec::IntoIter<Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeriodSet {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
