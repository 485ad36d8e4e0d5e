//! Access point for the current instant.
//!
//! Every clock-backed query in the crate reads "now" through [`now`], so the
//! only source of non-determinism lives here. Tests and callers that need a
//! frozen instant use [`FixedClock`] or the `*_at` query variants directly.

use chrono::{Local, NaiveDateTime};

/// Source of the current local civil instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Current instant from the system clock.
pub fn now() -> NaiveDateTime {
    SystemClock.now()
}
