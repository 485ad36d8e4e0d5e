use chrono::{NaiveDate, Weekday};

use super::at;
use crate::clock::FixedClock;
use crate::edge::{DayTimeEdge, TimeEdge};
use crate::error::{Boundary, PeriodError};
use crate::period::{AlwaysPeriod, DailyPeriod, NeverPeriod, Period, PeriodLabel, WeeklyPeriod, Window};
use crate::schema::PeriodKind;

fn extremes() -> Vec<chrono::NaiveDateTime> {
    vec![
        NaiveDate::from_ymd_opt(1, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        at(22, 12, 0),
        NaiveDate::from_ymd_opt(9999, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap(),
    ]
}

#[test]
fn always_contains_everything() {
    let p = AlwaysPeriod::new(PeriodLabel::new("always period", "full period"));
    for t in extremes() {
        assert!(p.contains(t));
    }
    assert!(p.contains_now());
}

#[test]
fn never_contains_nothing() {
    let p = NeverPeriod::new(PeriodLabel::new("never period", "empty period"));
    for t in extremes() {
        assert!(!p.contains(t));
    }
    assert!(!p.contains_now());
}

#[test]
fn always_and_never_have_no_boundaries() {
    let now = at(22, 12, 0);
    for (period, kind) in [
        (Period::from(AlwaysPeriod::default()), PeriodKind::Always),
        (Period::from(NeverPeriod::default()), PeriodKind::Never),
    ] {
        for boundary in Boundary::ALL {
            assert_eq!(
                period.boundary_at(boundary, now),
                Err(PeriodError::UndefinedBoundary { kind, boundary })
            );
        }
        assert!(period.current_start().is_err());
        assert!(period.next_end().is_err());
        assert!(period.previous_end().is_err());
    }
}

#[test]
fn period_dispatches_to_variant() {
    let daily = DailyPeriod::new(
        PeriodLabel::new("cron time", "cleaning jobs"),
        TimeEdge::new("02:00"),
        TimeEdge::new("03:00"),
    );
    let period = Period::from(daily.clone());

    assert_eq!(period.kind(), PeriodKind::Daily);
    assert_eq!(period.name(), "cron time");
    assert_eq!(period.label().description, "cleaning jobs");

    let now = at(22, 2, 30);
    assert_eq!(period.contains(now), daily.contains(now));
    assert_eq!(period.current_start_at(now), daily.current_start_at(now));
    assert_eq!(period.next_end_at(now), daily.next_end_at(now));
    assert_eq!(
        period.boundary_at(Boundary::PreviousStart, now),
        daily.previous_start_at(now)
    );
}

#[test]
fn contains_on_uses_supplied_clock() {
    let period = Period::from(WeeklyPeriod::new(
        PeriodLabel::default(),
        DayTimeEdge::new(Weekday::Sat, "23:00"),
        DayTimeEdge::new(Weekday::Sun, "07:00"),
    ));
    assert!(period.contains_on(&FixedClock(at(24, 3, 0))));
    assert!(!period.contains_on(&FixedClock(at(20, 3, 0))));
}
